//! Emoji Shortcuts - preview and download emoji text shortcuts.
//!
//! This crate provides a small HTTP server that turns an emoji metadata
//! table into phrase/shortcut pairs (e.g. `🔥` → `:fire`), shows a sample
//! of them on a landing page, and serves the whole mapping as a file for
//! a keyboard's text replacement import.
//!
//! # Architecture
//!
//! - **Cache**: The mapping is built from the metadata source on first use and
//!   kept for the lifetime of the process
//! - **Render**: Generates the landing page using maud (compile-time templates)
//! - **Routes**: Landing page and per-platform downloads
//!
//! # URL Pattern
//!
//! ```text
//! GET /                     landing page with a preview of the mapping
//! GET /download/{platform}  `ios` → TypewiseEmojis.plist, anything else → TypewiseEmojis.csv
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use cache::{MappingCache, MetadataSource};
pub use config::Config;
pub use routes::router;
pub use state::AppState;
