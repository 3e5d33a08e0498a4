//! Core types and transformations for the emoji shortcut service.
//!
//! This crate provides:
//! - Detection of the emoji metadata table shape (per-emoji records or flat names)
//! - Building the ordered phrase/shortcut mapping from that table
//! - Serializing the mapping as an iOS property list or a CSV file
//! - Shared error types

pub mod bundled;
mod error;
pub mod export;
pub mod mapping;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Locale whose names are used for shortcuts, and the locale column in CSV exports.
pub const LOCALE: &str = "en";

pub use error::{Error, Result};
pub use export::{Export, ExportKind, export, to_csv, to_plist};
pub use mapping::{
    EmojiEntry, PREVIEW_LIMIT, SourceShape, build, build_bundled, build_from_slice, clean_name,
    preview,
};
