//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cache::{MappingCache, MetadataSource};
use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Emoji mapping, built on first use.
    pub mappings: Arc<MappingCache>,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// The mapping itself is not built here; the first request triggers it.
    pub fn new(config: Config) -> Self {
        let source = match &config.data_path {
            Some(path) => MetadataSource::File(path.clone()),
            None => MetadataSource::Bundled,
        };

        tracing::info!(source = ?source, "application state initialized");

        Self {
            config: Arc::new(config),
            mappings: Arc::new(MappingCache::new(source)),
        }
    }
}
