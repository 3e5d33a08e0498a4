//! Process-wide memoized emoji mapping.
//!
//! The mapping is built from the metadata source on the first request and
//! reused by every request after it. There is a single entry that never
//! expires.
//!
//! ## Concurrency
//!
//! Requests that arrive while the first build is running wait for it
//! instead of starting their own, and readers only ever see the finished,
//! immutable mapping. A failed build leaves the cache empty so that the
//! next request retries.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use emoji_shortcuts_core::{EmojiEntry, build_bundled, build_from_slice};
use tokio::sync::OnceCell;

use crate::error::AppError;

/// Where the emoji metadata table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// Table generated from the `emojis` crate.
    Bundled,
    /// JSON file read on first use.
    File(PathBuf),
}

impl MetadataSource {
    /// Load the table and build the mapping from it.
    pub async fn load(&self) -> Result<Vec<EmojiEntry>, AppError> {
        match self {
            Self::Bundled => Ok(build_bundled()),
            Self::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| AppError::ReadSource {
                        path: path.clone(),
                        source,
                    })?;
                Ok(build_from_slice(&bytes)?)
            }
        }
    }
}

/// Built-once holder of the emoji mapping.
#[derive(Debug)]
pub struct MappingCache {
    source: MetadataSource,
    mapping: OnceCell<Arc<[EmojiEntry]>>,
    builds: AtomicUsize,
}

impl MappingCache {
    pub fn new(source: MetadataSource) -> Self {
        Self {
            source,
            mapping: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Get the mapping, building it if this is the first successful call.
    pub async fn get(&self) -> Result<Arc<[EmojiEntry]>, AppError> {
        let mapping = self
            .mapping
            .get_or_try_init(|| async {
                self.builds.fetch_add(1, Ordering::Relaxed);
                tracing::info!(source = ?self.source, "building emoji mapping");
                let entries = self.source.load().await?;
                Ok::<_, AppError>(Arc::from(entries))
            })
            .await?;

        Ok(Arc::clone(mapping))
    }

    /// Whether the mapping has been built.
    pub fn is_built(&self) -> bool {
        self.mapping.initialized()
    }

    /// Number of build attempts so far, successful or not.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
