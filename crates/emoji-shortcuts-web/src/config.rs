//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:5001").
    pub bind_addr: String,

    /// Emoji metadata JSON file. `None` uses the table compiled into the binary.
    pub data_path: Option<PathBuf>,

    /// Site name shown in the page title and heading.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `EMOJI_BIND_ADDR`: Server bind address (default: "127.0.0.1:5001")
    /// - `EMOJI_DATA_PATH`: Emoji metadata JSON file (default: bundled table)
    /// - `EMOJI_SITE_NAME`: Site name (default: "Typewise Emoji Shortcuts")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("EMOJI_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5001".to_string());

        let data_path = std::env::var("EMOJI_DATA_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let site_name = std::env::var("EMOJI_SITE_NAME")
            .unwrap_or_else(|_| "Typewise Emoji Shortcuts".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            data_path = ?data_path,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            data_path,
            site_name,
        })
    }
}
