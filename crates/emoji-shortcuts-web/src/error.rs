//! Error types for the emoji shortcuts service.
//!
//! Failures never surface as server faults. The landing page renders the
//! error inside an ordinary HTML page, and downloads return it as plain
//! text, both with status 200.

use std::path::PathBuf;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use maud::html;

/// Failure while retrieving or serializing the mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The configured metadata file could not be read.
    #[error("failed to read emoji metadata from {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building or exporting the mapping failed.
    #[error(transparent)]
    Mapping(#[from] emoji_shortcuts_core::Error),
}

/// Error rendered as the landing page body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "error rendering index");

        let markup = html! {
            h2 { "An error occurred:" }
            pre { (self.0.to_string()) }
        };

        (StatusCode::OK, markup).into_response()
    }
}

/// Error returned in place of a download.
#[derive(Debug)]
pub struct DownloadError(pub AppError);

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "download failed");

        (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )],
            format!("Download error: {}", self.0),
        )
            .into_response()
    }
}
