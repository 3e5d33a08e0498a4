//! Per-platform download of the full mapping.
//!
//! Handles `GET /download/{platform}`. `ios` yields a property list; every
//! other platform name falls back to CSV.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use emoji_shortcuts_core::{Export, ExportKind, export};

use super::etag;
use crate::error::{AppError, DownloadError};
use crate::state::AppState;

/// Serve the mapping as a file attachment for the requested platform.
pub async fn download_handler(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Response, DownloadError> {
    let kind = ExportKind::from_platform(&platform);
    tracing::debug!(platform = %platform, ?kind, "download requested");

    build_export(&state, kind)
        .await
        .map(build_response)
        .map_err(DownloadError)
}

async fn build_export(state: &AppState, kind: ExportKind) -> Result<Export, AppError> {
    let mappings = state.mappings.get().await?;
    Ok(export(&mappings, kind)?)
}

/// Build an attachment response for an export.
fn build_response(export: Export) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(export.content_type()),
    );

    let disposition = format!("attachment; filename=\"{}\"", export.filename());
    if let Ok(val) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, val);
    }

    if let Some(val) = etag(&export.bytes) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, export.bytes).into_response()
}
