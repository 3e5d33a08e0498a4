//! Landing page with a preview of the mapping.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use emoji_shortcuts_core::preview;

use super::etag;
use crate::error::{AppError, PageError};
use crate::render;
use crate::state::AppState;

/// Render the landing page.
pub async fn home_page(State(state): State<AppState>) -> Result<Response, PageError> {
    tracing::debug!("request received for index");
    render_home(&state).await.map_err(PageError)
}

async fn render_home(state: &AppState) -> Result<Response, AppError> {
    let mappings = state.mappings.get().await?;
    let examples = preview(&mappings);

    let html = render::index_page(&state.config.site_name, examples, mappings.len()).into_string();

    Ok(build_response(html))
}

/// Build an HTTP response with HTML content and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    if let Some(val) = etag(html.as_bytes()) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html).into_response()
}
