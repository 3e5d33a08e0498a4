//! Route definitions for the emoji shortcuts service.
//!
//! ## Routes
//!
//! - `GET /` - Landing page with a preview of the mapping
//! - `GET /download/{platform}` - Full mapping as a file (`ios` → plist, otherwise CSV)

mod download;
mod home;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/download/{platform}", get(download::download_handler))
        .with_state(state)
}

/// Quoted ETag value from the xxHash of a response body.
fn etag(body: &[u8]) -> Option<HeaderValue> {
    let hash = xxhash_rust::xxh3::xxh3_64(body);
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    HeaderValue::from_str(&etag).ok()
}
