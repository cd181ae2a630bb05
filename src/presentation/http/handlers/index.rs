//! Client Form Handler
//!
//! Serves the browser calculator form. The page is embedded at compile
//! time so the binary is self-contained.

use axum::response::Html;

/// Calculator form page, embedded from static/index.html
const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

/// Serve the calculator form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
