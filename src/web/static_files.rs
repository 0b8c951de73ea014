//! Embedded static asset serving.
//!
//! The stylesheet is embedded in the binary at compile time, so the server
//! has no runtime dependency on a static directory and the standalone HTML
//! export can inline the same bytes.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Path the rendered page links its stylesheet against.
pub const STYLESHEET_ROUTE: &str = "/static/style.css";

/// Static assets embedded from the `static/` directory.
#[derive(Embed)]
#[folder = "static"]
#[include = "*.css"]
pub struct StaticAssets;

/// Serves an embedded static file by name.
pub async fn serve_static(Path(file): Path<String>) -> Response {
    match StaticAssets::get(&file) {
        Some(content) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "public, max-age=3600")
                .body(Body::from(content.data.to_vec()))
                .unwrap_or_else(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to create response",
                    )
                        .into_response()
                })
        }
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Returns the embedded stylesheet text for standalone HTML export.
#[must_use]
pub fn stylesheet_text() -> Option<String> {
    StaticAssets::get("style.css")
        .map(|content| String::from_utf8_lossy(content.data.as_ref()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_embedded() {
        let css = stylesheet_text().expect("style.css should be embedded");
        assert!(css.contains("body"));
    }
}
