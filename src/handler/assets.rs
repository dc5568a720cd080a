//! Embedded asset serving module
//!
//! Serves the reveal.js framework files compiled into the binary. The bundle
//! is read-only and fully in memory; every request is a fresh lookup, which
//! costs nothing beyond the map access.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use rust_embed::RustEmbed;

use crate::handler::router::RequestContext;
use crate::handler::Handler;
use crate::http;

/// URL prefix owned by the asset handler
pub const ASSET_PREFIX: &str = "/revealjs/";

/// Static files embedded at build time, rooted at `assets/`.
/// Request paths map to bundle keys unchanged (minus the leading slash), so
/// `/revealjs/dist/reveal.js` resolves to `assets/revealjs/dist/reveal.js`.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct AssetBundle;

/// Serves the embedded reveal.js bundle
pub struct AssetHandler;

impl AssetHandler {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for AssetHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for AssetHandler {
    async fn handle(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        let key = ctx.path.trim_start_matches('/');
        match AssetBundle::get(key) {
            Some(file) => {
                let content_type = http::detect_content_type(ctx.path, &file.data);
                http::build_file_response(&file.data, content_type, ctx.is_head)
            }
            None => http::build_404_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
        }
    }

    #[tokio::test]
    async fn test_bundled_css_served_with_length() {
        let handler = AssetHandler::new();
        let resp = handler.handle(&ctx("/revealjs/dist/reveal.css")).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");

        let embedded = AssetBundle::get("revealjs/dist/reveal.css").unwrap();
        assert_eq!(
            resp.headers()["Content-Length"],
            embedded.data.len().to_string().as_str()
        );
    }

    #[tokio::test]
    async fn test_bundled_js_content_type() {
        let handler = AssetHandler::new();
        let resp = handler.handle(&ctx("/revealjs/dist/reveal.js")).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
    }

    #[tokio::test]
    async fn test_every_bundled_framework_file_is_served() {
        let handler = AssetHandler::new();
        for key in AssetBundle::iter().filter(|k| k.starts_with("revealjs/")) {
            let path = format!("/{key}");
            let resp = handler.handle(&ctx(&path)).await;
            assert_eq!(resp.status(), 200, "failed for {path}");
            let expected = AssetBundle::get(&key).unwrap().data.len();
            assert_eq!(
                resp.headers()["Content-Length"],
                expected.to_string().as_str(),
                "length mismatch for {path}"
            );
        }
    }

    #[tokio::test]
    async fn test_missing_asset_is_404() {
        let handler = AssetHandler::new();
        let resp = handler.handle(&ctx("/revealjs/no/such/file.js")).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_identical() {
        let handler = AssetHandler::new();
        let first = handler.handle(&ctx("/revealjs/dist/theme/black.css")).await;
        let second = handler.handle(&ctx("/revealjs/dist/theme/black.css")).await;
        assert_eq!(first.status(), second.status());
        assert_eq!(
            first.headers()["Content-Length"],
            second.headers()["Content-Length"]
        );
    }

    #[tokio::test]
    async fn test_head_keeps_headers() {
        let handler = AssetHandler::new();
        let resp = handler
            .handle(&RequestContext {
                path: "/revealjs/dist/reveal.js",
                is_head: true,
            })
            .await;
        assert_eq!(resp.status(), 200);
        let embedded = AssetBundle::get("revealjs/dist/reveal.js").unwrap();
        assert_eq!(
            resp.headers()["Content-Length"],
            embedded.data.len().to_string().as_str()
        );
    }
}
