//! Slide page and working-directory serving module
//!
//! Handles every path outside the asset prefix: a matching file under the
//! serve root is returned verbatim, anything else renders the embedded slide
//! template with the configured presentation parameters.

use std::path::PathBuf;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::Presentation;
use crate::handler::router::RequestContext;
use crate::handler::Handler;
use crate::http;
use crate::logger;

/// The single slide-page template, fixed at build time.
const SLIDE_TEMPLATE: &str = include_str!("../../assets/templates/slide.html");

/// Serves user files from the serve root, falling back to the slide page
pub struct RootHandler {
    presentation: Presentation,
    serve_root: PathBuf,
}

impl RootHandler {
    pub const fn new(presentation: Presentation, serve_root: PathBuf) -> Self {
        Self {
            presentation,
            serve_root,
        }
    }

    /// Substitute the presentation parameters into the template.
    ///
    /// Substitution is done fresh per request; there is no parsed
    /// representation to cache and no way for rendering to fail.
    fn render_slide_page(&self) -> String {
        SLIDE_TEMPLATE
            .replace("{{path}}", &self.presentation.path)
            .replace("{{theme}}", &self.presentation.theme_href())
            .replace("{{transition}}", &self.presentation.transition)
    }

    /// Load the file a request path points at, if any.
    ///
    /// `Ok(None)` covers everything that should fall back to the template:
    /// no such file, a directory, an unreadable file, or a path escaping the
    /// serve root. `Err` is reserved for the serve root itself being broken.
    async fn load_local_file(&self, url_path: &str) -> std::io::Result<Option<Vec<u8>>> {
        let relative = url_path.trim_start_matches('/');
        if relative.is_empty() {
            return Ok(None);
        }

        let root = self.serve_root.canonicalize()?;

        let Ok(candidate) = root.join(relative).canonicalize() else {
            return Ok(None);
        };
        if !candidate.starts_with(&root) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                url_path,
                candidate.display()
            ));
            return Ok(None);
        }
        if !candidate.is_file() {
            return Ok(None);
        }

        match fs::read(&candidate).await {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {}",
                    candidate.display(),
                    e
                ));
                Ok(None)
            }
        }
    }
}

impl Handler for RootHandler {
    async fn handle(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        match self.load_local_file(ctx.path).await {
            Ok(Some(content)) => {
                let content_type = http::detect_content_type(ctx.path, &content);
                http::build_file_response(&content, content_type, ctx.is_head)
            }
            Ok(None) => http::build_html_response(self.render_slide_page(), ctx.is_head),
            Err(e) => {
                logger::log_error(&format!("Serve root unavailable: {e}"));
                http::build_500_response()
            }
        }
    }
}
