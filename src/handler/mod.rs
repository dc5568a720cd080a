//! Request handler module
//!
//! Two handlers cover the whole HTTP surface: [`AssetHandler`] for the
//! embedded reveal.js bundle, [`RootHandler`] for working-directory files and
//! the templated slide page. The router dispatches between them by path
//! prefix.

pub mod assets;
pub mod router;
pub mod slides;

pub use assets::AssetHandler;
pub use router::{handle_request, RequestContext};
pub use slides::RootHandler;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// A request handler owning one region of the path space.
///
/// Handlers never fail the connection: every outcome, including internal
/// errors, is expressed as a response.
pub trait Handler {
    async fn handle(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>>;
}
