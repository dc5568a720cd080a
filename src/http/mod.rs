//! HTTP protocol layer module
//!
//! Content-type detection and response builders, decoupled from the
//! slide-serving business logic.

pub mod mime;
pub mod response;
pub mod sniff;

// Re-export commonly used functions
pub use mime::detect_content_type;
pub use response::{
    build_404_response, build_405_response, build_500_response, build_file_response,
    build_html_response, build_options_response,
};
