//! Content-Type detection module
//!
//! Suffix rules for the three extensions browsers mishandle when sniffed,
//! byte sniffing for everything else.

use crate::http::sniff;

/// Determine the Content-Type for a served file.
///
/// `.css`, `.js` and `.svg` are resolved from the path suffix (sniffing gets
/// these wrong), everything else is sniffed from the leading bytes of `data`.
pub fn detect_content_type(path: &str, data: &[u8]) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else {
        sniff::sniff_content_type(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rules() {
        assert_eq!(detect_content_type("a.css", b"body {}"), "text/css");
        assert_eq!(detect_content_type("a.js", b"var x;"), "application/javascript");
        assert_eq!(detect_content_type("a.svg", b"<svg/>"), "image/svg+xml");
    }

    #[test]
    fn test_suffix_beats_sniffing() {
        // An svg file sniffs as xml/html; the suffix rule must win
        let svg = b"<?xml version=\"1.0\"?><svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert_eq!(detect_content_type("icon.svg", svg), "image/svg+xml");
    }

    #[test]
    fn test_sniffed_png_ignores_extension() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_content_type("a.png", &png), "image/png");
        // Extension is irrelevant for non-special suffixes
        assert_eq!(detect_content_type("a.dat", &png), "image/png");
    }

    #[test]
    fn test_markdown_sniffs_as_text() {
        assert_eq!(
            detect_content_type("slides.md", b"# Title\n\nHello"),
            "text/plain; charset=utf-8"
        );
    }
}
