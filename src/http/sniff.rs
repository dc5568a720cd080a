//! Content sniffing module
//!
//! Determines a Content-Type from the leading bytes of a buffer, following
//! the standard mime-sniffing heuristics. Only the first 512 bytes are
//! considered.

/// Maximum number of bytes considered when sniffing
const SNIFF_LEN: usize = 512;

/// HTML tag prefixes that identify a document as `text/html`.
/// Each match must be followed by a space or `>` in the input.
const HTML_SIGS: [&str; 16] = [
    "<!DOCTYPE HTML",
    "<HTML",
    "<HEAD",
    "<SCRIPT",
    "<IFRAME",
    "<H1",
    "<DIV",
    "<FONT",
    "<TABLE",
    "<A",
    "<STYLE",
    "<TITLE",
    "<B",
    "<BODY",
    "<BR",
    "<P",
];

/// Sniff a Content-Type from the first bytes of `data`.
///
/// Deterministic and side-effect free. An empty buffer sniffs as plain text.
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some(ct) = sniff_bom(data) {
        return ct;
    }

    // Tag-based signatures skip leading whitespace
    let trimmed = skip_ws(data);
    for sig in HTML_SIGS {
        if matches_html_sig(trimmed, sig.as_bytes()) {
            return "text/html; charset=utf-8";
        }
    }
    if trimmed.len() >= 5 && trimmed[..5].eq_ignore_ascii_case(b"<?xml") {
        return "text/xml; charset=utf-8";
    }
    if trimmed.starts_with(b"<!--") {
        return "text/html; charset=utf-8";
    }

    if let Some(ct) = sniff_magic(data) {
        return ct;
    }

    if data.iter().any(|&b| is_binary_byte(b)) {
        "application/octet-stream"
    } else {
        "text/plain; charset=utf-8"
    }
}

/// Byte-order marks
fn sniff_bom(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0xFE, 0xFF]) {
        Some("text/plain; charset=utf-16be")
    } else if data.starts_with(&[0xFF, 0xFE]) {
        Some("text/plain; charset=utf-16le")
    } else if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some("text/plain; charset=utf-8")
    } else {
        None
    }
}

/// Exact magic-number signatures
fn sniff_magic(data: &[u8]) -> Option<&'static str> {
    let table: [(&[u8], &'static str); 13] = [
        (b"%PDF-", "application/pdf"),
        (b"%!PS-Adobe-", "application/postscript"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], "image/png"),
        (&[0xFF, 0xD8, 0xFF], "image/jpeg"),
        (b"BM", "image/bmp"),
        (b"wOFF", "font/woff"),
        (b"wOF2", "font/woff2"),
        (b"OggS\0", "application/ogg"),
        (b"ID3", "audio/mpeg"),
        (b"PK\x03\x04", "application/zip"),
        (&[0x1F, 0x8B, 0x08], "application/x-gzip"),
    ];
    for (magic, ct) in table {
        if data.starts_with(magic) {
            return Some(ct);
        }
    }

    // RIFF containers carry their subtype at offset 8
    if data.len() >= 12 && data.starts_with(b"RIFF") {
        return match &data[8..12] {
            b"WEBP" => Some("image/webp"),
            b"WAVE" => Some("audio/wave"),
            b"AVI " => Some("video/avi"),
            _ => None,
        };
    }

    // ISO base media files carry "ftyp" at offset 4
    if data.len() >= 8 && &data[4..8] == b"ftyp" {
        return Some("video/mp4");
    }

    None
}

fn skip_ws(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|&b| !matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

/// Case-insensitive tag match; the byte after the tag must terminate it.
fn matches_html_sig(data: &[u8], sig: &[u8]) -> bool {
    if data.len() < sig.len() + 1 {
        return false;
    }
    if !data[..sig.len()].eq_ignore_ascii_case(sig) {
        return false;
    }
    matches!(data[sig.len()], b' ' | b'>')
}

/// Control bytes that mark a buffer as binary rather than text
const fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(sniff_content_type(&data), "image/png");
    }

    #[test]
    fn test_jpeg_and_gif_magic() {
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"GIF89a..."), "image/gif");
    }

    #[test]
    fn test_html_document() {
        assert_eq!(
            sniff_content_type(b"<!DOCTYPE html><html></html>"),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            sniff_content_type(b"  \n<html lang=\"en\">"),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_html_tag_requires_terminator() {
        // "<htmlx" is not an html tag
        assert_eq!(sniff_content_type(b"<htmlx"), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_xml_declaration() {
        assert_eq!(
            sniff_content_type(b"<?xml version=\"1.0\"?>"),
            "text/xml; charset=utf-8"
        );
    }

    #[test]
    fn test_pdf_zip_gzip() {
        assert_eq!(sniff_content_type(b"%PDF-1.7"), "application/pdf");
        assert_eq!(sniff_content_type(b"PK\x03\x04rest"), "application/zip");
        assert_eq!(
            sniff_content_type(&[0x1F, 0x8B, 0x08, 0x00]),
            "application/x-gzip"
        );
    }

    #[test]
    fn test_riff_subtypes() {
        assert_eq!(sniff_content_type(b"RIFF\x24\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff_content_type(b"RIFF\x24\x00\x00\x00WAVEfmt "), "audio/wave");
    }

    #[test]
    fn test_mp4_ftyp() {
        assert_eq!(
            sniff_content_type(b"\x00\x00\x00\x18ftypisom"),
            "video/mp4"
        );
    }

    #[test]
    fn test_fonts() {
        assert_eq!(sniff_content_type(b"wOFFabcd"), "font/woff");
        assert_eq!(sniff_content_type(b"wOF2abcd"), "font/woff2");
    }

    #[test]
    fn test_plain_text_and_binary() {
        assert_eq!(
            sniff_content_type(b"just some words\n"),
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            sniff_content_type(&[0x01, 0x02, 0x03]),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_empty_is_text() {
        assert_eq!(sniff_content_type(b""), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_utf8_bom() {
        assert_eq!(
            sniff_content_type(&[0xEF, 0xBB, 0xBF, b'h', b'i']),
            "text/plain; charset=utf-8"
        );
    }
}
