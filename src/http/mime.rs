//! MIME type detection module
//!
//! Content-Type comes from the file extension; files with an unknown
//! extension are sniffed from their first bytes.

use std::path::Path;

/// Number of leading bytes inspected by [`sniff`]
pub const SNIFF_LEN: usize = 512;

const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Content-Type for a served file, falling back to sniffing `content`
pub fn content_type(path: &Path, content: &[u8]) -> &'static str {
    from_extension(path).unwrap_or_else(|| sniff(content))
}

/// Look up the Content-Type registered for the file extension
///
/// # Examples
/// ```
/// use std::path::Path;
/// use dev_server::http::mime::from_extension;
/// assert_eq!(from_extension(Path::new("a/index.HTML")), Some("text/html; charset=utf-8"));
/// assert_eq!(from_extension(Path::new("notes")), None);
/// ```
pub fn from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "html" | "htm" => TEXT_HTML,
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "xml" => "text/xml; charset=utf-8",
        "txt" => TEXT_PLAIN,
        "md" => "text/markdown; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "wasm" => "application/wasm",

        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",

        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        _ => return None,
    };
    Some(mime)
}

/// Guess a Content-Type from the leading bytes of `data`
pub fn sniff(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some(mime) = sniff_signature(data) {
        return mime;
    }

    let text = trim_leading_whitespace(data);
    if is_html(text) {
        return TEXT_HTML;
    }
    if text.starts_with(b"<?xml") {
        return "text/xml; charset=utf-8";
    }

    if data.iter().any(|&b| is_binary(b)) {
        OCTET_STREAM
    } else {
        TEXT_PLAIN
    }
}

fn sniff_signature(data: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1f\x8b\x08", "application/x-gzip"),
        (b"\x00asm", "application/wasm"),
        (b"\xef\xbb\xbf", TEXT_PLAIN),
        (b"\xfe\xff", "text/plain; charset=utf-16be"),
        (b"\xff\xfe", "text/plain; charset=utf-16le"),
    ];

    if data.len() >= 14 && data.starts_with(b"RIFF") && &data[8..14] == b"WEBPVP" {
        return Some("image/webp");
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
        .map(|&(_, mime)| mime)
}

fn is_html(text: &[u8]) -> bool {
    const TAGS: &[&[u8]] = &[
        b"<!DOCTYPE HTML",
        b"<HTML",
        b"<HEAD",
        b"<SCRIPT",
        b"<IFRAME",
        b"<H1",
        b"<DIV",
        b"<FONT",
        b"<TABLE",
        b"<A",
        b"<STYLE",
        b"<TITLE",
        b"<B",
        b"<BODY",
        b"<BR",
        b"<P",
        b"<!--",
    ];

    TAGS.iter().any(|tag| {
        text.len() > tag.len()
            && text[..tag.len()].eq_ignore_ascii_case(tag)
            // The tag name must end here, so "<BRAND" is not "<BR"
            && matches!(text[tag.len()], b' ' | b'>')
    })
}

fn trim_leading_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

// Control bytes that do not occur in text files
const fn is_binary(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_extensions() {
        assert_eq!(from_extension(Path::new("index.html")), Some(TEXT_HTML));
        assert_eq!(
            from_extension(Path::new("js/gantt.js")),
            Some("text/javascript; charset=utf-8")
        );
        assert_eq!(
            from_extension(Path::new("style.CSS")),
            Some("text/css; charset=utf-8")
        );
        assert_eq!(from_extension(Path::new("logo.png")), Some("image/png"));
        assert_eq!(from_extension(Path::new("README")), None);
        assert_eq!(from_extension(Path::new("types.d.ts")), None);
    }

    #[test]
    fn test_sniff_html() {
        assert_eq!(sniff(b"  \n<!doctype html><html></html>"), TEXT_HTML);
        assert_eq!(sniff(b"<p>hi</p>"), TEXT_HTML);
        assert_eq!(sniff(b"<!-- note -->"), TEXT_HTML);
        assert_eq!(sniff(b"<brand>"), TEXT_PLAIN);
    }

    #[test]
    fn test_sniff_signatures() {
        assert_eq!(sniff(b"\x89PNG\r\n\x1a\n\x00\x00"), "image/png");
        assert_eq!(sniff(b"%PDF-1.7"), "application/pdf");
        assert_eq!(sniff(b"GIF89a..."), "image/gif");
        assert_eq!(sniff(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff(b"<?xml version=\"1.0\"?>"), "text/xml; charset=utf-8");
    }

    #[test]
    fn test_sniff_text_and_binary() {
        assert_eq!(sniff(b"export declare const x: number;\n"), TEXT_PLAIN);
        assert_eq!(sniff(b""), TEXT_PLAIN);
        assert_eq!(sniff(b"\x00\x01\x02\x03"), OCTET_STREAM);
    }

    #[test]
    fn test_sniff_only_looks_at_prefix() {
        let mut data = vec![b'a'; SNIFF_LEN];
        data.push(0x00);
        assert_eq!(sniff(&data), TEXT_PLAIN);
    }

    #[test]
    fn test_content_type_prefers_extension() {
        assert_eq!(content_type(Path::new("data.json"), b"<html>"), "application/json");
        assert_eq!(content_type(Path::new("page"), b"<html>"), TEXT_HTML);
    }
}
