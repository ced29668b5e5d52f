//! URL path to filesystem path mapping

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// The request path could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPath;

/// Percent-decode a request path.
///
/// Fails on sequences that do not decode to UTF-8 and on NUL bytes.
pub fn decode(raw: &str) -> Result<String, InvalidPath> {
    let decoded = urlencoding::decode(raw).map_err(|_| InvalidPath)?;
    if decoded.contains('\0') {
        return Err(InvalidPath);
    }
    Ok(decoded.into_owned())
}

/// Lexically clean a URL path into an absolute one.
///
/// Empty and `.` segments are dropped; `..` removes the previous segment
/// and stops at the root.
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Cleaned form of a request path; a trailing slash is kept
pub fn canonical(path: &str) -> String {
    let mut cleaned = clean(path);
    if path.ends_with('/') && cleaned != "/" {
        cleaned.push('/');
    }
    cleaned
}

/// Percent-encode each segment of a decoded path for a `Location` header
pub fn encode(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a cleaned URL path onto `root`.
///
/// Returns `None` when a segment holds the platform separator, which would
/// otherwise let one URL segment name several directories.
pub fn to_fs_path(root: &Path, cleaned: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in cleaned.split('/').filter(|s| !s.is_empty()) {
        if MAIN_SEPARATOR != '/' && segment.contains(MAIN_SEPARATOR) {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

/// Last element of a URL path, ignoring trailing slashes (`/` for the root)
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
