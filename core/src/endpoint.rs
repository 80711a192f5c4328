//! Endpoint path construction.
//!
//! Paths are relative to the versioned base URL and never start or end with
//! a slash. Segments are joined verbatim; callers pass route constants and
//! already-formatted ids. Caller-supplied string ids go through
//! [`path_segment`] first.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Join path segments with `/`.
pub fn join_segments(segments: &[&str]) -> String {
    segments.join("/")
}

/// Route segments, optionally followed by a numeric id.
pub fn endpoint(segments: &[&str], id: Option<u32>) -> String {
    let path = join_segments(segments);
    match id {
        Some(id) => format!("{path}/{id}"),
        None => path,
    }
}

/// Escape a free-form id so it stays a single path segment.
///
/// Empty ids and the dot segments `.` and `..` are rejected: escaping does
/// not stop a server from resolving them against the parent route.
pub fn path_segment(raw: &str) -> Result<String, ApiError> {
    if matches!(raw, "" | "." | "..") {
        return Err(ApiError::Encode(format!("invalid path segment {raw:?}")));
    }
    Ok(utf8_percent_encode(raw, SEGMENT).to_string())
}

/// Absolute URL for `path` under `base_url` (which already carries `/v{n}`).
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
