//! URI to filesystem path conversion
//!
//! The host hands the extension entry locations as URI strings. Only the
//! local `file://` scheme maps to a launchable path; every other scheme
//! (`sftp://`, `trash://`, ...) yields no path and the caller skips the
//! entry silently.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::Url;

const FILE_SCHEME: &str = "file://";

/// Convert a URI string to a local filesystem path.
///
/// Strips the `file://` prefix and percent-decodes the remainder (`%20` ->
/// space, multi-byte escapes as UTF-8). Malformed escape sequences are kept
/// as-is rather than rejected. Returns `None` for any other scheme.
///
/// An authority component is not parsed out: `file://host/path` decodes to
/// `host/path`. Local file managers only ever produce empty authorities
/// (`file:///...`).
pub fn path_from_uri(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix(FILE_SCHEME)?;
    let decoded = percent_decode_str(rest).decode_utf8_lossy();
    Some(PathBuf::from(decoded.into_owned()))
}

/// Convert an absolute local path to a `file://` URI.
///
/// Returns `None` for relative paths.
pub fn uri_from_path(path: &Path) -> Option<String> {
    Url::from_file_path(path).ok().map(|url| url.to_string())
}
