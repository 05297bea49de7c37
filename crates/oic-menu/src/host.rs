//! Host capability interface
//!
//! The file manager hands the extension opaque entry handles at menu-build
//! time. [`FsEntry`] is the narrow adapter trait over that object model: the
//! two operations the menu logic consumes, nothing else. Host bindings
//! implement it over their native file objects; tests implement it with
//! fixed values.

/// A file-system entry supplied by the host.
///
/// Implementations are read-only views owned by the host. The extension
/// never mutates an entry and never retains one past the callback that
/// received it -- activation handlers capture the entry's URI string, not
/// the handle itself.
pub trait FsEntry {
    /// The entry's location as a URI string (e.g. `file:///home/user/src`).
    fn uri(&self) -> String;

    /// Whether the entry denotes a directory.
    ///
    /// A background context always returns `true`: the folder being viewed
    /// is a directory by construction.
    fn is_directory(&self) -> bool;
}
