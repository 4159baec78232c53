//! Drag-export payload construction
//!
//! Converts one selected entry into the platform's standard file-list
//! transfer format: a single absolute `file://` URI, percent-encoded
//! per RFC 3986, framed as a CRLF-terminated `text/uri-list` line, with
//! a copy drop action advertised. Only single-item export exists; there
//! is no multi-select.

use std::path::{Component, Path};

use crate::model::FileEntry;

/// MIME type of the payload body
pub const URI_LIST_MIME: &str = "text/uri-list";

/// Drop action advertised to the receiving application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    Copy,
}

/// A data-transfer payload for exactly one dragged entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// `text/uri-list` body: one CRLF-terminated `file://` URI
    pub uri_list: String,
    /// Advertised drop action
    pub action: DropAction,
}

impl DragPayload {
    /// Build the payload for the entry the user is dragging.
    pub fn for_entry(entry: &FileEntry) -> Self {
        Self {
            uri_list: format!("{}\r\n", file_uri(&entry.path)),
            action: DropAction::Copy,
        }
    }
}

/// Encode an absolute path as a `file://` URI.
///
/// Each path segment is percent-encoded independently so separators
/// survive; non-UTF-8 segments are carried lossily, matching the
/// display treatment of their entry names.
pub fn file_uri(path: &Path) -> String {
    let mut uri = String::from("file://");

    for component in path.components() {
        match component {
            Component::RootDir => {}
            Component::Prefix(prefix) => {
                // Windows drive prefix: file:///C:/...
                uri.push('/');
                uri.push_str(&prefix.as_os_str().to_string_lossy());
                continue;
            }
            Component::Normal(segment) => {
                uri.push('/');
                uri.push_str(&urlencoding::encode(&segment.to_string_lossy()));
            }
            Component::CurDir | Component::ParentDir => {
                uri.push('/');
                uri.push_str(&urlencoding::encode(&component.as_os_str().to_string_lossy()));
            }
        }
    }

    uri
}
