//! File data types shared across components.

use web_sys::File;

use crate::utils::is_image;

/// A raw browser file handle paired with its decoded preview payload.
///
/// Created when a drop is accepted and its content finishes decoding.
/// The caller of [`DropzoneArea`](crate::DropzoneArea) owns the list of
/// these; the widget only reads it and reports changes via callbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct FileObject {
    /// The underlying browser `File` handle.
    pub file: File,
    /// Data-URL payload for inline rendering, `None` if not decoded.
    pub data: Option<String>,
}

impl FileObject {
    pub fn new(file: File, data: Option<String>) -> Self {
        Self { file, data }
    }

    /// The file's name as reported by the browser.
    pub fn name(&self) -> String {
        self.file.name()
    }

    /// Whether the file can be shown as an inline image preview.
    pub fn is_image(&self) -> bool {
        is_image(&self.file.type_())
    }

    /// DOM-free projection for formatters and matching.
    pub fn details(&self) -> FileDetails {
        FileDetails::from(&self.file)
    }
}

/// Lightweight, DOM-free description of a file.
///
/// Message formatters and accept matching take this instead of a raw
/// `web_sys::File` so they stay pure and testable outside a browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDetails {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileDetails {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

impl From<&File> for FileDetails {
    fn from(file: &File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_construction() {
        let details = FileDetails::new("photo.png", "image/png", 1024);
        assert_eq!(details.name, "photo.png");
        assert_eq!(details.mime, "image/png");
        assert_eq!(details.size, 1024);
    }
}
