//! Utility modules for file decoding, matching, and formatting.
//!
//! Provides:
//! - [`read_file`], [`read_files`] - Async file decoding to data URLs
//! - [`matches_accept`] - HTML `accept` attribute matching
//! - [`convert_bytes_to_mbs_or_kbs`], [`is_image`] - Display helpers

pub mod accept;
pub mod file;
pub mod format;

pub use accept::matches_accept;
pub use file::{read_file, read_files, FileReadError};
pub use format::{convert_bytes_to_mbs_or_kbs, is_image};
