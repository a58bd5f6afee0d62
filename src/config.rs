//! Crate configuration.
//!
//! Centralizes the default limits, display texts, and message formatters
//! used throughout the components. Every default here can be overridden
//! per widget through [`DropzoneConfig`](crate::DropzoneConfig) /
//! [`DialogConfig`](crate::DialogConfig).

use crate::models::FileDetails;
use crate::utils::{convert_bytes_to_mbs_or_kbs, matches_accept};

// =============================================================================
// Limits
// =============================================================================

/// Default maximum number of accepted files.
pub const DEFAULT_FILES_LIMIT: usize = 3;

/// Default maximum file size in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 3_000_000;

// =============================================================================
// Display Texts
// =============================================================================

/// Prompt shown inside the drop area.
pub const DEFAULT_DROPZONE_TEXT: &str = "Drag and drop a file here or click";

/// Heading shown above the standalone preview section.
pub const DEFAULT_PREVIEW_TEXT: &str = "Preview:";

/// Dialog heading.
pub const DEFAULT_DIALOG_TITLE: &str = "Upload file";

/// Dialog close button label.
pub const DEFAULT_CANCEL_BUTTON_TEXT: &str = "Cancel";

/// Dialog confirm button label.
pub const DEFAULT_SUBMIT_BUTTON_TEXT: &str = "Submit";

/// Dialog CSS max-width.
pub const DEFAULT_DIALOG_MAX_WIDTH: &str = "600px";

// =============================================================================
// Snackbar Configuration
// =============================================================================

/// How long a notification stays on screen before auto-hiding (ms).
pub const SNACKBAR_AUTO_HIDE_MS: u32 = 6_000;

// =============================================================================
// Default Message Formatters
// =============================================================================

/// Message shown when a batch would push the file count past the limit.
pub fn default_file_limit_exceed_message(files_limit: usize) -> String {
    format!("Maximum allowed number of files exceeded. Only {files_limit} allowed")
}

/// Per-file fragment of the success notification.
pub fn default_file_added_message(file_name: String) -> String {
    format!("File {file_name} successfully added.")
}

/// Message shown when a file is removed from the preview list.
pub fn default_file_removed_message(file_name: String) -> String {
    format!("File {file_name} removed.")
}

/// Message shown for a rejected file, enumerating which checks failed.
pub fn default_drop_reject_message(
    rejected: &FileDetails,
    accepted_files: &[String],
    max_file_size: u64,
) -> String {
    let mut message = format!("File {} was rejected. ", rejected.name);
    if !matches_accept(&rejected.mime, &rejected.name, accepted_files) {
        message.push_str("File type not supported. ");
    }
    if rejected.size > max_file_size {
        message.push_str(&format!(
            "File is too big. Size limit is {}. ",
            convert_bytes_to_mbs_or_kbs(max_file_size)
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_exceed_message_names_the_limit() {
        assert_eq!(
            default_file_limit_exceed_message(3),
            "Maximum allowed number of files exceeded. Only 3 allowed"
        );
    }

    #[test]
    fn test_added_and_removed_messages() {
        assert_eq!(
            default_file_added_message("photo.png".into()),
            "File photo.png successfully added."
        );
        assert_eq!(
            default_file_removed_message("photo.png".into()),
            "File photo.png removed."
        );
    }

    #[test]
    fn test_reject_message_lists_every_failed_check() {
        let details = FileDetails::new("movie.mp4", "video/mp4", 5_000_000);
        let accepted = vec!["image/*".to_string()];
        let message = default_drop_reject_message(&details, &accepted, 3_000_000);
        assert!(message.starts_with("File movie.mp4 was rejected. "));
        assert!(message.contains("File type not supported. "));
        assert!(message.contains("File is too big. Size limit is 2.9 MB. "));
    }

    #[test]
    fn test_reject_message_for_oversize_only() {
        let details = FileDetails::new("big.png", "image/png", 5_000_000);
        let accepted = vec!["image/*".to_string()];
        let message = default_drop_reject_message(&details, &accepted, 3_000_000);
        assert!(!message.contains("File type not supported."));
        assert!(message.contains("File is too big."));
    }

    #[test]
    fn test_reject_message_respects_wildcard_accepts() {
        // A wildcard entry must not produce a false "type not supported".
        let details = FileDetails::new("photo.png", "image/png", 5_000_000);
        let accepted = vec!["image/*".to_string()];
        let message = default_drop_reject_message(&details, &accepted, 3_000_000);
        assert!(!message.contains("File type not supported."));
    }
}
