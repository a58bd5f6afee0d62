//! Configuration structs for the drop area and its dialog variant.
//!
//! Two explicit scopes instead of runtime prop splitting: everything the
//! drop area understands lives in [`DropzoneConfig`], everything the modal
//! shell understands lives in [`DialogConfig`], and
//! [`DropzoneConfig::for_dialog`] is the single mapping between the two
//! sets of defaults.

use leptos::prelude::*;

use crate::components::icons as ic;
use crate::config::{
    default_drop_reject_message, default_file_added_message, default_file_limit_exceed_message,
    default_file_removed_message, DEFAULT_CANCEL_BUTTON_TEXT, DEFAULT_DIALOG_MAX_WIDTH,
    DEFAULT_DIALOG_TITLE, DEFAULT_DROPZONE_TEXT, DEFAULT_FILES_LIMIT, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_PREVIEW_TEXT, DEFAULT_SUBMIT_BUTTON_TEXT, SNACKBAR_AUTO_HIDE_MS,
};
use crate::models::{FileDetails, FileObject, ShowAlerts};

// ============================================================================
// Reset affordance
// ============================================================================

/// The reset affordance rendered under the drop area.
///
/// Either absent, a ready-made view rendered verbatim, or a descriptor
/// wrapped in the default button.
#[derive(Clone, Default)]
pub enum Reset {
    /// No reset affordance.
    #[default]
    None,
    /// A caller-supplied view, rendered as-is.
    Element(ViewFn),
    /// A descriptor for the default outlined button.
    Button { on_click: Callback<()>, text: String },
}

// ============================================================================
// DropzoneConfig
// ============================================================================

/// Presentation and validation settings for [`DropzoneArea`](crate::DropzoneArea).
///
/// Immutable per render; supplied by the caller. `Default` matches the
/// standalone widget; [`Self::for_dialog`] matches the dialog embedding.
#[derive(Clone)]
pub struct DropzoneConfig {
    /// Accepted MIME types / extensions (`accept` attribute semantics).
    /// Empty accepts everything.
    pub accepted_files: Vec<String>,
    /// Maximum number of files. A limit of 1 puts the widget in
    /// single-file mode.
    pub files_limit: usize,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Prompt shown inside the drop area.
    pub dropzone_text: String,
    /// Heading shown above the standalone preview section.
    pub preview_text: String,
    /// Icon shown inside the drop area.
    pub icon: icondata::Icon,
    /// Show previews below the drop area.
    pub show_previews: bool,
    /// Show previews inside the drop area.
    pub show_previews_in_dropzone: bool,
    /// Show file names under in-dropzone previews.
    pub show_file_names: bool,
    /// Show file names under below-the-dropzone previews.
    pub show_file_names_in_preview: bool,
    /// Render previews as compact chips instead of grid items.
    pub use_chips_for_preview: bool,
    /// Suppress the invalid-drag visual state entirely.
    pub disable_rejection_feedback: bool,
    /// Which notification severities are visible.
    pub show_alerts: ShowAlerts,
    /// Snackbar auto-hide duration in milliseconds; 0 disables auto-hide.
    pub alert_auto_hide_ms: u32,
    /// Reset affordance under the drop area.
    pub reset: Reset,
    /// Message for a batch that would exceed `files_limit`.
    pub get_file_limit_exceed_message: Callback<usize, String>,
    /// Per-file message appended to the success notification.
    pub get_file_added_message: Callback<String, String>,
    /// Message for a removed file.
    pub get_file_removed_message: Callback<String, String>,
    /// Message for a rejected file: `(details, accepted_files, max_file_size)`.
    pub get_drop_reject_message: Callback<(FileDetails, Vec<String>, u64), String>,
    /// Override for the per-file preview visual.
    pub get_preview_icon: Option<Callback<FileObject, AnyView>>,
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            accepted_files: Vec::new(),
            files_limit: DEFAULT_FILES_LIMIT,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            dropzone_text: DEFAULT_DROPZONE_TEXT.to_string(),
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            icon: ic::CLOUD_UPLOAD,
            show_previews: false,
            show_previews_in_dropzone: true,
            show_file_names: false,
            show_file_names_in_preview: false,
            use_chips_for_preview: false,
            disable_rejection_feedback: false,
            show_alerts: ShowAlerts::All,
            alert_auto_hide_ms: SNACKBAR_AUTO_HIDE_MS,
            reset: Reset::None,
            get_file_limit_exceed_message: Callback::new(default_file_limit_exceed_message),
            get_file_added_message: Callback::new(default_file_added_message),
            get_file_removed_message: Callback::new(default_file_removed_message),
            get_drop_reject_message: Callback::new(
                |(details, accepted, max_file_size): (FileDetails, Vec<String>, u64)| {
                    default_drop_reject_message(&details, &accepted, max_file_size)
                },
            ),
            get_preview_icon: None,
        }
    }
}

impl DropzoneConfig {
    /// Defaults used when the drop area is embedded in a dialog: previews
    /// move below the drop area and carry file names.
    pub fn for_dialog() -> Self {
        Self {
            show_previews: true,
            show_previews_in_dropzone: false,
            show_file_names_in_preview: true,
            ..Self::default()
        }
    }

    /// Whether the hidden file input should allow multi-selection.
    pub fn is_multiple(&self) -> bool {
        self.files_limit > 1
    }

    /// Value for the hidden input's `accept` attribute.
    pub fn accept_attr(&self) -> Option<String> {
        if self.accepted_files.is_empty() {
            None
        } else {
            Some(self.accepted_files.join(","))
        }
    }
}

// ============================================================================
// DialogConfig
// ============================================================================

/// Settings owned by the modal shell around the drop area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogConfig {
    /// Dialog heading.
    pub title: String,
    /// Stretch the dialog to the available width (up to `max_width`).
    pub full_width: bool,
    /// CSS max-width of the dialog box.
    pub max_width: String,
    /// Label of the close button.
    pub cancel_button_text: String,
    /// Label of the confirm button.
    pub submit_button_text: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_DIALOG_TITLE.to_string(),
            full_width: true,
            max_width: DEFAULT_DIALOG_MAX_WIDTH.to_string(),
            cancel_button_text: DEFAULT_CANCEL_BUTTON_TEXT.to_string(),
            submit_button_text: DEFAULT_SUBMIT_BUTTON_TEXT.to_string(),
        }
    }
}
