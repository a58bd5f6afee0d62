//! UI components built with Leptos.
//!
//! - [`DropzoneArea`] - Drag-and-drop upload widget (main entry point)
//! - [`DropzoneDialog`] - The same widget inside a modal dialog
//! - [`PreviewList`] - Accepted-file previews (grid or chips)
//! - [`Snackbar`] - Transient notification surface
//! - [`drop_target`] - Drag event plumbing behind the widget
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dialog;
pub mod drop_target;
pub mod dropzone;
pub mod icons;
pub mod preview;
pub mod snackbar;

pub use dialog::DropzoneDialog;
pub use drop_target::{
    file_accepted, partition_details, use_drop_target, DropTarget, DropTargetOptions,
};
pub use dropzone::DropzoneArea;
pub use preview::PreviewList;
pub use snackbar::{Snackbar, SnackbarState};
