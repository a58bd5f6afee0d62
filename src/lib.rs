//! Drag-and-drop file upload components for Leptos.
//!
//! [`DropzoneArea`] renders a drop target with validation feedback, file
//! previews, and snackbar notifications; [`DropzoneDialog`] wraps it in a
//! modal dialog with cancel/submit actions.
//!
//! The accepted-file list is owned by the caller: the widget reads it as a
//! reactive input and reports every add/remove through callbacks, so the
//! embedding application stays the single source of truth.
//!
//! ```ignore
//! use leptos::prelude::*;
//! use leptos_dropzone::{DropzoneArea, DropzoneConfig, FileObject};
//!
//! #[component]
//! fn Uploader() -> impl IntoView {
//!     let files = RwSignal::new_local(Vec::<FileObject>::new());
//!
//!     view! {
//!         <DropzoneArea
//!             files=files
//!             config=DropzoneConfig {
//!                 accepted_files: vec!["image/*".into()],
//!                 files_limit: 3,
//!                 ..DropzoneConfig::default()
//!             }
//!             on_add=Callback::new(move |new_files: Vec<FileObject>| {
//!                 files.update(|f| f.extend(new_files));
//!             })
//!             on_delete=Callback::new(move |(_, index): (FileObject, usize)| {
//!                 files.update(|f| { f.remove(index); });
//!             })
//!         />
//!     }
//! }
//! ```

pub mod components;
pub mod config;
pub mod models;
pub mod utils;

pub use components::{DropzoneArea, DropzoneDialog, PreviewList, Snackbar};
pub use models::{
    DialogConfig, DropzoneConfig, FileDetails, FileObject, Reset, Severity, ShowAlerts,
};
pub use utils::{
    convert_bytes_to_mbs_or_kbs, is_image, matches_accept, read_file, read_files, FileReadError,
};
