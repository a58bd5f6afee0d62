//! Data models and types for the components.
//!
//! Contains domain types for:
//! - [`FileObject`], [`FileDetails`] - Accepted files and their projections
//! - [`Severity`], [`ShowAlerts`] - Notification severity and gating
//! - [`DropzoneConfig`], [`DialogConfig`], [`Reset`] - Configuration scopes

mod alert;
mod config;
mod file;

pub use alert::{Severity, ShowAlerts};
pub use config::{DialogConfig, DropzoneConfig, Reset};
pub use file::{FileDetails, FileObject};
