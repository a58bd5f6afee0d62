//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons. Swap an alias here to
//! change the icon used everywhere in the components.

pub use icondata::{
    BsCheckCircle as SUCCESS, BsCloudUpload as CLOUD_UPLOAD, BsExclamationCircle as ERROR,
    BsInfoCircle as INFO, BsPaperclip as ATTACH_FILE, BsXLg as CLOSE,
};
