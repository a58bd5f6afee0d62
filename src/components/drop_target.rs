//! Drop-target hook wrapping raw DOM drag-and-drop plumbing.
//!
//! `DropzoneArea` never touches drag events directly; it consumes the
//! drag-state booleans and partitioned accept/reject batches this hook
//! exposes, so validation and event wiring stay in one place.

use leptos::ev::{DragEvent, Event};
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::models::FileDetails;
use crate::utils::matches_accept;

/// Validation inputs and sinks for [`use_drop_target`].
pub struct DropTargetOptions {
    /// Accepted MIME types / extensions; empty accepts everything.
    pub accepted_files: Vec<String>,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Whether more than one file may be delivered at once.
    pub multiple: bool,
    /// Receives the files that passed validation.
    pub on_accepted: Callback<Vec<File>>,
    /// Receives the files that failed validation.
    pub on_rejected: Callback<Vec<File>>,
}

/// Everything the drop area needs to render and wire a drop target.
#[derive(Clone, Copy)]
pub struct DropTarget {
    /// A drag is hovering over the target.
    pub is_drag_active: Signal<bool>,
    /// The hovering drag carries at least one file that cannot be accepted.
    pub is_drag_reject: Signal<bool>,
    /// Node ref for the hidden `<input type="file">`.
    pub input_ref: NodeRef<Input>,
    pub on_drag_enter: Callback<DragEvent>,
    pub on_drag_over: Callback<DragEvent>,
    pub on_drag_leave: Callback<DragEvent>,
    pub on_drop: Callback<DragEvent>,
    /// Change handler for the hidden file input.
    pub on_input_change: Callback<Event>,
    /// Opens the browser file picker.
    pub open_file_dialog: Callback<()>,
}

/// Hook providing drag-state signals and validated file delivery.
///
/// Dropped or browsed files are partitioned against the accept list and
/// the size limit; the rejected batch is delivered before the accepted
/// one so a mixed drop ends on the success notification.
pub fn use_drop_target(options: DropTargetOptions) -> DropTarget {
    let DropTargetOptions {
        accepted_files,
        max_file_size,
        multiple,
        on_accepted,
        on_rejected,
    } = options;

    // Enter/leave fire for every nested child, so the active state is a
    // depth counter rather than a boolean.
    let depth = RwSignal::new(0i32);
    let reject = RwSignal::new(false);
    let input_ref = NodeRef::<Input>::new();

    let deliver = {
        let accepted_files = accepted_files.clone();
        move |files: Vec<File>| {
            if files.is_empty() {
                return;
            }
            let (accepted, rejected) =
                partition_files(files, &accepted_files, max_file_size, multiple);
            if !rejected.is_empty() {
                on_rejected.run(rejected);
            }
            if !accepted.is_empty() {
                on_accepted.run(accepted);
            }
        }
    };

    let on_drag_enter = {
        let accepted_files = accepted_files.clone();
        Callback::new(move |ev: DragEvent| {
            ev.prevent_default();
            depth.update(|d| *d += 1);
            if drag_items_rejected(&ev, &accepted_files) {
                reject.set(true);
            }
        })
    };

    let on_drag_over = Callback::new(move |ev: DragEvent| {
        // Without this the browser never delivers the drop event.
        ev.prevent_default();
    });

    let on_drag_leave = Callback::new(move |ev: DragEvent| {
        ev.prevent_default();
        depth.update(|d| *d = (*d - 1).max(0));
        if depth.get_untracked() == 0 {
            reject.set(false);
        }
    });

    let on_drop = {
        let deliver = deliver.clone();
        Callback::new(move |ev: DragEvent| {
            ev.prevent_default();
            depth.set(0);
            reject.set(false);
            deliver(files_from_drag(&ev));
        })
    };

    let on_input_change = Callback::new(move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let files = files_from_input(&input);
        // Clear the value so picking the same file again re-fires change.
        input.set_value("");
        deliver(files);
    });

    let open_file_dialog = Callback::new(move |_: ()| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    });

    DropTarget {
        is_drag_active: Signal::derive(move || depth.get() > 0),
        is_drag_reject: reject.into(),
        input_ref,
        on_drag_enter,
        on_drag_over,
        on_drag_leave,
        on_drop,
        on_input_change,
        open_file_dialog,
    }
}

/// Acceptance decision for a single delivered file: it must match the
/// accept list and fit under the size limit.
pub fn file_accepted(details: &FileDetails, accepted: &[String], max_file_size: u64) -> bool {
    matches_accept(&details.mime, &details.name, accepted) && details.size <= max_file_size
}

/// Split a delivered batch into accepted and rejected entries, preserving
/// batch order within each group.
///
/// In single-file mode a multi-file drop is rejected wholesale, matching
/// the limit-exceeded path downstream; a batch is never partially
/// accepted on that account.
pub fn partition_details(
    details: Vec<FileDetails>,
    accepted: &[String],
    max_file_size: u64,
    multiple: bool,
) -> (Vec<FileDetails>, Vec<FileDetails>) {
    if !multiple && details.len() > 1 {
        return (Vec::new(), details);
    }
    details
        .into_iter()
        .partition(|entry| file_accepted(entry, accepted, max_file_size))
}

fn partition_files(
    files: Vec<File>,
    accepted: &[String],
    max_file_size: u64,
    multiple: bool,
) -> (Vec<File>, Vec<File>) {
    if !multiple && files.len() > 1 {
        return (Vec::new(), files);
    }
    files
        .into_iter()
        .partition(|file| file_accepted(&FileDetails::from(file), accepted, max_file_size))
}

fn files_from_drag(ev: &DragEvent) -> Vec<File> {
    let Some(transfer) = ev.data_transfer() else {
        return Vec::new();
    };
    let Some(list) = transfer.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn files_from_input(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Whether the hovering drag carries a file that can never be accepted.
///
/// Mid-drag the browser exposes MIME types but no names or sizes, and some
/// browsers hide the type entirely. Unknown types are not flagged, and an
/// accept list containing extension entries disables the check, so invalid
/// feedback never fires on a file that would actually be accepted.
fn drag_items_rejected(ev: &DragEvent, accepted: &[String]) -> bool {
    if accepted.is_empty() || accepted.iter().any(|entry| entry.trim().starts_with('.')) {
        return false;
    }
    let Some(transfer) = ev.data_transfer() else {
        return false;
    };
    let items = transfer.items();
    (0..items.length()).filter_map(|i| items.get(i)).any(|item| {
        item.kind() == "file" && !item.type_().is_empty() && !matches_accept(&item.type_(), "", accepted)
    })
}
