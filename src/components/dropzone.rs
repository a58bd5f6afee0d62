//! Drop area widget: drop target, validation feedback, previews, and
//! snackbar notifications.
//!
//! The widget owns nothing but its notification state. The accepted-file
//! list belongs to the caller, which receives every add/remove through
//! callbacks and re-renders with the updated list (one-way data flow).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::components::drop_target::{use_drop_target, DropTargetOptions};
use crate::components::preview::PreviewList;
use crate::components::snackbar::{Snackbar, SnackbarState};
use crate::models::{DropzoneConfig, FileDetails, FileObject, Reset, Severity};
use crate::utils::read_files;

stylance::import_crate_style!(css, "src/components/dropzone.module.css");

/// Whether accepting `incoming` more files would push the held count past
/// the limit.
///
/// A limit of 1 puts the widget in single-file mode: the count gate is
/// skipped here and multi-file drops are rejected wholesale by the
/// partitioning layer instead.
fn limit_exceeded(files_limit: usize, held: usize, incoming: usize) -> bool {
    files_limit > 1 && held + incoming > files_limit
}

/// Drag-and-drop upload widget with previews and snackbar notifications.
#[component]
pub fn DropzoneArea(
    /// Caller-owned list of accepted files. The widget never mutates it;
    /// every change is reported through `on_add` / `on_delete`.
    #[prop(into)]
    files: Signal<Vec<FileObject>, LocalStorage>,
    /// Presentation and validation settings.
    #[prop(optional)]
    config: DropzoneConfig,
    /// Invoked once per accepted batch with the fully decoded files, in
    /// drop order.
    #[prop(optional_no_strip, into)]
    on_add: Option<Callback<Vec<FileObject>>>,
    /// Invoked with the removed file and its index.
    #[prop(optional_no_strip, into)]
    on_delete: Option<Callback<(FileObject, usize)>>,
    /// Invoked with the raw accepted batch before decoding starts.
    #[prop(optional_no_strip, into)]
    on_drop: Option<Callback<Vec<File>>>,
    /// Invoked with the raw rejected batch.
    #[prop(optional_no_strip, into)]
    on_drop_rejected: Option<Callback<Vec<File>>>,
    /// Relay invoked for every notification, shown or not.
    #[prop(optional_no_strip, into)]
    on_alert: Option<Callback<(String, Severity)>>,
) -> impl IntoView {
    let accept_attr = config.accept_attr();
    let is_multiple = config.is_multiple();
    let DropzoneConfig {
        accepted_files,
        files_limit,
        max_file_size,
        dropzone_text,
        preview_text,
        icon,
        show_previews,
        show_previews_in_dropzone,
        show_file_names,
        show_file_names_in_preview,
        use_chips_for_preview,
        disable_rejection_feedback,
        show_alerts,
        alert_auto_hide_ms,
        reset,
        get_file_limit_exceed_message,
        get_file_added_message,
        get_file_removed_message,
        get_drop_reject_message,
        get_preview_icon,
    } = config;

    let snackbar = SnackbarState::new();

    // Shows the snackbar and relays the notification to the caller.
    let notify = move |message: String, severity: Severity| {
        if let Some(alert) = on_alert {
            alert.run((message.clone(), severity));
        }
        snackbar.show(message, severity, alert_auto_hide_ms);
    };

    // Generation token for in-flight decode batches. A new batch or an
    // unmount bumps it, abandoning any older batch before it reports.
    let batch_generation = Arc::new(AtomicU64::new(0));
    {
        let batch_generation = Arc::clone(&batch_generation);
        on_cleanup(move || {
            batch_generation.fetch_add(1, Ordering::Relaxed);
        });
    }

    let handle_accepted = {
        let batch_generation = Arc::clone(&batch_generation);
        move |new_files: Vec<File>| {
            let current = files.with_untracked(|f| f.len());
            if limit_exceeded(files_limit, current, new_files.len()) {
                notify(
                    get_file_limit_exceed_message.run(files_limit),
                    Severity::Error,
                );
                return;
            }

            if let Some(dropped) = on_drop {
                dropped.run(new_files.clone());
            }

            let generation = batch_generation.fetch_add(1, Ordering::Relaxed) + 1;
            let batch_generation = Arc::clone(&batch_generation);
            spawn_local(async move {
                let result = read_files(&new_files).await;
                if batch_generation.load(Ordering::Relaxed) != generation {
                    return;
                }
                match result {
                    Ok(payloads) => {
                        let file_objects: Vec<FileObject> = new_files
                            .into_iter()
                            .zip(payloads)
                            .map(|(file, data)| FileObject::new(file, Some(data)))
                            .collect();
                        if let Some(add) = on_add {
                            add.run(file_objects.clone());
                        }
                        let message: String = file_objects
                            .iter()
                            .map(|file_object| get_file_added_message.run(file_object.name()))
                            .collect();
                        notify(message, Severity::Success);
                    }
                    Err(err) => {
                        // The batch stays atomic: nothing reaches `on_add`.
                        web_sys::console::error_1(&err.to_string().into());
                        notify(err.to_string(), Severity::Error);
                    }
                }
            });
        }
    };

    let handle_rejected = {
        let accepted_entries = accepted_files.clone();
        move |rejected: Vec<File>| {
            let current = files.with_untracked(|f| f.len());
            let message = if current + rejected.len() > files_limit {
                // Limit breaches take precedence over per-file reasons.
                get_file_limit_exceed_message.run(files_limit)
            } else {
                // Sequential overwrite: only the last file's message shows.
                rejected.iter().fold(String::new(), |_, file| {
                    get_drop_reject_message.run((
                        FileDetails::from(file),
                        accepted_entries.clone(),
                        max_file_size,
                    ))
                })
            };
            if let Some(rejected_cb) = on_drop_rejected {
                rejected_cb.run(rejected);
            }
            notify(message, Severity::Error);
        }
    };

    let handle_remove = Callback::new(move |index: usize| {
        let Some(removed) = files.with_untracked(|f| f.get(index).cloned()) else {
            return;
        };
        if let Some(delete) = on_delete {
            delete.run((removed.clone(), index));
        }
        notify(get_file_removed_message.run(removed.name()), Severity::Info);
    });

    let drop_target = use_drop_target(DropTargetOptions {
        accepted_files: accepted_files.clone(),
        max_file_size,
        multiple: is_multiple,
        on_accepted: Callback::new(handle_accepted),
        on_rejected: Callback::new(handle_rejected),
    });

    let root_class = move || {
        let mut class = css::root.to_string();
        if drop_target.is_drag_active.get() {
            class.push(' ');
            class.push_str(css::active);
        }
        if !disable_rejection_feedback && drop_target.is_drag_reject.get() {
            class.push(' ');
            class.push_str(css::invalid);
        }
        class
    };

    let has_files = move || !files.with(|f| f.is_empty());

    let reset_view = match reset {
        Reset::None => None,
        Reset::Element(element) => Some(element.run()),
        Reset::Button { on_click, text } => Some(
            view! {
                <button class=css::resetButton on:click=move |_| on_click.run(())>
                    {text}
                </button>
            }
            .into_any(),
        ),
    };

    let snackbar_open = Signal::derive(move || {
        snackbar.open.get() && show_alerts.allows(snackbar.severity.get())
    });

    view! {
        <div
            class=root_class
            role="presentation"
            on:click=move |_| drop_target.open_file_dialog.run(())
            on:dragenter=move |ev| drop_target.on_drag_enter.run(ev)
            on:dragover=move |ev| drop_target.on_drag_over.run(ev)
            on:dragleave=move |ev| drop_target.on_drag_leave.run(ev)
            on:drop=move |ev| drop_target.on_drop.run(ev)
        >
            <input
                node_ref=drop_target.input_ref
                type="file"
                class=css::input
                accept=accept_attr
                multiple=is_multiple
                on:change=move |ev| drop_target.on_input_change.run(ev)
                on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
            />

            <div class=css::textContainer>
                <p class=css::text>{dropzone_text}</p>
                <span class=css::icon aria-hidden="true">
                    <Icon icon=icon />
                </span>
            </div>

            <Show when=move || show_previews_in_dropzone && has_files()>
                <PreviewList
                    files=files
                    on_remove=handle_remove
                    show_file_names=show_file_names
                    use_chips=use_chips_for_preview
                    get_preview_icon=get_preview_icon
                />
            </Show>
        </div>

        {reset_view}

        <Show when=move || show_previews && has_files()>
            <span class=css::previewHeading>{preview_text.clone()}</span>
            <PreviewList
                files=files
                on_remove=handle_remove
                show_file_names=show_file_names_in_preview
                use_chips=use_chips_for_preview
                get_preview_icon=get_preview_icon
            />
        </Show>

        <Snackbar
            open=snackbar_open
            message=snackbar.message
            severity=snackbar.severity
            on_close=Callback::new(move |_: ()| snackbar.dismiss())
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_allows_filling_up_to_the_limit() {
        assert!(!limit_exceeded(3, 0, 3));
        assert!(!limit_exceeded(3, 2, 1));
    }

    #[test]
    fn test_limit_blocks_a_batch_that_overflows() {
        // Two already held, two more dropped, limit three.
        assert!(limit_exceeded(3, 2, 2));
        assert!(limit_exceeded(3, 0, 4));
    }

    #[test]
    fn test_single_file_mode_skips_the_count_gate() {
        assert!(!limit_exceeded(1, 1, 1));
        assert!(!limit_exceeded(1, 0, 5));
    }
}
