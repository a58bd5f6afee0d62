//! Modal dialog variant of the drop area.
//!
//! A thin composition layer: the dialog owns no file handling. Close and
//! save are delegated entirely to the caller; the only derived state is
//! the submit button's disabled flag.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::dropzone::DropzoneArea;
use crate::models::{DialogConfig, DropzoneConfig, FileObject, Severity};

stylance::import_crate_style!(css, "src/components/dialog.module.css");

/// Drop area embedded in a modal dialog with cancel/submit actions.
///
/// Submit is disabled while the caller-owned file list is empty. Clicking
/// the backdrop or the cancel button invokes `on_close`.
#[component]
pub fn DropzoneDialog(
    /// Whether the dialog is shown.
    #[prop(into)]
    open: Signal<bool>,
    /// Caller-owned list of accepted files, passed through to the drop area.
    #[prop(into)]
    files: Signal<Vec<FileObject>, LocalStorage>,
    /// Dialog chrome settings.
    #[prop(optional)]
    dialog: DialogConfig,
    /// Drop area settings; defaults to the dialog flavor (previews below
    /// the drop area, with file names).
    #[prop(default = DropzoneConfig::for_dialog())]
    dropzone: DropzoneConfig,
    /// Invoked on cancel or backdrop click.
    #[prop(into)]
    on_close: Callback<()>,
    /// Invoked on submit.
    #[prop(into)]
    on_save: Callback<()>,
    /// Passed through to the drop area.
    #[prop(optional_no_strip, into)]
    on_add: Option<Callback<Vec<FileObject>>>,
    /// Passed through to the drop area.
    #[prop(optional_no_strip, into)]
    on_delete: Option<Callback<(FileObject, usize)>>,
    /// Passed through to the drop area.
    #[prop(optional_no_strip, into)]
    on_alert: Option<Callback<(String, Severity)>>,
) -> impl IntoView {
    let dialog_class = if dialog.full_width {
        format!("{} {}", css::dialog, css::fullWidth)
    } else {
        css::dialog.to_string()
    };
    let dialog_style = format!("max-width: {};", dialog.max_width);
    let submit_disabled = move || files.with(|f| f.is_empty());

    view! {
        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| on_close.run(())>
                <div
                    class=dialog_class.clone()
                    style=dialog_style.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <h2 class=css::title>{dialog.title.clone()}</h2>

                    <div class=css::content>
                        <DropzoneArea
                            files=files
                            config=dropzone.clone()
                            on_add=on_add
                            on_delete=on_delete
                            on_alert=on_alert
                        />
                    </div>

                    <div class=css::actions>
                        <button class=css::button on:click=move |_| on_close.run(())>
                            {dialog.cancel_button_text.clone()}
                        </button>
                        <button
                            class=css::button
                            disabled=submit_disabled
                            on:click=move |_| on_save.run(())
                        >
                            {dialog.submit_button_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
