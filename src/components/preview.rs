//! Preview rendering for accepted files.
//!
//! Renders either a grid of thumbnails/icons or compact chips, each with a
//! removal action reporting the entry's index.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::FileObject;

stylance::import_crate_style!(css, "src/components/preview.module.css");

/// Default preview visual: inline thumbnail for decoded images, a
/// paperclip icon for everything else.
fn default_preview_icon(file_object: &FileObject) -> AnyView {
    match (file_object.is_image(), file_object.data.clone()) {
        (true, Some(data)) => view! {
            <img class=css::image src=data alt=file_object.name() />
        }
        .into_any(),
        _ => view! {
            <span class=css::image aria-hidden="true">
                <Icon icon=ic::ATTACH_FILE />
            </span>
        }
        .into_any(),
    }
}

/// List of accepted-file previews with per-entry removal.
#[component]
pub fn PreviewList(
    /// Caller-owned accepted files.
    #[prop(into)]
    files: Signal<Vec<FileObject>, LocalStorage>,
    /// Invoked with the index of the entry whose removal was requested.
    #[prop(into)]
    on_remove: Callback<usize>,
    /// Show file names under grid previews.
    #[prop(optional)]
    show_file_names: bool,
    /// Render compact chips instead of grid items.
    #[prop(optional)]
    use_chips: bool,
    /// Override for the per-file preview visual.
    #[prop(optional_no_strip)]
    get_preview_icon: Option<Callback<FileObject, AnyView>>,
) -> impl IntoView {
    let items = move || {
        files
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, file_object)| {
                if use_chips {
                    view! {
                        <PreviewChip index=index name=file_object.name() on_remove=on_remove />
                    }
                    .into_any()
                } else {
                    let visual = match get_preview_icon {
                        Some(render) => render.run(file_object.clone()),
                        None => default_preview_icon(&file_object),
                    };
                    view! {
                        <PreviewItem
                            index=index
                            name=file_object.name()
                            visual=visual
                            show_file_name=show_file_names
                            on_remove=on_remove
                        />
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class=if use_chips { css::chipList } else { css::grid } role="list">
            {items}
        </div>
    }
}

#[component]
fn PreviewItem(
    index: usize,
    name: String,
    visual: AnyView,
    show_file_name: bool,
    on_remove: Callback<usize>,
) -> impl IntoView {
    let label = format!("Remove {name}");
    let handle_remove = move |ev: MouseEvent| {
        // Keep the click from bubbling into the drop area and reopening
        // the file picker.
        ev.stop_propagation();
        on_remove.run(index);
    };

    view! {
        <div class=css::item role="listitem">
            {visual}
            {show_file_name.then_some(view! { <p class=css::fileName>{name}</p> })}
            <button class=css::removeButton aria-label=label on:click=handle_remove>
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}

#[component]
fn PreviewChip(index: usize, name: String, on_remove: Callback<usize>) -> impl IntoView {
    let label = format!("Remove {name}");
    let handle_remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        on_remove.run(index);
    };

    view! {
        <span class=css::chip role="listitem">
            <span class=css::chipLabel>{name}</span>
            <button class=css::chipDelete aria-label=label on:click=handle_remove>
                <Icon icon=ic::CLOSE />
            </button>
        </span>
    }
}
