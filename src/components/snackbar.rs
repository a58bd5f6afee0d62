//! Transient snackbar notification surface.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::models::Severity;

stylance::import_crate_style!(css, "src/components/snackbar.module.css");

// ============================================================================
// SnackbarState
// ============================================================================

/// Notification state managed with Leptos signals.
///
/// Owned exclusively by the widget that creates it; mutated only through
/// [`show`](Self::show) and [`dismiss`](Self::dismiss). Dismissal clears
/// visibility only; message and severity stay in memory.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct SnackbarState {
    /// Whether the snackbar is on screen.
    pub open: RwSignal<bool>,
    /// Current notification text.
    pub message: RwSignal<String>,
    /// Current notification severity.
    pub severity: RwSignal<Severity>,
    /// Bumped per `show` so a stale auto-hide timer cannot close a newer
    /// message.
    epoch: RwSignal<u64>,
}

impl SnackbarState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            message: RwSignal::new(String::new()),
            severity: RwSignal::new(Severity::Success),
            epoch: RwSignal::new(0),
        }
    }

    /// Show a message, superseding any earlier one still on screen.
    ///
    /// A zero `auto_hide_ms` keeps the message up until dismissed.
    pub fn show(&self, message: String, severity: Severity, auto_hide_ms: u32) {
        let shown = self.epoch.get_untracked() + 1;
        self.epoch.set(shown);
        self.message.set(message);
        self.severity.set(severity);
        self.open.set(true);

        if auto_hide_ms == 0 {
            return;
        }
        let state = *self;
        spawn_local(async move {
            TimeoutFuture::new(auto_hide_ms).await;
            // A newer message owns the snackbar now; leave it alone.
            if state.epoch.try_get_untracked() == Some(shown) {
                let _ = state.open.try_set(false);
            }
        });
    }

    /// Hide the snackbar. Message and severity are kept as-is.
    pub fn dismiss(&self) {
        self.open.set(false);
    }
}

impl Default for SnackbarState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Snackbar component
// ============================================================================

fn severity_icon(severity: Severity) -> icondata::Icon {
    match severity {
        Severity::Success => ic::SUCCESS,
        Severity::Error => ic::ERROR,
        Severity::Info => ic::INFO,
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => css::success,
        Severity::Error => css::error,
        Severity::Info => css::info,
    }
}

/// Dismissible, styled transient message with a severity level.
#[component]
pub fn Snackbar(
    /// Whether the snackbar is visible.
    #[prop(into)]
    open: Signal<bool>,
    /// Notification text.
    #[prop(into)]
    message: Signal<String>,
    /// Notification severity, driving icon and color.
    #[prop(into)]
    severity: Signal<Severity>,
    /// Invoked when the close button is pressed.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class=css::snackbar role="status">
                <div class=move || format!("{} {}", css::content, severity_class(severity.get()))>
                    <span class=css::icon aria-hidden="true">
                        <Icon icon=Signal::derive(move || severity_icon(severity.get())) />
                    </span>
                    <span class=css::message>{move || message.get()}</span>
                    <button
                        class=css::closeButton
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_keeps_message_and_severity() {
        let state = SnackbarState::new();
        state.show("File a.png removed.".into(), Severity::Info, 0);
        assert!(state.open.get_untracked());

        state.dismiss();
        assert!(!state.open.get_untracked());
        assert_eq!(state.message.get_untracked(), "File a.png removed.");
        assert_eq!(state.severity.get_untracked(), Severity::Info);
    }

    #[test]
    fn test_show_replaces_previous_message() {
        let state = SnackbarState::new();
        state.show("first".into(), Severity::Success, 0);
        state.show("second".into(), Severity::Error, 0);
        assert!(state.open.get_untracked());
        assert_eq!(state.message.get_untracked(), "second");
        assert_eq!(state.severity.get_untracked(), Severity::Error);
    }
}
