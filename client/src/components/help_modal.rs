//! Sign-in help dialog.
//!
//! Mounted only while help is visible. Escape handling lives with the page,
//! which owns the window listener for exactly as long as this is mounted.

#[cfg(test)]
#[path = "help_modal_test.rs"]
mod help_modal_test;

use leptos::prelude::*;

pub const HELP_TITLE: &str = "VizAI Help • login";

/// Static entries. Rendered as buttons with no handlers until help content exists.
pub const HELP_OPTIONS: &[&str] = &["How do I sign in?", "I forgot my password", "Create an account"];

/// Overlay plus dialog panel. Clicking the overlay (not the panel) or the close
/// control invokes `on_close`.
#[component]
pub fn HelpModal(on_close: Callback<()>) -> impl IntoView {
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = modal_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let close = move |_| on_close.run(());

    view! {
        <div class="help-modal__overlay" on:click=close>
            <div
                class="help-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="help-title"
                tabindex="-1"
                node_ref=modal_ref
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="help-modal__header">
                    <h2 id="help-title" class="help-modal__title">{HELP_TITLE}</h2>
                    <button class="help-modal__close" type="button" aria-label="Close" on:click=close>
                        "×"
                    </button>
                </div>
                <div class="help-modal__body">
                    {HELP_OPTIONS
                        .iter()
                        .map(|label| {
                            view! {
                                <button class="help-modal__item" type="button">
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
