//! Fixed assistant panel in the bottom-right corner.

use leptos::prelude::*;

pub const DEFAULT_GREETING: &str = "Hi! I’m your VizAI helper. How can I assist you today?";

/// Greeting plus a "Send" control that has no behavior yet.
#[component]
pub fn AssistantWidget(#[prop(into)] greeting: String) -> impl IntoView {
    view! {
        <aside class="assistant" role="complementary" aria-label="Assistant">
            <div class="assistant__content">
                <p class="assistant__text">
                    <strong>"Assistant:"</strong>
                    " "
                    {greeting}
                </p>
                <div class="assistant__actions">
                    <button class="btn btn--primary btn--sm" type="button">
                        "Send"
                    </button>
                </div>
            </div>
        </aside>
    }
}
