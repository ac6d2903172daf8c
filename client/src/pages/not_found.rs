//! Fallback for paths with no registered route.

use leptos::prelude::*;
use leptos_router::components::A;

/// "Not Found" notice with a link home. Server renders answer with 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <p>"Not Found"</p>
            <A href="/">"Go Home"</A>
        </div>
    }
}
