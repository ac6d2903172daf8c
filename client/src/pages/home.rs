//! Landing page at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"VizAI"</h1>
            <p class="home__subtitle">"Visual analysis workspace"</p>
            <nav class="home__actions">
                <A href="/register-analyse">"Sign in"</A>
            </nav>
        </div>
    }
}
