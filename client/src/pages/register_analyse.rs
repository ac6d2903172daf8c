//! Register-analyse sign-in page: brand header, auth card, help dialog, assistant.
//!
//! ARCHITECTURE
//! ============
//! One `RwSignal<RegisterAnalyseState>` holds form values, errors, phase, and
//! help visibility. DOM-facing work is limited to three places: focusing the
//! first invalid input through a `FocusRegistry`, the Escape listener scope
//! that follows help visibility, and the mock acknowledgement alert.

#[cfg(test)]
#[path = "register_analyse_test.rs"]
mod register_analyse_test;

use leptos::prelude::*;

use crate::components::assistant_widget::{AssistantWidget, DEFAULT_GREETING};
use crate::components::help_modal::HelpModal;
use crate::config::ClientConfig;
use crate::state::login_form::{Field, MockSubmission, RegisterAnalyseState, SubmitOutcome};
use crate::util::focus::FocusRegistry;
use crate::util::key_listener::{KeyListenerScope, WindowKeyHost};
use crate::util::notify;

pub const LOGO_SRC: &str = "/assets/vizai-logo-20251203.png";
pub const MOCK_CONFIRMATION: &str = "Login submitted (mock). No backend calls implemented.";

#[component]
pub fn RegisterAnalysePage() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::debug!("register-analyse api base: {:?}", config.api_base);

    let state = RwSignal::new(RegisterAnalyseState::new(config.api_base));

    let email_ref = NodeRef::<leptos::html::Input>::new();
    let password_ref = NodeRef::<leptos::html::Input>::new();
    let inputs = FocusRegistry::new()
        .with(Field::Email, email_ref)
        .with(Field::Password, password_ref);

    // Autofocus email once the input is mounted.
    Effect::new(move || {
        if email_ref.get().is_some() {
            inputs.focus(Field::Email);
        }
    });

    let help_visible = Memo::new(move |_| state.with(|s| s.help_visible));
    let escape = StoredValue::new(KeyListenerScope::new(WindowKeyHost, "Escape"));
    Effect::new(move || {
        let visible = help_visible.get();
        escape.update_value(|scope| {
            scope.sync(visible, move || state.update(RegisterAnalyseState::close_help));
        });
    });
    // Dropping the scope also releases; this detaches before the owner is disposed.
    on_cleanup(move || {
        let _ = escape.try_update_value(KeyListenerScope::release);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match state.try_update(RegisterAnalyseState::submit) {
            Some(SubmitOutcome::Rejected { focus }) => {
                inputs.focus(focus);
            }
            Some(SubmitOutcome::Accepted(submission)) => acknowledge(&submission),
            None => {}
        }
    };

    let toggle_help = move |_| state.update(RegisterAnalyseState::toggle_help);
    let close_help = Callback::new(move |()| state.update(RegisterAnalyseState::close_help));

    view! {
        <div class="page">
            <header class="page__header" aria-label="Brand">
                <img src=LOGO_SRC alt="VizAI Logo" class="page__logo"/>
                <div class="page__brand">"VizAI"</div>
            </header>

            <main class="auth">
                <section class="auth__card" role="form" aria-labelledby="auth-title">
                    <h1 id="auth-title" class="auth__title">"Sign in to VizAI"</h1>
                    <p class="auth__subtitle">
                        "Your role determines the dashboard view and available features."
                    </p>

                    <form class="auth__form" on:submit=on_submit novalidate>
                        <FormField
                            state=state
                            field=Field::Email
                            label="Email/Username"
                            input_type="text"
                            placeholder="Enter your email or username"
                            node_ref=email_ref
                        />
                        <FormField
                            state=state
                            field=Field::Password
                            label="Password"
                            input_type="password"
                            placeholder="Enter your password"
                            node_ref=password_ref
                        />
                        <button type="submit" class="btn btn--primary">"Login"</button>
                    </form>

                    <div class="auth__secondary">
                        "New to VizAI? "
                        <a class="auth__link" href="/register">"Create an account"</a>
                    </div>

                    <div class="auth__help">
                        <button type="button" class="auth__help-link" on:click=toggle_help>
                            "Need Help?"
                        </button>
                    </div>
                </section>
            </main>

            <AssistantWidget greeting=DEFAULT_GREETING/>

            <HelpOverlay visible=help_visible on_close=close_help/>
        </div>
    }
}

/// Help dialog, mounted only while `visible` holds.
#[component]
fn HelpOverlay(#[prop(into)] visible: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <HelpModal on_close=on_close/>
        </Show>
    }
}

/// Labelled input with inline, announced error text.
#[component]
fn FormField(
    state: RwSignal<RegisterAnalyseState>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    node_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    let error = move || state.with(|s| s.errors.get(field));

    view! {
        <div class="auth__field">
            <label for=field.name() class="auth__label">{label}</label>
            <input
                node_ref=node_ref
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                class=move || if error().is_some() { "auth__input auth__input--error" } else { "auth__input" }
                aria-invalid=move || if error().is_some() { "true" } else { "false" }
                aria-describedby=move || error().map(|_| field.error_id())
                prop:value=move || state.with(|s| s.form.value(field).to_owned())
                on:input=move |ev| state.update(|s| s.on_field_change(field, event_target_value(&ev)))
            />
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <div id=field.error_id() class="auth__error" role="alert">
                                {message}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn acknowledge(submission: &MockSubmission) {
    match serde_json::to_string(submission) {
        Ok(json) => log::info!("Submitting to API (mock): {json}"),
        Err(e) => log::warn!("mock submission not serializable: {e}"),
    }
    notify::alert(MOCK_CONFIRMATION);
}
