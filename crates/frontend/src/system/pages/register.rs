use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api::HttpAuthBackend;
use crate::system::auth::context::{publish, use_auth};
use crate::system::auth::flow::{self, AuthPhase};

#[component]
pub fn RegisterPage(
    /// Back to the login form
    on_login: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let phase = RwSignal::new(AuthPhase::Idle);

    let auth_state = use_auth();
    let is_submitting = move || phase.get().is_submitting();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = false;
        phase.update(|p| started = p.begin());
        if !started {
            return;
        }
        set_error_message.set(None);

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let confirm_val = confirm.get_untracked();

        spawn_local(async move {
            match flow::register(&HttpAuthBackend, &email_val, &password_val, &confirm_val).await {
                Ok(session) => {
                    phase.update(|p| p.finish(true));
                    publish(auth_state, session);
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::warn!("registration failed: {:?}", e);
                    }
                    set_error_message.set(Some(e.to_string()));
                    phase.update(|p| p.finish(false));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"DataDash"</h1>
                <h2>"Registrazione"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="reg-email">"Email"</label>
                        <input
                            type="email"
                            id="reg-email"
                            autocomplete="username"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=is_submitting
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-password">"Password"</label>
                        <input
                            type="password"
                            id="reg-password"
                            autocomplete="new-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=is_submitting
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-confirm">"Conferma password"</label>
                        <input
                            type="password"
                            id="reg-confirm"
                            autocomplete="new-password"
                            value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            disabled=is_submitting
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=is_submitting>
                        {move || if is_submitting() { "Registrando..." } else { "Registrati" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Hai già un account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_login.run(());
                        }>"Accedi"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
