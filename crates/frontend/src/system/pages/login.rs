use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api::HttpAuthBackend;
use crate::system::auth::context::{publish, use_auth};
use crate::system::auth::flow::{self, AuthPhase};

#[component]
pub fn LoginPage(
    /// Switch to the registration form
    on_register: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
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

        spawn_local(async move {
            match flow::sign_in(&HttpAuthBackend, &email_val, &password_val).await {
                Ok(session) => {
                    phase.update(|p| p.finish(true));
                    publish(auth_state, session);
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::warn!("login failed: {:?}", e);
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
                <h2>"Accedi"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=is_submitting
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=is_submitting
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=is_submitting>
                        {move || if is_submitting() { "Verifico..." } else { "Accedi" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Non hai un account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_register.run(());
                        }>"Registrati"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
