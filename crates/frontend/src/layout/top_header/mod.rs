//! Application top bar: sidebar toggle, title, signed-in user and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Nascondi menu" } else { "Mostra menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"DataDash"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| s.session.as_ref().map(|s| s.user.email.clone()))
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| sign_out(auth_state) title="Esci">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
