//! Application shell: auth gate plus the main layout.

use crate::dashboards::d400_foodcost_overview::ui::FoodCostDashboard;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_rider::ui::list::RiderList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::navbar::Navbar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::usecases::u501_csv_exchange::CsvExchangePage;
use leptos::prelude::*;
use thaw::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=move || match ctx.active.get() {
                Page::Dashboard => view! { <FoodCostDashboard /> }.into_any(),
                Page::CsvExchange => view! { <CsvExchangePage /> }.into_any(),
                Page::Inventory => view! { <InventoryList /> }.into_any(),
                Page::Riders => view! { <RiderList /> }.into_any(),
            }
        />
    }
}

/// Login or registration, whichever the user switched to last.
#[component]
fn AuthPages() -> impl IntoView {
    let (show_register, set_show_register) = signal(false);

    move || {
        if show_register.get() {
            view! { <RegisterPage on_login=Callback::new(move |_| set_show_register.set(false)) /> }
                .into_any()
        } else {
            view! { <LoginPage on_register=Callback::new(move |_| set_show_register.set(true)) /> }
                .into_any()
        }
    }
}

/// Auth gate: the main layout only exists while a session does.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! {
                <div class="login-container">
                    <Spinner />
                    <span class="text-muted">"Verifico sessione..."</span>
                </div>
            }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <AuthPages /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
