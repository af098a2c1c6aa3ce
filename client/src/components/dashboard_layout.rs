//! Authenticated shell: sidebar, header and the routed page outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::user_menu::UserMenu;
use crate::state::ui::UiState;
use crate::util::auth::SessionHandle;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<SessionHandle>().auth;

    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <div class="dashboard-layout__content" class:dashboard-layout__content--wide=move || ui.get().sidebar_collapsed>
                <header class="dashboard-header">
                    <button
                        class="dashboard-header__menu"
                        aria-label="Open menu"
                        on:click=move |_| ui.update(UiState::open_drawer)
                    >
                        "☰"
                    </button>
                    <div class="dashboard-header__title">
                        <h1>"Dashboard"</h1>
                        <p>{move || format!("Welcome back, {}", auth.get().display_name())}</p>
                    </div>
                    <UserMenu/>
                </header>
                <main class="dashboard-layout__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
