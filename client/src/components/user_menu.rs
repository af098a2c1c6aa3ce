//! Header user badge with a dropdown for settings and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::UiState;
use crate::util::auth::SessionHandle;
use crate::util::navigation::Section;

#[component]
pub fn UserMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<SessionHandle>();
    let auth = session.auth;
    let navigate = use_navigate();

    let name = move || auth.get().display_name();
    let initial = move || auth.get().user.map_or_else(|| "U".to_owned(), |user| user.initial());
    let role = move || auth.get().user.map_or_else(|| "Administrator".to_owned(), |user| user.role);
    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();

    let navigate_settings = navigate.clone();
    let on_settings = move |_| {
        ui.update(UiState::after_navigate);
        navigate_settings(Section::Settings.path(), NavigateOptions::default());
    };
    let on_logout = move |_| {
        ui.update(UiState::after_navigate);
        let route = session.logout();
        navigate(route, NavigateOptions::default());
    };

    view! {
        <div class="user-menu">
            <button class="user-menu__trigger" on:click=move |_| ui.update(UiState::toggle_user_menu)>
                <span class="user-menu__avatar">{initial}</span>
                <span class="user-menu__identity">
                    <span class="user-menu__name">{name}</span>
                    <span class="user-menu__role">{role}</span>
                </span>
                <span class="user-menu__chevron" aria-hidden="true">"▾"</span>
            </button>
            <div
                class="user-menu__backdrop"
                class:user-menu--hidden=move || !ui.get().user_menu_open
                on:click=move |_| ui.update(UiState::toggle_user_menu)
            ></div>
            <div class="user-menu__dropdown" class:user-menu--hidden=move || !ui.get().user_menu_open>
                <div class="user-menu__summary">
                    <p class="user-menu__name">{name}</p>
                    <p class="user-menu__email">{email}</p>
                </div>
                <button class="user-menu__action" on:click=on_settings>"Settings"</button>
                <div class="user-menu__divider"></div>
                <button class="user-menu__action user-menu__action--danger" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
