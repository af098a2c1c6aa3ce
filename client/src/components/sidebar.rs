//! Collapsible sidebar navigation.
//!
//! ARCHITECTURE
//! ============
//! Desktop widths toggle between expanded and icon-only; on small screens the
//! same element becomes a drawer opened from the header, with an overlay that
//! closes it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;
use crate::util::auth::SessionHandle;
use crate::util::navigation::Section;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let location = use_location();

    let collapsed = move || ui.get().sidebar_collapsed;
    let hint = move |label: &'static str| if collapsed() { label } else { "" };

    let entries = Section::ALL
        .into_iter()
        .map(|section| {
            let navigate = navigate.clone();
            let pathname = location.pathname;
            let is_active = move || Section::from_path(&pathname.get()) == Some(section);
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=is_active
                    title=move || hint(section.label())
                    on:click=move |_| {
                        navigate(section.path(), NavigateOptions::default());
                        ui.update(UiState::after_navigate);
                    }
                >
                    <span class="sidebar__icon" aria-hidden="true">{section.icon()}</span>
                    <span class="sidebar__label">{section.label()}</span>
                </button>
            }
        })
        .collect_view();

    let on_logout = move |_| {
        let route = session.logout();
        ui.update(UiState::after_navigate);
        navigate(route, NavigateOptions::default());
    };

    view! {
        <aside
            class="sidebar"
            class:sidebar--open=move || ui.get().sidebar_open
            class:sidebar--collapsed=collapsed
        >
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"▣"</span>
                <span class="sidebar__title">"Kancra WMS"</span>
                <button
                    class="sidebar__close"
                    aria-label="Close menu"
                    on:click=move |_| ui.update(UiState::close_drawer)
                >
                    "✕"
                </button>
                <button
                    class="sidebar__collapse"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_collapsed)
                >
                    {move || if collapsed() { "›" } else { "‹" }}
                </button>
            </div>
            <nav class="sidebar__nav">{entries}</nav>
            <div class="sidebar__footer">
                <button class="sidebar__item sidebar__logout" title=move || hint("Logout") on:click=on_logout>
                    <span class="sidebar__icon" aria-hidden="true">"⎋"</span>
                    <span class="sidebar__label">"Logout"</span>
                </button>
            </div>
        </aside>
        <Show when=move || ui.get().sidebar_open>
            <div class="sidebar-overlay" on:click=move |_| ui.update(UiState::close_drawer)></div>
        </Show>
    }
}
