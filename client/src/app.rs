//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::verifier::Verifier;
use crate::pages::{home::HomePage, login::LoginPage, placeholder::PlaceholderPage};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::auth::SessionHandle;
use crate::util::navigation::{LANDING_ROUTE, Section};
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store once and provides it, together with layout
/// state, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let storage = LocalStorage;
    let session = SessionHandle::new(SessionStore::new(storage, Verifier::from_config(&config, storage)));
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, so the server render stays in the
    // loading state and never guesses at a session.
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/kancra-wms.css"/>
        <Title text="Kancra WMS"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LANDING_ROUTE/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=GuardedShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=|| view! { <PlaceholderPage section=Section::Products/> }/>
                    <Route path=StaticSegment("orders") view=|| view! { <PlaceholderPage section=Section::Orders/> }/>
                    <Route path=StaticSegment("shipping") view=|| view! { <PlaceholderPage section=Section::Shipping/> }/>
                    <Route path=StaticSegment("customers") view=|| view! { <PlaceholderPage section=Section::Customers/> }/>
                    <Route path=StaticSegment("reports") view=|| view! { <PlaceholderPage section=Section::Reports/> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <PlaceholderPage section=Section::Settings/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Dashboard layout behind the route guard.
#[component]
fn GuardedShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardLayout/>
        </ProtectedRoute>
    }
}
