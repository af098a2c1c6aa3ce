//! Route guard wrapping every page that needs a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `AuthState` mirror from [`SessionHandle`], so it re-evaluates on
//! every session change, including a logout fired from inside the guarded
//! tree.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{GuardDecision, SessionHandle, guard_decision, install_unauth_redirect};

/// Renders `children` only for an authenticated session; otherwise shows a
/// neutral placeholder while loading and redirects to `/login` once loaded.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth;
    install_unauth_redirect(auth, use_navigate());

    let status_text = move || match guard_decision(&auth.get()) {
        GuardDecision::Pending => "Memuat...",
        GuardDecision::RedirectToLogin | GuardDecision::Render => "Mengalihkan ke halaman login...",
    };

    view! {
        <Show
            when=move || guard_decision(&auth.get()) == GuardDecision::Render
            fallback=move || view! {
                <div class="route-guard">
                    <p class="route-guard__status">{status_text}</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
