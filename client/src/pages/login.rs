//! Login page: username/password form backed by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Validation errors surface inline before the store is
//! touched; a successful login navigates to the dashboard. An already
//! signed-in visitor can still open this page. The demo hint only shows
//! while the local demo verifier is active.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AuthMode;
use crate::util::auth::SessionHandle;
use crate::util::login_form::validate_login;

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Processing..." } else { "Sign In to Dashboard" }
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let demo_mode = session.auth_mode() == AuthMode::LocalDemo;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);

        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        if let Err(e) = validate_login(&username_value, &password_value) {
            error.set(Some(e.to_string()));
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(username_value, password_value).await {
                Ok(route) => navigate(route, NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__logo" aria-hidden="true">"▣"</div>
                <h1>"Kancra WMS"</h1>
                <p class="login-card__subtitle">"Warehouse Management System"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">
                        "Username" <span class="login-label__required">"*"</span>
                    </label>
                    <input
                        id="username"
                        class="login-input"
                        class:login-input--error=move || error.get().is_some()
                        type="text"
                        placeholder="Enter your username"
                        autocomplete="username"
                        autofocus=true
                        disabled=move || submitting.get()
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">
                        "Password" <span class="login-label__required">"*"</span>
                    </label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            class:login-input--error=move || error.get().is_some()
                            type=move || password_input_type(show_password.get())
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            disabled=move || submitting.get()
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-password__toggle"
                            type="button"
                            tabindex="-1"
                            aria-label="Toggle password visibility"
                            on:click=move |_| show_password.update(|visible| *visible = !*visible)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                    <Show when=move || demo_mode>
                        <div class="login-demo">
                            <p>"Demo Mode - Enter any username and password"</p>
                            <span class="login-demo__hint">"username: admin"</span>
                            <span class="login-demo__hint">"password: admin"</span>
                        </div>
                    </Show>
                </form>
                <footer class="login-card__footer">
                    <p>"© 2026 Kancra Labs. All rights reserved."</p>
                    <p>"Warehouse Management System v1.0"</p>
                </footer>
            </div>
        </div>
    }
}
