//! Signup page: name + email registration, then on to the login code flow.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use tabguard::SessionSnapshot;

use crate::components::auth_page_marker::AuthPageMarker;
use crate::util::auth::{install_redirect, should_leave_auth_page};

const MAX_NAME_LEN: usize = 40;

pub(crate) fn validate_signup_input(name: &str, email: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter a display name and an email.");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Display name is too long.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email.");
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();
    install_redirect(session, should_leave_auth_page, "/", navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value) = match validate_signup_input(&name.get(), &email.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&name_value, &email_value).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, name_value, email_value);
    };

    view! {
        <AuthPageMarker page="signup"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Join Matchmaker"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
