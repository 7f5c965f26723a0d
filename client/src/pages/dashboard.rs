//! Dashboard landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tabguard::{InitPhase, SessionSnapshot, SessionStore};

use crate::util::auth::{install_redirect, should_redirect_unauth};

/// Greets the signed-in user and offers logout.
/// Redirects to `/login` once the bootstrap settles without an identity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    install_redirect(session, should_redirect_unauth, "/login", use_navigate());

    let loading = move || session.with(|s| s.phase != InitPhase::Initialized);
    let identity = move || {
        session.with(|s| s.identity.as_ref().map(ToString::to_string)).unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                store.set_identity(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        store.set_identity(None);
    };

    view! {
        <div class="dashboard-page">
            <Show
                when=move || !loading()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading session..."</p> }
            >
                <header class="dashboard-page__header">
                    <h1>"Your matches"</h1>
                    <span class="dashboard-page__identity">{identity}</span>
                    <button class="btn" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </header>
            </Show>
        </div>
    }
}
