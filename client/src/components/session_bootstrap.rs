//! Once-per-tab session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component can see several mount signals for one instance (dev-mode
//! double invocation, parent re-renders). The `InitGuard` it owns turns all
//! of them into at most one `/api/auth/me` request per tab.

use std::sync::Arc;

use leptos::prelude::*;
use tabguard::{GuardConfig, InitGuard, SessionStore};

/// Run the session bootstrap when mounted. Renders nothing.
#[component]
pub fn SessionBootstrap() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let policy = use_context::<GuardConfig>().unwrap_or_default().failure_policy;
    let guard = Arc::new(InitGuard::new(store, policy));

    Effect::new(move || spawn_bootstrap(Arc::clone(&guard)));
}

#[cfg(feature = "hydrate")]
fn spawn_bootstrap(guard: Arc<InitGuard>) {
    leptos::task::spawn_local(async move {
        let outcome = guard.ensure_initialized(crate::net::api::fetch_session).await;
        log::debug!("session bootstrap: {outcome:?}");
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_bootstrap(guard: Arc<InitGuard>) {
    let _ = guard;
}
