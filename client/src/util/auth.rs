//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and only once the
//! bootstrap has settled. Redirecting while the phase is still
//! `Initializing` would bounce a signed-in user through `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use tabguard::{InitPhase, SessionSnapshot};

/// Signed out after bootstrap settled: protected pages send the user to login.
pub fn should_redirect_unauth(snapshot: &SessionSnapshot) -> bool {
    snapshot.phase == InitPhase::Initialized && snapshot.identity.is_none()
}

/// Signed in after bootstrap settled: auth pages send the user onward.
pub fn should_leave_auth_page(snapshot: &SessionSnapshot) -> bool {
    snapshot.phase == InitPhase::Initialized && snapshot.identity.is_some()
}

/// Navigate to `target` whenever `when` holds for the current snapshot.
pub fn install_redirect<F>(session: RwSignal<SessionSnapshot>, when: fn(&SessionSnapshot) -> bool, target: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(when) {
            navigate(target, NavigateOptions::default());
        }
    });
}
