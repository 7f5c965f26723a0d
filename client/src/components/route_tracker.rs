//! Keeps the store's current route in step with the router.
//!
//! The mount-time path is written before the effect is installed, and the
//! effect writes it again on its first run. Both go through the same
//! idempotent write, so the duplicate costs nothing and a path that changed
//! between mount and subscription is never missed.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use tabguard::SessionStore;

/// Must be mounted inside `<Router>`. Renders nothing.
#[component]
pub fn RouteTracker() -> impl IntoView {
    let tracker = tabguard::RouteTracker::new(expect_context::<SessionStore>());
    let pathname = use_location().pathname;

    tracker.observe(&pathname.get_untracked());
    Effect::new(move || tracker.observe(&pathname.get()));
}
