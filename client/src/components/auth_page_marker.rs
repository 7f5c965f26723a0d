//! Declares "an auth-flow page is visible" for as long as it is mounted.
//!
//! The router builds the incoming page before it disposes the outgoing one.
//! Taking the `tabguard::AuthPageMarker` guard in an effect defers it until
//! after that swap, so on login -> signup the old page's release lands first
//! and the new page's flag is the one left standing. The guard lives in a
//! `StoredValue` and is dropped in `on_cleanup`, so the flag is cleared
//! however the owning page leaves the tree.

use leptos::prelude::*;
use tabguard::SessionStore;

/// Place inside login/signup pages. Renders nothing.
#[component]
pub fn AuthPageMarker(page: &'static str) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let marker = StoredValue::new(None::<tabguard::AuthPageMarker>);

    Effect::new(move || {
        marker.update_value(|slot| {
            if slot.is_none() {
                *slot = Some(tabguard::AuthPageMarker::mount(&store, page));
            }
        });
    });
    on_cleanup(move || drop(marker.try_update_value(Option::take)));
}
