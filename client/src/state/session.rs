//! Reactive session state for the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `tabguard::SessionStore` is the single source of truth and is written
//! synchronously by the sensors. Components that need to re-render on a
//! change read the mirrored `RwSignal<SessionSnapshot>` instead.

use leptos::prelude::*;
use tabguard::{SessionSnapshot, SessionStore};

/// Provide the store, its read-only view, and a reactive snapshot signal.
pub fn provide_session(store: SessionStore) -> RwSignal<SessionSnapshot> {
    let snapshot = RwSignal::new(store.snapshot());

    #[cfg(feature = "hydrate")]
    {
        let mut updates = store.subscribe();
        leptos::task::spawn_local(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                // Signal disposed with its owner: stop mirroring.
                if snapshot.try_set(next).is_some() {
                    break;
                }
            }
        });
    }

    provide_context(store.reader());
    provide_context(store);
    provide_context(snapshot);
    snapshot
}
