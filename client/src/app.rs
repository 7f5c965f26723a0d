//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use tabguard::{GuardConfig, SessionStore};

use crate::components::route_tracker::RouteTracker;
use crate::components::session_bootstrap::SessionBootstrap;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Creates the tab's session store, provides it as context, and mounts the
/// bootstrap and route sensors alongside the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(GuardConfig::default());
    provide_session(SessionStore::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/matchmaker.css"/>
        <Title text="Matchmaker"/>

        <SessionBootstrap/>
        <Router>
            <RouteTracker/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
