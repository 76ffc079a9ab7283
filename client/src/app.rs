//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{casualty::CasualtyPage, start::StartPage};
use crate::state::geofence::GeofenceState;

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
/// Provides the app-wide geofence state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Geofences outlive page navigation.
    provide_context(RwSignal::new(GeofenceState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/mapsync-dashboard.css"/>
        <Title text="Mission Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StartPage/>
                <Route path=StaticSegment("casualty") view=CasualtyPage/>
            </Routes>
        </Router>
    }
}
