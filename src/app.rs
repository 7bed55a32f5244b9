//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bridge::AskBridge;
use crate::pages::home::HomePage;
use crate::state::session::{SessionConfig, SessionState};
use crate::state::ui::UiState;

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
/// Provides the session, UI, and ask-bridge contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Set RESUME_AUTO_LIVE at build time to switch to live answers
    // automatically when the startup probe succeeds; the default keeps
    // built-in responses until the visitor opts in.
    let config = SessionConfig {
        auto_promote_on_probe: option_env!("RESUME_AUTO_LIVE").is_some(),
    };
    let session = RwSignal::new(SessionState::new(config));
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(AskBridge::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/resume-site.css"/>
        <Title text="Jason | Interactive Resume"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
