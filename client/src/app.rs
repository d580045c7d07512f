//! Root application component with routing, layout chrome, and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};
use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{about::AboutPage, home::HomePage, not_found::NotFoundPage, volunteer::VolunteerPage};
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
/// Provides the shared UI context and wraps every route in the navbar/footer
/// layout. The volunteer form is owned by `VolunteerPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/pathshala.css"/>
        <Title text="Basti Ki Pathshala"/>
        <Meta name="description" content="Education for every child. Volunteer with Basti Ki Pathshala in New Delhi."/>

        <Router>
            <ScrollToTop/>
            <div class="site">
                <Navbar/>
                <main class="site__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("volunteer") view=VolunteerPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Scrolls the window back to the top whenever the route changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        let _ = location.pathname.get();
        crate::util::nav::scroll_to_top();
    });
}
