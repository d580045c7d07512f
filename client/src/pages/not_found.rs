//! Fallback page for unknown routes.

use leptos::prelude::*;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="not-found">
                <span class="not-found__code">"404"</span>
                <h1 class="not-found__title">"Page Not Found"</h1>
                <p class="not-found__text">"The page you're looking for doesn't exist or has been moved."</p>
                <a href="/" class="btn btn--hero">"Go Home"</a>
            </div>
        </div>
    }
}
