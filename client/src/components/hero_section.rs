//! Full-height hero banner for the home page.

use leptos::prelude::*;

use crate::util::nav::VOLUNTEER_HREF;

/// Headline figures shown under the hero call-to-action.
pub const HERO_STATS: [(&str, &str, &str); 3] = [
    ("👥", "500+", "Children Educated"),
    ("📚", "50+", "Learning Centers"),
    ("❤", "200+", "Active Volunteers"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="hero__content">
                <h1 class="hero__title">
                    "Education for"
                    <span class="hero__highlight">"Every Child"</span>
                </h1>
                <p class="hero__lead">
                    "Transforming lives through education in underserved communities. "
                    "Join us in creating a brighter future, one child at a time."
                </p>
                <div class="hero__actions">
                    <a href=VOLUNTEER_HREF class="btn btn--hero btn--lg">"Become a Volunteer →"</a>
                    <a href="/about" class="btn btn--outline-light btn--lg">"Learn More"</a>
                </div>
                <div class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .map(|(icon, value, label)| {
                            view! {
                                <div class="hero__stat">
                                    <div class="hero__stat-icon" aria-hidden="true">{*icon}</div>
                                    <div class="hero__stat-value">{*value}</div>
                                    <div class="hero__stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
