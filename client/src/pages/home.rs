//! Home page: hero, mission, impact highlights, testimonials, call to action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::card::{Accent, Card, CardContent, Testimonial, TestimonialCard};
use crate::components::hero_section::HeroSection;
use crate::util::nav::VOLUNTEER_HREF;

pub const MISSION_CARDS: [CardContent; 3] = [
    CardContent {
        icon: "🎓",
        title: "Quality Education",
        body: "Providing comprehensive learning experiences that prepare children for a bright future with modern teaching methods and resources.",
        accent: Accent::Primary,
    },
    CardContent {
        icon: "👥",
        title: "Community Building",
        body: "Strengthening communities by involving families and local leaders in the educational journey of every child.",
        accent: Accent::Pink,
    },
    CardContent {
        icon: "🌍",
        title: "Social Impact",
        body: "Creating lasting change that extends beyond the classroom to transform entire communities and future generations.",
        accent: Accent::Accent,
    },
];

pub const IMPACT_HIGHLIGHTS: [&str; 3] = [
    "Trained over 100 volunteer teachers",
    "Established 50+ learning centers",
    "95% student retention rate",
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Basti Ki Pathshala gave my daughter the education I could never afford. Today, she dreams of becoming a doctor.",
        author: "Sunita Devi",
        role: "Parent",
    },
    Testimonial {
        quote: "Volunteering here has been the most rewarding experience. Seeing children learn and grow gives my life purpose.",
        author: "Rahul Sharma",
        role: "Volunteer",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <HeroSection/>

            <section class="section">
                <div class="section__inner">
                    <header class="section__header">
                        <h2 class="section__title">"Our Mission"</h2>
                        <p class="section__lead">
                            "Breaking barriers to education and creating opportunities for children in underserved communities"
                        </p>
                    </header>
                    <div class="grid grid--3">
                        {MISSION_CARDS.iter().map(|content| view! { <Card content=*content/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__inner split">
                    <div>
                        <h2 class="section__title">"Making a Real Difference"</h2>
                        <p class="section__text">
                            "Since our inception, we have been committed to providing quality education to children who need it most. "
                            "Our community-centered approach ensures sustainable impact and long-term success."
                        </p>
                        <ul class="highlights">
                            {IMPACT_HIGHLIGHTS
                                .iter()
                                .map(|item| view! { <li class="highlights__item">"★ "{*item}</li> })
                                .collect_view()}
                        </ul>
                        <a href="/about" class="btn btn--secondary btn--lg">"Read Our Story →"</a>
                    </div>
                    <img
                        class="split__image"
                        src="/images/community-hands.jpg"
                        alt="Community hands joining together"
                    />
                </div>
            </section>

            <section class="section">
                <div class="section__inner">
                    <header class="section__header">
                        <h2 class="section__title">"Voices from Our Community"</h2>
                        <p class="section__lead">"Stories that inspire us to continue our mission"</p>
                    </header>
                    <div class="grid grid--2">
                        {TESTIMONIALS
                            .iter()
                            .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--hero">
                <div class="section__inner section__inner--narrow">
                    <h2 class="section__title section__title--light">"Ready to Make a Difference?"</h2>
                    <p class="section__lead section__lead--light">
                        "Join our community of dedicated volunteers and help transform lives through education."
                    </p>
                    <div class="cta">
                        <a href=VOLUNTEER_HREF class="btn btn--light btn--lg">"Start Volunteering Today"</a>
                        <a href="/about" class="btn btn--outline-light btn--lg">"Learn About Our Work"</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
