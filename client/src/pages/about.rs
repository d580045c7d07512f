//! About page: story, values, impact numbers, leadership team, call to action.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::card::{Accent, Card, CardContent, Stat, StatTile, TeamCard, TeamMember};
use crate::util::nav::VOLUNTEER_HREF;

pub const STORY: [&str; 3] = [
    "Basti Ki Pathshala began as a small initiative in the narrow lanes of Delhi, where we noticed countless children \
     missing out on basic education due to economic constraints and lack of accessible schools.",
    "What started with just 5 children under a tree has now grown into a movement that reaches over 500 children \
     across 50+ learning centers. Our grassroots approach ensures that education is not just accessible, but also \
     culturally relevant and community-driven.",
    "Today, we work hand-in-hand with families, local leaders, and dedicated volunteers to create sustainable \
     educational ecosystems that transform entire communities.",
];

pub const VALUES: [CardContent; 4] = [
    CardContent {
        icon: "❤",
        title: "Compassion",
        body: "We approach every child and family with empathy, understanding their unique circumstances and needs.",
        accent: Accent::Primary,
    },
    CardContent {
        icon: "🎯",
        title: "Excellence",
        body: "We strive for the highest quality in education, continuously improving our methods and resources.",
        accent: Accent::Pink,
    },
    CardContent {
        icon: "👥",
        title: "Community",
        body: "We believe in the power of community-driven solutions and collaborative growth.",
        accent: Accent::Accent,
    },
    CardContent {
        icon: "🏅",
        title: "Integrity",
        body: "Transparency and honesty guide all our actions and relationships with the community.",
        accent: Accent::Destructive,
    },
];

pub const IMPACT_NUMBERS: [Stat; 4] = [
    Stat { value: "500+", label: "Children Educated", accent: Accent::Primary },
    Stat { value: "50+", label: "Learning Centers", accent: Accent::Pink },
    Stat { value: "200+", label: "Active Volunteers", accent: Accent::Accent },
    Stat { value: "95%", label: "Retention Rate", accent: Accent::Destructive },
];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Priya Sharma",
        role: "Founder & Director",
        bio: "Former teacher with 15 years of experience in education and community development.",
        accent: Accent::Primary,
    },
    TeamMember {
        name: "Amit Kumar",
        role: "Program Manager",
        bio: "Social worker passionate about creating sustainable community-based educational programs.",
        accent: Accent::Pink,
    },
    TeamMember {
        name: "Sunita Gupta",
        role: "Community Coordinator",
        bio: "Local community leader who builds bridges between families and educational opportunities.",
        accent: Accent::Accent,
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="section section--hero">
                <div class="section__inner section__inner--narrow">
                    <h1 class="page__title">"About Basti Ki Pathshala"</h1>
                    <p class="section__lead section__lead--light">
                        "Empowering communities through education since 2018. "
                        "We believe every child deserves access to quality learning opportunities."
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="section__inner split">
                    <div>
                        <h2 class="section__title">"Our Story"</h2>
                        {STORY.iter().map(|p| view! { <p class="section__text">{*p}</p> }).collect_view()}
                    </div>
                    <img
                        class="split__image"
                        src="/images/volunteers-teaching.jpg"
                        alt="Volunteers teaching children"
                    />
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__inner">
                    <header class="section__header">
                        <h2 class="section__title">"Our Values"</h2>
                        <p class="section__lead">
                            "The principles that guide our work and define our commitment to the community"
                        </p>
                    </header>
                    <div class="grid grid--4">
                        {VALUES.iter().map(|content| view! { <Card content=*content/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section__inner">
                    <header class="section__header">
                        <h2 class="section__title">"Our Impact in Numbers"</h2>
                        <p class="section__lead">"Measurable change in our communities"</p>
                    </header>
                    <div class="grid grid--4">
                        {IMPACT_NUMBERS.iter().map(|stat| view! { <StatTile stat=*stat/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__inner">
                    <header class="section__header">
                        <h2 class="section__title">"Our Leadership Team"</h2>
                        <p class="section__lead">"Dedicated individuals driving our mission forward"</p>
                    </header>
                    <div class="grid grid--3">
                        {TEAM.iter().map(|member| view! { <TeamCard member=*member/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--hero">
                <div class="section__inner section__inner--narrow">
                    <h2 class="section__title section__title--light">"Join Our Mission"</h2>
                    <p class="section__lead section__lead--light">
                        "Be part of the change you want to see. Help us create more success stories "
                        "and transform more lives through education."
                    </p>
                    <a href=VOLUNTEER_HREF class="btn btn--light btn--lg">"Become a Volunteer →"</a>
                </div>
            </section>
        </div>
    }
}
