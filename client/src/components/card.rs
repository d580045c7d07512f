//! Content cards used by the static pages.
//!
//! Pages describe their cards as `&'static` tables and render them uniformly
//! through these components.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

/// Accent color applied to a card's icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Pink,
    Accent,
    Destructive,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "accent--primary",
            Self::Pink => "accent--pink",
            Self::Accent => "accent--accent",
            Self::Destructive => "accent--destructive",
        }
    }
}

/// Icon + title + body feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub accent: Accent,
}

/// Large headline figure with a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Quote attributed to a community member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Leadership team member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub accent: Accent,
}

impl TeamMember {
    /// Uppercase initials of each word of the name ("Priya Sharma" -> "PS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[component]
pub fn Card(content: CardContent) -> impl IntoView {
    view! {
        <div class="card card--feature">
            <div class=format!("card__icon {}", content.accent.class()) aria-hidden="true">
                {content.icon}
            </div>
            <h3 class="card__title">{content.title}</h3>
            <p class="card__body">{content.body}</p>
        </div>
    }
}

#[component]
pub fn StatTile(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <div class=format!("stat__value {}", stat.accent.class())>{stat.value}</div>
            <div class="stat__label">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="card card--quote">
            <span class="card__quote-mark" aria-hidden="true">"❝"</span>
            <blockquote class="card__body">{format!("\"{}\"", testimonial.quote)}</blockquote>
            <figcaption class="card__author">{format!("- {}, {}", testimonial.author, testimonial.role)}</figcaption>
        </figure>
    }
}

#[component]
pub fn TeamCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="card card--team">
            <div class=format!("card__avatar {}", member.accent.class())>{member.initials()}</div>
            <h3 class="card__title">{member.name}</h3>
            <p class="card__subtitle">{member.role}</p>
            <p class="card__body">{member.bio}</p>
        </div>
    }
}
