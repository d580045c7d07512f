//! Volunteer sign-up page with the application form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mount of the page creates its own `RwSignal<VolunteerForm>` and
//! provides it to the form components, so leaving the page discards the
//! draft and coming back starts from an empty form. Submitting validates through `VolunteerForm::begin_submit`; only a valid
//! draft starts the network call, and the submit button stays disabled until
//! `complete_submit` applies the outcome, so at most one submission is in
//! flight per form.

#[cfg(test)]
#[path = "volunteer_test.rs"]
mod volunteer_test;

use leptos::prelude::*;
use volunteer::validate::MIN_MOTIVATION_CHARS;
use volunteer::{AgeGroup, Availability, Experience, Field, FieldValue, Skill, VolunteerForm};

use crate::components::card::{Accent, Card, CardContent};
use crate::components::form_field::{FieldError, SelectInput, TextInput, input_class, required_label};
use crate::components::toast::Toast;

pub const BENEFITS: [CardContent; 3] = [
    CardContent {
        icon: "❤",
        title: "Make Real Impact",
        body: "Directly contribute to children's education and see the tangible difference you make in their lives.",
        accent: Accent::Primary,
    },
    CardContent {
        icon: "👥",
        title: "Build Community",
        body: "Connect with like-minded individuals and build lasting relationships within our volunteer network.",
        accent: Accent::Pink,
    },
    CardContent {
        icon: "🕑",
        title: "Flexible Schedule",
        body: "Volunteer on your own terms with flexible timing options that fit your lifestyle and commitments.",
        accent: Accent::Accent,
    },
];

pub const VOLUNTEER_EMAIL: &str = "volunteer@bastikipathshala.org";

pub fn submit_button_label(busy: bool) -> &'static str {
    if busy { "Submitting..." } else { "Submit Application" }
}

/// Live character counter under the motivation textarea.
pub fn motivation_counter(text: &str) -> String {
    let count = text.chars().count();
    if count >= MIN_MOTIVATION_CHARS {
        format!("{count} characters")
    } else {
        format!("{count} / {MIN_MOTIVATION_CHARS} characters minimum")
    }
}

/// HTML id of a skill checkbox ("Art & Crafts" -> "skill-art-crafts").
pub fn skill_input_id(skill: Skill) -> String {
    let slug = skill
        .label()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("skill-{slug}")
}

fn age_options() -> Vec<(&'static str, &'static str)> {
    AgeGroup::ALL.iter().map(|a| (a.value(), a.label())).collect()
}

fn experience_options() -> Vec<(&'static str, &'static str)> {
    Experience::ALL.iter().map(|e| (e.value(), e.label())).collect()
}

fn availability_options() -> Vec<(&'static str, &'static str)> {
    Availability::ALL.iter().map(|a| (a.value(), a.label())).collect()
}

/// Create an empty form for this page mount and provide it to descendants.
pub fn provide_volunteer_form() -> RwSignal<VolunteerForm> {
    let form = RwSignal::new(VolunteerForm::new());
    provide_context(form);
    form
}

#[component]
pub fn VolunteerPage() -> impl IntoView {
    let form = provide_volunteer_form();
    let submitted = move || form.with(VolunteerForm::is_submitted);

    view! {
        <Toast/>
        <Show when=move || !submitted() fallback=ThankYou>
            <div class="page page--volunteer">
                <section class="section section--hero">
                    <div class="section__inner section__inner--narrow">
                        <h1 class="page__title">"Become a Volunteer"</h1>
                        <p class="section__lead section__lead--light">
                            "Join our community of passionate educators and change-makers. "
                            "Help us create brighter futures for children in need."
                        </p>
                    </div>
                </section>

                <section class="section">
                    <div class="section__inner">
                        <header class="section__header">
                            <h2 class="section__title">"Why Volunteer With Us?"</h2>
                            <p class="section__lead">"Make a meaningful impact while developing your skills"</p>
                        </header>
                        <div class="grid grid--3">
                            {BENEFITS.iter().map(|content| view! { <Card content=*content/> }).collect_view()}
                        </div>

                        <ApplicationForm/>
                    </div>
                </section>

                <section class="section section--muted">
                    <div class="section__inner section__inner--narrow">
                        <h2 class="section__title">"Have Questions?"</h2>
                        <p class="section__lead">
                            "Reach out to us for more information about volunteering opportunities"
                        </p>
                        <ul class="contact-row">
                            <li>"📍 New Delhi, India"</li>
                            <li>"📧 "{VOLUNTEER_EMAIL}</li>
                            <li>"📞 +91 98765 43210"</li>
                        </ul>
                    </div>
                </section>
            </div>
        </Show>
    }
}

/// The application form card.
#[component]
fn ApplicationForm() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let busy = move || form.with(VolunteerForm::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit().ok());
        let Some(application) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_application(&application).await;
            if let Err(e) = &outcome {
                log::warn!("volunteer application submit failed: {e}");
            }
            form.update(|f| f.complete_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = application;
    };

    view! {
        <div class="card card--form">
            <header class="card__header">
                <h2 class="card__title card__title--lg">"Volunteer Application Form"</h2>
                <p class="card__subtitle">"Fill out the form below to start your journey with us"</p>
            </header>

            <form class="form" on:submit=on_submit novalidate=true>
                <div class="form__row form__row--2">
                    <TextInput field=Field::FirstName placeholder="Enter your first name"/>
                    <TextInput field=Field::LastName placeholder="Enter your last name"/>
                </div>

                <div class="form__row form__row--2">
                    <TextInput field=Field::Email placeholder="your.email@example.com" input_type="email"/>
                    <TextInput field=Field::Phone placeholder="+91 98765 43210" input_type="tel"/>
                </div>

                <div class="form__row form__row--3">
                    <SelectInput field=Field::Age placeholder="Select age group" options=age_options()/>
                    <SelectInput field=Field::Experience placeholder="Select experience" options=experience_options()/>
                    <SelectInput
                        field=Field::Availability
                        placeholder="Select availability"
                        options=availability_options()
                    />
                </div>

                <SkillPicker/>
                <MotivationInput/>
                <TermsCheckbox/>

                <button class="btn btn--hero btn--lg btn--block" type="submit" disabled=busy>
                    {move || submit_button_label(busy())}
                </button>
            </form>
        </div>
    }
}

/// Checkbox grid over the nine-skill catalog.
#[component]
fn SkillPicker() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();

    view! {
        <fieldset class="form__group form__skills">
            <legend class="form__label">{required_label(Field::Skills)}</legend>
            <div class="form__skill-grid">
                {Skill::ALL
                    .iter()
                    .map(|&skill| {
                        let id = skill_input_id(skill);
                        let for_id = id.clone();
                        view! {
                            <label class="form__check" for=for_id>
                                <input
                                    id=id
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.application.has_skill(skill))
                                    on:change=move |_| form.update(|f| f.toggle_skill(skill))
                                />
                                <span>{skill.label()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError field=Field::Skills/>
        </fieldset>
    }
}

#[component]
fn MotivationInput() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let field = Field::Motivation;
    let invalid = move || form.with(|f| f.errors.contains(field));

    view! {
        <div class="form__group">
            <label for=field.key() class="form__label">{required_label(field)}</label>
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                class=move || input_class(invalid())
                placeholder="Tell us about your motivation to volunteer and how you'd like to contribute..."
                prop:value=move || form.with(|f| f.application.motivation.clone())
                on:input=move |ev| form.update(|f| f.update_field(field, FieldValue::Text(event_target_value(&ev))))
            ></textarea>
            <p class="form__hint">{move || form.with(|f| motivation_counter(&f.application.motivation))}</p>
            <FieldError field/>
        </div>
    }
}

#[component]
fn TermsCheckbox() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let field = Field::TermsAccepted;

    view! {
        <div class="form__group">
            <label class="form__check" for="terms">
                <input
                    id="terms"
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.application.terms_accepted)
                    on:change=move |ev| form.update(|f| f.update_field(field, FieldValue::Flag(event_target_checked(&ev))))
                />
                <span>"I agree to the terms and conditions and commit to the volunteer responsibilities *"</span>
            </label>
            <FieldError field/>
        </div>
    }
}

/// Terminal card shown after a successful submission.
#[component]
fn ThankYou() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();

    view! {
        <div class="page page--thank-you">
            <div class="card card--thank-you">
                <div class="card__check" aria-hidden="true">"✔"</div>
                <h1 class="card__title card__title--xl">"Thank You!"</h1>
                <p class="card__subtitle">"Your volunteer application has been submitted successfully."</p>
                <p class="card__body">
                    "We're excited about your interest in joining Basti Ki Pathshala. "
                    "Our team will review your application and contact you within 3-5 business days."
                </p>
                <p class="card__body">
                    "In the meantime, follow us on social media to stay updated with our activities."
                </p>
                <button class="btn btn--outline" type="button" on:click=move |_| form.update(VolunteerForm::reset)>
                    "Submit Another Application"
                </button>
            </div>
        </div>
    }
}
