//! Bound inputs for the volunteer application form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every input reads its value from and writes edits to the
//! `RwSignal<VolunteerForm>` context, addressed by `volunteer::Field`. Inline
//! error text comes from the form's `FieldErrors`.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;
use volunteer::{Field, FieldInput, FieldValue, VolunteerApplication, VolunteerForm};

/// Current text of `field`, or empty for non-text fields.
pub fn text_of(application: &VolunteerApplication, field: Field) -> String {
    match application.input(field) {
        FieldInput::Text(text) => text.to_owned(),
        FieldInput::List(_) | FieldInput::Flag(_) => String::new(),
    }
}

/// Label text with the required marker.
pub fn required_label(field: Field) -> String {
    format!("{} *", field.label())
}

pub fn input_class(invalid: bool) -> &'static str {
    if invalid { "form__input form__input--invalid" } else { "form__input" }
}

pub fn error_id(field: Field) -> String {
    format!("{}-error", field.key())
}

/// Inline validation message for one field, if any.
#[component]
pub fn FieldError(field: Field) -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let message = move || form.with(|f| f.error(field).map(str::to_owned));

    view! {
        {move || message().map(|m| view! { <p class="form__error" id=error_id(field)>{m}</p> })}
    }
}

/// Single-line text input bound to a text field.
#[component]
pub fn TextInput(
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let invalid = move || form.with(|f| f.errors.contains(field));

    view! {
        <div class="form__group">
            <label for=field.key() class="form__label">{required_label(field)}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                placeholder=placeholder
                class=move || input_class(invalid())
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || form.with(|f| text_of(&f.application, field))
                on:input=move |ev| form.update(|f| f.update_field(field, FieldValue::Text(event_target_value(&ev))))
            />
            <FieldError field/>
        </div>
    }
}

/// Drop-down bound to one of the catalog select fields.
///
/// `options` are `(value, label)` pairs; the empty placeholder option means
/// "not chosen".
#[component]
pub fn SelectInput(field: Field, placeholder: &'static str, options: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let invalid = move || form.with(|f| f.errors.contains(field));

    view! {
        <div class="form__group">
            <label for=field.key() class="form__label">{required_label(field)}</label>
            <select
                id=field.key()
                name=field.key()
                class=move || input_class(invalid())
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || form.with(|f| text_of(&f.application, field))
                on:change=move |ev| form.update(|f| f.update_field(field, FieldValue::Text(event_target_value(&ev))))
            >
                <option value="" disabled=true>{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <FieldError field/>
        </div>
    }
}
