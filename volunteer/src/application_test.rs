use super::*;

// =============================================================
// Catalogs
// =============================================================

#[test]
fn catalog_sizes_match_form_options() {
    assert_eq!(AgeGroup::ALL.len(), 5);
    assert_eq!(Experience::ALL.len(), 5);
    assert_eq!(Availability::ALL.len(), 4);
    assert_eq!(Skill::ALL.len(), 9);
}

#[test]
fn catalog_values_follow_declaration_order() {
    for (i, age) in AgeGroup::ALL.iter().enumerate() {
        assert_eq!(age.value(), AgeGroup::VALUES[i]);
    }
    for (i, exp) in Experience::ALL.iter().enumerate() {
        assert_eq!(exp.value(), Experience::VALUES[i]);
    }
    for (i, avail) in Availability::ALL.iter().enumerate() {
        assert_eq!(avail.value(), Availability::VALUES[i]);
    }
    for (i, skill) in Skill::ALL.iter().enumerate() {
        assert_eq!(skill.label(), Skill::LABELS[i]);
    }
}

#[test]
fn catalog_serde_uses_wire_values() {
    assert_eq!(serde_json::to_value(AgeGroup::Over55).unwrap(), serde_json::json!("55+"));
    assert_eq!(serde_json::to_value(Experience::OneToThreeYears).unwrap(), serde_json::json!("1-3"));
    assert_eq!(serde_json::to_value(Availability::Evenings).unwrap(), serde_json::json!("evenings"));
    assert_eq!(serde_json::to_value(Skill::ArtAndCrafts).unwrap(), serde_json::json!("Art & Crafts"));
    assert_eq!(serde_json::to_value(Skill::ComputerSkills).unwrap(), serde_json::json!("Computer Skills"));
}

#[test]
fn catalog_parse_accepts_values_and_rejects_labels() {
    assert_eq!(Experience::parse("none"), Some(Experience::None));
    assert_eq!(Experience::parse("No experience"), None);
    assert_eq!(AgeGroup::parse("46-55"), Some(AgeGroup::From46To55));
    assert_eq!(AgeGroup::parse(""), None);
    assert_eq!(Availability::parse("Flexible"), None);
    assert_eq!(Skill::parse("Mentoring"), Some(Skill::Mentoring));
    assert_eq!(Skill::parse("mentoring"), None);
}

#[test]
fn experience_and_availability_labels_are_human_readable() {
    assert_eq!(Experience::Informal.label(), "Informal teaching");
    assert_eq!(Experience::OverFiveYears.label(), "5+ years");
    assert_eq!(Availability::Weekends.label(), "Weekends only");
    assert_eq!(AgeGroup::From18To25.label(), "18-25");
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_keys_round_trip() {
    for field in Field::ALL {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("first_name"), None);
}

// =============================================================
// update_field
// =============================================================

#[test]
fn update_field_sets_text_fields() {
    let mut app = VolunteerApplication::default();
    app.update_field(Field::FirstName, FieldValue::Text("Asha".into()));
    app.update_field(Field::Email, FieldValue::Text("asha@example.org".into()));
    app.update_field(Field::Age, FieldValue::Text("26-35".into()));
    app.update_field(Field::Motivation, FieldValue::Text("hello".into()));
    assert_eq!(app.first_name, "Asha");
    assert_eq!(app.email, "asha@example.org");
    assert_eq!(app.age, "26-35");
    assert_eq!(app.motivation, "hello");
}

#[test]
fn update_field_sets_terms_flag() {
    let mut app = VolunteerApplication::default();
    app.update_field(Field::TermsAccepted, FieldValue::Flag(true));
    assert!(app.terms_accepted);
    app.update_field(Field::TermsAccepted, FieldValue::Flag(false));
    assert!(!app.terms_accepted);
}

#[test]
fn update_field_ignores_mismatched_kinds() {
    let mut app = VolunteerApplication::default();
    app.update_field(Field::FirstName, FieldValue::Flag(true));
    app.update_field(Field::TermsAccepted, FieldValue::Text("true".into()));
    app.update_field(Field::Skills, FieldValue::Text("Music".into()));
    assert_eq!(app, VolunteerApplication::default());
}

// =============================================================
// toggle_skill
// =============================================================

#[test]
fn toggle_skill_is_its_own_inverse() {
    let mut app = VolunteerApplication::default();
    app.toggle_skill(Skill::Teaching);
    assert_eq!(app.skills, vec!["Teaching".to_owned()]);
    assert!(app.has_skill(Skill::Teaching));
    app.toggle_skill(Skill::Teaching);
    assert!(app.skills.is_empty());
}

#[test]
fn toggle_skill_removes_only_the_target() {
    let mut app = VolunteerApplication::default();
    app.toggle_skill(Skill::Music);
    app.toggle_skill(Skill::Science);
    app.toggle_skill(Skill::English);
    app.toggle_skill(Skill::Science);
    assert_eq!(app.skills, vec!["Music".to_owned(), "English".to_owned()]);
    assert!(!app.has_skill(Skill::Science));
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn draft_serializes_with_camel_case_keys() {
    let mut app = VolunteerApplication::default();
    app.first_name = "Jo".into();
    app.terms_accepted = true;
    let json = serde_json::to_value(&app).unwrap();
    assert_eq!(json["firstName"], "Jo");
    assert_eq!(json["termsAccepted"], true);
    assert!(json.get("first_name").is_none());
}

#[test]
fn draft_deserializes_missing_keys_as_empty() {
    let app: VolunteerApplication = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(app.email, "a@b.com");
    assert!(app.first_name.is_empty());
    assert!(app.skills.is_empty());
    assert!(!app.terms_accepted);
}

#[test]
fn valid_application_decodes_as_draft() {
    let valid = ValidApplication {
        first_name: "Jo".into(),
        last_name: "Li".into(),
        email: "a@b.com".into(),
        phone: "9876543210".into(),
        age: AgeGroup::From18To25,
        experience: Experience::None,
        availability: Availability::Flexible,
        skills: vec![Skill::Teaching, Skill::ComputerSkills],
        motivation: "m".repeat(50),
        terms_accepted: true,
    };
    let json = serde_json::to_string(&valid).unwrap();
    let draft: VolunteerApplication = serde_json::from_str(&json).unwrap();
    assert_eq!(draft.age, "18-25");
    assert_eq!(draft.experience, "none");
    assert_eq!(draft.skills, vec!["Teaching".to_owned(), "Computer Skills".to_owned()]);
    assert!(draft.terms_accepted);
    assert_eq!(valid.full_name(), "Jo Li");
}
