use super::*;

#[test]
fn mission_cards_have_distinct_titles() {
    let titles = MISSION_CARDS.iter().map(|c| c.title).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Quality Education", "Community Building", "Social Impact"]);
}

#[test]
fn testimonials_attribute_a_parent_and_a_volunteer() {
    let roles = TESTIMONIALS.iter().map(|t| t.role).collect::<Vec<_>>();
    assert_eq!(roles, vec!["Parent", "Volunteer"]);
    assert!(TESTIMONIALS.iter().all(|t| !t.quote.is_empty()));
}

#[test]
fn impact_highlights_are_non_empty() {
    assert!(IMPACT_HIGHLIGHTS.iter().all(|h| !h.trim().is_empty()));
}
