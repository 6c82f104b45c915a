use super::*;

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Chess Club".to_owned(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_owned(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
            max_participants: 12,
            participants: vec!["michael@mergington.edu".to_owned(), "daniel@mergington.edu".to_owned()],
        },
    );
    catalog.insert(
        "Art Studio".to_owned(),
        Activity {
            description: "Explore painting, drawing, and sculpture".to_owned(),
            schedule: "Thursdays, 3:30 PM - 5:00 PM".to_owned(),
            max_participants: 18,
            participants: Vec::new(),
        },
    );
    catalog
}

#[test]
fn activity_card_lists_participants_and_spots() {
    let catalog = sample_catalog();
    let card = render_activity("Chess Club", &catalog["Chess Club"]);
    assert!(card.starts_with("Chess Club\n"));
    assert!(card.contains("Schedule: Fridays, 3:30 PM - 5:00 PM"));
    assert!(card.contains("Availability: 10 spots left"));
    assert!(card.contains("    - michael@mergington.edu\n"));
    assert!(!card.contains("No participants yet"));
}

#[test]
fn activity_card_without_participants() {
    let catalog = sample_catalog();
    let card = render_activity("Art Studio", &catalog["Art Studio"]);
    assert!(card.contains("No participants yet"));
    assert!(card.contains("Availability: 18 spots left"));
}

#[test]
fn catalog_renders_in_name_order() {
    let rendered = render_catalog(&sample_catalog());
    assert!(rendered.find("Art Studio").unwrap() < rendered.find("Chess Club").unwrap());
}

#[test]
fn empty_catalog_renders_notice() {
    assert_eq!(render_catalog(&Catalog::new()), "No activities available.\n");
}

#[test]
fn options_are_numbered_from_one() {
    assert_eq!(render_options(&sample_catalog()), "1) Art Studio\n2) Chess Club\n");
}

#[test]
fn resolve_selection_by_name_or_number() {
    let catalog = sample_catalog();
    assert_eq!(resolve_selection(&catalog, "Chess Club"), Some("Chess Club"));
    assert_eq!(resolve_selection(&catalog, "1"), Some("Art Studio"));
    assert_eq!(resolve_selection(&catalog, " 2 "), Some("Chess Club"));
}

#[test]
fn resolve_selection_rejects_out_of_range_and_unknown() {
    let catalog = sample_catalog();
    assert_eq!(resolve_selection(&catalog, "0"), None);
    assert_eq!(resolve_selection(&catalog, "3"), None);
    assert_eq!(resolve_selection(&catalog, "Robotics"), None);
}
