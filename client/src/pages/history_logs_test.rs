use super::*;

#[test]
fn apartment_value_round_trips_through_parse() {
    assert_eq!(apartment_value(None), "All");
    assert_eq!(parse_apartment(&apartment_value(None)), None);
    assert_eq!(parse_apartment(&apartment_value(Some(7))), Some(7));
}

#[test]
fn apartment_label_includes_location() {
    let a = Apartment { apartment_id: 3, apartment_name: "Sunrise Court".to_owned(), location: Some("Kisumu".to_owned()) };
    assert_eq!(apartment_label(&a), "Sunrise Court · Kisumu");
}

#[test]
fn unnamed_apartment_uses_id() {
    let a = Apartment { apartment_id: 3, apartment_name: String::new(), location: None };
    assert_eq!(apartment_label(&a), "Apartment 3");
}
