use super::*;

#[test]
fn missing_values_render_as_dash() {
    let sections = profile_sections(&Profile::default());
    assert_eq!(sections.len(), 5);
    assert!(sections.iter().flat_map(|(_, rows)| rows).all(|(_, v)| v == "—"));
}

#[test]
fn filled_values_are_shown() {
    let profile = Profile { kra_pin: Some("A123456789Z".to_owned()), ..Profile::default() };
    let sections = profile_sections(&profile);
    let (_, ids) = &sections[2];
    assert_eq!(ids[1], ("KRA PIN", "A123456789Z".to_owned()));
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("jane wanjiru otieno"), "JW");
    assert_eq!(initials(""), "");
}
