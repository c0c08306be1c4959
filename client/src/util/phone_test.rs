use super::*;

#[test]
fn local_number_gets_country_code() {
    assert_eq!(normalize("0712345678"), "254712345678");
    assert_eq!(normalize("712 345 678"), "254712345678");
}

#[test]
fn existing_country_code_is_kept() {
    assert_eq!(normalize("+254 712-345-678"), "254712345678");
}

#[test]
fn empty_input_becomes_bare_prefix() {
    assert_eq!(normalize(""), "254");
    assert_eq!(normalize("abc"), "254");
}

#[test]
fn validity_requires_2547_and_eight_digits() {
    assert!(is_valid("254712345678"));
    assert!(!is_valid("254112345678"));
    assert!(!is_valid("25471234567"));
    assert!(!is_valid("2547123456789"));
    assert!(!is_valid("254"));
}
