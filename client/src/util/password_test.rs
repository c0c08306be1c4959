use super::*;

#[test]
fn full_marks_for_mixed_password() {
    assert_eq!(strength("Aa1!aaaa"), (100, StrengthBand::Strong));
}

#[test]
fn length_alone_is_weak() {
    assert_eq!(strength("aaaaaaaa"), (25, StrengthBand::Weak));
}

#[test]
fn empty_scores_zero() {
    assert_eq!(strength_score(""), 0);
}

#[test]
fn band_edges() {
    assert_eq!(StrengthBand::from_score(25), StrengthBand::Weak);
    assert_eq!(StrengthBand::from_score(50), StrengthBand::Medium);
    assert_eq!(StrengthBand::from_score(75), StrengthBand::Strong);
}

#[test]
fn underscore_counts_as_symbol_for_the_meter() {
    assert_eq!(strength_score("a_"), 25);
    assert_eq!(strength_score("a "), 25);
    assert_eq!(strength_score("aaaaaaa_"), 50);
}

#[test]
fn underscore_policy_password_reads_strong() {
    assert!(meets_reset_policy("Secret1_"));
    assert_eq!(strength("Secret1_"), (100, StrengthBand::Strong));
}

#[test]
fn non_ascii_counts_as_symbol() {
    assert_eq!(strength_score("é"), 25);
}

#[test]
fn reset_policy_requires_every_class() {
    assert!(meets_reset_policy("Secret1!"));
    assert!(meets_reset_policy("Secret1_"));
    assert!(!meets_reset_policy("secret1!"));
    assert!(!meets_reset_policy("SECRET1!"));
    assert!(!meets_reset_policy("Secrets!"));
    assert!(!meets_reset_policy("Secret12"));
    assert!(!meets_reset_policy("Sec1!"));
}

#[test]
fn reset_requires_matching_confirmation() {
    assert!(reset_ready("Secret1!", "Secret1!"));
    assert!(!reset_ready("Secret1!", "Secret1?"));
}
