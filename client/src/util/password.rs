//! Password strength scoring and reset-policy check.
//!
//! The strength meter is cosmetic: the backend enforces its own policy. The
//! reset form additionally refuses to submit a password that the backend
//! would reject anyway.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum length counted by both the meter and the reset policy.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..50 => Self::Weak,
            50..75 => Self::Medium,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// CSS modifier for the meter bar.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Weak => "strength strength--weak",
            Self::Medium => "strength strength--medium",
            Self::Strong => "strength strength--strong",
        }
    }
}

/// Anything but an ASCII letter or digit; `_` counts.
fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Score in steps of 25: length, uppercase, digit, symbol.
#[must_use]
pub fn strength_score(password: &str) -> u8 {
    [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_symbol),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .map(|_| 25)
    .sum()
}

#[must_use]
pub fn strength(password: &str) -> (u8, StrengthBand) {
    let score = strength_score(password);
    (score, StrengthBand::from_score(score))
}

/// The reset policy: length, upper, lower, digit, symbol (`_` counts).
#[must_use]
pub fn meets_reset_policy(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_symbol)
}

/// Whether the reset form may be submitted.
#[must_use]
pub fn reset_ready(password: &str, confirm: &str) -> bool {
    meets_reset_policy(password) && password == confirm
}
