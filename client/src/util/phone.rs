//! Kenyan mobile number normalization for the registration form.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Country code prefixed to every number.
pub const COUNTRY_CODE: &str = "254";

/// Keep digits only and force the `254` prefix, dropping a local leading `0`.
#[must_use]
pub fn normalize(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with(COUNTRY_CODE) {
        digits
    } else {
        format!("{COUNTRY_CODE}{}", digits.trim_start_matches('0'))
    }
}

/// `2547` followed by exactly eight digits.
#[must_use]
pub fn is_valid(phone: &str) -> bool {
    phone.len() == 12 && phone.starts_with("2547") && phone.bytes().all(|b| b.is_ascii_digit())
}
