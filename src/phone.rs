//! Phone number normalization for WhatsApp recipients.

/// Strips everything but ASCII digits and prefixes `country_code` unless the
/// digits already start with it. The result is what the Cloud API expects in
/// the `to` field: digits only, no leading `+`.
///
/// Applying it twice yields the same number.
pub fn normalize(number: &str, country_code: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with(country_code) {
        digits
    } else {
        format!("{}{}", country_code, digits)
    }
}
