use once_cell::sync::Lazy;
use regex::Regex;

// One '@' with something on either side of it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns the part of `email` after the `@`, or `None` if the address is not valid.
pub fn extract_domain(email: &str) -> Option<&str> {
    if !is_valid_email(email) {
        return None;
    }
    email.split_once('@').map(|(_, domain)| domain)
}
