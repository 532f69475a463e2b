use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidateLength};

pub const MIN_NAME_LENGTH: u64 = 6;
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// Anchored: partial matches are rejected
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Identity entered at the start of a session.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 6))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE))]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.validate_length(Some(MIN_NAME_LENGTH), None, None)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.validate_length(Some(MIN_PASSWORD_LENGTH), None, None)
}
