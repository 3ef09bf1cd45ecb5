use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::content::ApiError;
use crate::api::models::{ContactRequest, LeadResult};

pub const MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const MISSING_EMAIL: &str = "Please enter your email address.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Trimmed, lowercased address or the message to show next to the field.
pub fn check_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(INVALID_EMAIL);
    }
    Ok(email)
}

pub fn check_contact(request: &ContactRequest) -> Result<(), &'static str> {
    let blank = |s: &str| s.trim().is_empty();
    if blank(&request.name) || blank(&request.email) || blank(&request.message) {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What the form should say after the server answered (or failed to).
pub fn lead_outcome(result: Result<LeadResult, ApiError>) -> Result<(), String> {
    match result {
        Ok(LeadResult { success: true, .. }) => Ok(()),
        Ok(LeadResult { error: Some(message), .. }) => Err(message),
        Ok(_) | Err(_) => Err(GENERIC_FAILURE.to_string()),
    }
}
