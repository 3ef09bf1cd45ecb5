use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::models::lead_models::NewContactInquiry;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email address.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "This email is already subscribed.";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Failed to subscribe. Please try again.";
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please wait a minute and try again.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadErrorCode {
    MissingFields,
    InvalidEmail,
    AlreadySubscribed,
    RateLimited,
    StoreFailure,
}

/// Body of every lead capture response, success or not.
#[derive(Debug, Serialize)]
pub struct LeadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<LeadErrorCode>,
}

impl LeadResult {
    pub fn ok() -> Self {
        Self { success: true, error: None, code: None }
    }

    pub fn failure(code: LeadErrorCode, message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_string()),
            code: Some(code),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    Missing,
    Invalid,
}

pub fn normalize_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(EmailError::Missing);
    }
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(EmailError::Invalid);
    }
    Ok(email)
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactRequest {
    /// Returns `None` when any of name, email or message is blank.
    pub fn into_inquiry(self, created_at: i64) -> Option<NewContactInquiry> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }
        Some(NewContactInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(self.phone),
            company: optional(self.company),
            project_type: optional(self.project_type),
            message: message.to_string(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: Some("   ".to_string()),
            company: Some(" Builder & Co ".to_string()),
            project_type: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(request("", "a@b.co", "hi").into_inquiry(0).is_none());
        assert!(request("Ada", "  ", "hi").into_inquiry(0).is_none());
        assert!(request("Ada", "a@b.co", "\n\t").into_inquiry(0).is_none());
    }

    #[test]
    fn optional_fields_are_trimmed_or_dropped() {
        let inquiry = request(" Ada ", "a@b.co", " Hello ").into_inquiry(42).unwrap();
        assert_eq!(inquiry.name, "Ada");
        assert_eq!(inquiry.message, "Hello");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.company.as_deref(), Some("Builder & Co"));
        assert_eq!(inquiry.created_at, 42);
    }

    #[test]
    fn emails_are_normalized_and_checked() {
        assert_eq!(normalize_email("  Reader@Example.COM "), Ok("reader@example.com".to_string()));
        assert_eq!(normalize_email("   "), Err(EmailError::Missing));
        assert_eq!(normalize_email("reader@example"), Err(EmailError::Invalid));
        assert_eq!(normalize_email("two words@example.com"), Err(EmailError::Invalid));
        assert_eq!(normalize_email("@example.com"), Err(EmailError::Invalid));
    }

    #[test]
    fn result_serializes_without_empty_fields() {
        let ok = serde_json::to_value(LeadResult::ok()).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true}));

        let failed = serde_json::to_value(LeadResult::failure(
            LeadErrorCode::AlreadySubscribed,
            ALREADY_SUBSCRIBED_MESSAGE,
        ))
        .unwrap();
        assert_eq!(failed["code"], "already_subscribed");
        assert_eq!(failed["error"], ALREADY_SUBSCRIBED_MESSAGE);
    }
}
