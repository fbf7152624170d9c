use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Input validation utilities

// Compile regex patterns once at startup.
// These patterns are hardcoded and always valid, so we use expect() with explicit reasoning.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

static IMAGE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://.+")
        .expect("hardcoded image URL regex is invalid - fix source code")
});

/// Validate email format (RFC 5322 simplified)
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Validate that an image reference is syntactically an http(s) URL
pub fn validate_image_url(url: &str) -> bool {
    IMAGE_URL_REGEX.is_match(url)
}

/// validator crate compatible custom validator for email shape
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// validator crate compatible check that a display name is non-empty after
/// trimming; the stored name is the trimmed form
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::new("empty_name"))
    } else {
        Ok(())
    }
}

/// Trim post or comment text, rejecting whitespace-only input
pub fn trimmed_content(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        assert!(validate_email("alice@example.com"));
        assert!(validate_email("a.b+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("user@nodot"));
    }

    #[test]
    fn image_urls_must_be_http() {
        assert!(validate_image_url("https://cdn.example.com/pic.png"));
        assert!(validate_image_url("http://example.com/a"));
        assert!(!validate_image_url("ftp://example.com/a"));
        assert!(!validate_image_url("not a url"));
    }

    #[test]
    fn display_name_must_survive_trimming() {
        assert!(validate_display_name("Alice").is_ok());
        assert!(validate_display_name("  Alice  ").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert_eq!(trimmed_content("   "), None);
        assert_eq!(trimmed_content("\n\t"), None);
        assert_eq!(trimmed_content("  Hello  "), Some("Hello"));
    }
}
