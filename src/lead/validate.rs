use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;
use super::submission::LeadSubmission;

/// The characters a browser's `\s` matches. The `regex` crate's `\s` is
/// Unicode `White_Space`, which adds U+0085 and leaves out U+FEFF.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", BROWSER_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// A lead that passed [`validate`]. The webhook only accepts this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidLead(LeadSubmission);

impl ValidLead {
    pub fn submission(&self) -> &LeadSubmission {
        &self.0
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required fields first, then email shape. First failure wins.
///
/// Whitespace counts as content; only truly empty fields are missing.
pub fn validate(lead: &LeadSubmission) -> Result<ValidLead, ValidationError> {
    if lead.first_name.is_empty() || lead.last_name.is_empty() || lead.email.is_empty() {
        return Err(ValidationError::MissingInformation);
    }
    if !is_valid_email(&lead.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(ValidLead(lead.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> LeadSubmission {
        LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_lead_passes() {
        let valid = validate(&jane()).unwrap();
        assert_eq!(valid.submission(), &jane());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for blank in [
            LeadSubmission { first_name: String::new(), ..jane() },
            LeadSubmission { last_name: String::new(), ..jane() },
            LeadSubmission { email: String::new(), ..jane() },
        ] {
            assert_eq!(validate(&blank), Err(ValidationError::MissingInformation));
        }
    }

    #[test]
    fn test_missing_fields_win_over_bad_email() {
        let lead = LeadSubmission {
            first_name: String::new(),
            email: "not-an-email".to_string(),
            ..jane()
        };
        assert_eq!(validate(&lead), Err(ValidationError::MissingInformation));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let lead = LeadSubmission { email: "not-an-email".to_string(), ..jane() };
        assert_eq!(validate(&lead), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(" jane@example.com"));
    }

    #[test]
    fn test_email_whitespace_matches_browser() {
        assert!(!is_valid_email("jane\u{FEFF}@example.com"));
        assert!(!is_valid_email("jane@exa\u{A0}mple.com"));
        assert!(!is_valid_email("jane@example.c\u{3000}om"));
        assert!(!is_valid_email("ja\tne@example.com"));
        assert!(is_valid_email("ja\u{85}ne@example.com"));
        assert!(is_valid_email("ja\u{200B}ne@example.com"));
    }

    #[test]
    fn test_whitespace_names_count_as_present() {
        let lead = LeadSubmission { first_name: " ".to_string(), ..jane() };
        assert!(validate(&lead).is_ok());
    }
}
