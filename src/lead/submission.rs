use std::fmt;

use serde::Serialize;

/// Raw form state, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    Description,
}

impl LeadField {
    /// Matches the JSON key the webhook receives.
    pub fn name(self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Description => "description",
        }
    }
}

impl LeadSubmission {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FirstName => self.first_name = value,
            LeadField::LastName => self.last_name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::Description => self.description = value,
        }
    }

    pub fn with(mut self, field: LeadField, value: String) -> Self {
        self.set(field, value);
        self
    }
}

/// Which form produced the lead. Sent as `formType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Home page form: the guide downloads right after submitting.
    Download,
    /// Guide request page: the guide is offered a few seconds later.
    Contact,
}

impl FormType {
    pub fn as_str(self) -> &'static str {
        match self {
            FormType::Download => "download",
            FormType::Contact => "contact",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips everything but ASCII digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("+1 555.123.4567 ext 9"), "155512345679");
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("call me"), "");
    }

    #[test]
    fn test_set_and_get_fields() {
        let lead = LeadSubmission::default()
            .with(LeadField::FirstName, "Jane".to_string())
            .with(LeadField::Email, "jane@example.com".to_string());
        assert_eq!(lead.get(LeadField::FirstName), "Jane");
        assert_eq!(lead.get(LeadField::Email), "jane@example.com");
        assert_eq!(lead.get(LeadField::LastName), "");
        assert_ne!(lead, LeadSubmission::default());
    }

    #[test]
    fn test_form_type_tag() {
        assert_eq!(FormType::Download.to_string(), "download");
        assert_eq!(serde_json::to_string(&FormType::Contact).unwrap(), "\"contact\"");
    }
}
