use crate::lead::download::DownloadAsset;

#[cfg(debug_assertions)]
fn default_webhook_url() -> &'static str {
    "http://localhost:3001/leads"  // Local webhook catcher during development
}

#[cfg(not(debug_assertions))]
fn default_webhook_url() -> &'static str {
    ""  // Must be provided with LEAD_WEBHOOK_URL at build time
}

const DEFAULT_BOOKING_URL: &str = "https://meetings.hubspot.com/adrienne-deli";
const DEFAULT_GUIDE_PATH: &str = "/FINAL 40 Reasons to Start a Franchise (6).pdf";
const DEFAULT_GUIDE_FILENAME: &str = "40 Reasons to Start a Franchise.pdf";
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
const DEFAULT_DOWNLOAD_OFFER_DELAY_MS: u32 = 3_000;

/// Everything the lead form needs to know about the outside world.
///
/// Built once in `main` and handed to components through a Yew context so
/// tests can construct their own.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadConfig {
    pub webhook_url: String,
    pub admin_email: String,
    pub debug: bool,
    /// When false the webhook is called in `no-cors` mode and the response
    /// status is never inspected.
    pub verify_response: bool,
    pub booking_url: String,
    pub guide: DownloadAsset,
    pub toast_duration_ms: u32,
    pub download_offer_delay_ms: u32,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url().to_string(),
            admin_email: String::new(),
            debug: cfg!(debug_assertions),
            verify_response: true,
            booking_url: DEFAULT_BOOKING_URL.to_string(),
            guide: DownloadAsset {
                path: DEFAULT_GUIDE_PATH.to_string(),
                filename: DEFAULT_GUIDE_FILENAME.to_string(),
            },
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            download_offer_delay_ms: DEFAULT_DOWNLOAD_OFFER_DELAY_MS,
        }
    }
}

impl LeadConfig {
    /// Reads overrides baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "LEAD_WEBHOOK_URL" => option_env!("LEAD_WEBHOOK_URL"),
                "LEAD_ADMIN_EMAIL" => option_env!("LEAD_ADMIN_EMAIL"),
                "LEAD_DEBUG" => option_env!("LEAD_DEBUG"),
                "LEAD_VERIFY_RESPONSE" => option_env!("LEAD_VERIFY_RESPONSE"),
                "LEAD_BOOKING_URL" => option_env!("LEAD_BOOKING_URL"),
                "LEAD_GUIDE_PATH" => option_env!("LEAD_GUIDE_PATH"),
                "LEAD_GUIDE_FILENAME" => option_env!("LEAD_GUIDE_FILENAME"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = non_empty("LEAD_WEBHOOK_URL") {
            config.webhook_url = url;
        }
        if let Some(email) = non_empty("LEAD_ADMIN_EMAIL") {
            config.admin_email = email;
        }
        if let Some(flag) = non_empty("LEAD_DEBUG").and_then(|v| parse_flag(&v)) {
            config.debug = flag;
        }
        if let Some(flag) = non_empty("LEAD_VERIFY_RESPONSE").and_then(|v| parse_flag(&v)) {
            config.verify_response = flag;
        }
        if let Some(url) = non_empty("LEAD_BOOKING_URL") {
            config.booking_url = url;
        }
        if let Some(path) = non_empty("LEAD_GUIDE_PATH") {
            config.guide.path = path;
        }
        if let Some(filename) = non_empty("LEAD_GUIDE_FILENAME") {
            config.guide.filename = filename;
        }
        config
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    pub fn has_webhook(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    /// No address is baked in; it has to come from `LEAD_ADMIN_EMAIL`.
    pub fn has_admin_email(&self) -> bool {
        !self.admin_email.is_empty()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = LeadConfig::from_lookup(|_| None);
        assert_eq!(config, LeadConfig::default());
        assert!(config.verify_response);
        assert_eq!(config.guide.filename, "40 Reasons to Start a Franchise.pdf");
        assert_eq!(config.download_offer_delay_ms, 3_000);
    }

    #[test]
    fn test_admin_email_must_be_provided() {
        let config = LeadConfig::default();
        assert_eq!(config.admin_email, "");
        assert!(!config.has_admin_email());

        let config = LeadConfig::from_lookup(lookup_from(&[("LEAD_ADMIN_EMAIL", " owner@example.com ")]));
        assert_eq!(config.admin_email, "owner@example.com");
        assert!(config.has_admin_email());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = LeadConfig::from_lookup(lookup_from(&[
            ("LEAD_WEBHOOK_URL", "https://hooks.example.com/leads"),
            ("LEAD_ADMIN_EMAIL", "owner@example.com"),
            ("LEAD_VERIFY_RESPONSE", "false"),
            ("LEAD_DEBUG", "yes"),
        ]));
        assert_eq!(config.webhook_url, "https://hooks.example.com/leads");
        assert_eq!(config.admin_email, "owner@example.com");
        assert!(!config.verify_response);
        assert!(config.debug);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert!(config.has_webhook());
    }

    #[test]
    fn test_blank_and_garbage_values_keep_defaults() {
        let config = LeadConfig::from_lookup(lookup_from(&[
            ("LEAD_WEBHOOK_URL", "   "),
            ("LEAD_VERIFY_RESPONSE", "maybe"),
        ]));
        assert_eq!(config.webhook_url, default_webhook_url());
        assert!(config.verify_response);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("sure"), None);
    }
}
