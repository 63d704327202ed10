use thiserror::Error;

/// Why a lead was rejected before anything left the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First name, last name or email is empty.
    #[error("Missing information")]
    MissingInformation,

    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email")]
    InvalidEmail,
}

/// Failure delivering a lead to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No webhook URL was configured, so nothing was sent.
    #[error("No webhook URL configured")]
    NoEndpoint,

    #[error("Failed to encode payload: {0}")]
    Encode(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Webhook responded with status {0}")]
    Status(u16),
}

/// DOM manipulation for the download link failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("No document available")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
