//! Delivery of validated leads to the no-code automation webhook.
//!
//! The payload is the form plus some context about where it came from. The
//! call is made once. Nothing is retried or queued, so a lead that fails here
//! only survives in the console log.

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{debug, error, info, warn};
use serde::Serialize;
use web_sys::RequestMode;

use super::error::TransportError;
use super::submission::{normalize_phone, FormType};
use super::validate::ValidLead;
use crate::config::LeadConfig;

/// Where and when a submission happened.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContext {
    pub source: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

impl PageContext {
    /// Reads the current URL and user agent from the browser.
    pub fn capture() -> Self {
        let window = web_sys::window();
        let source = window
            .as_ref()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let user_agent = window
            .as_ref()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self {
            source,
            user_agent,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub admin_email: String,
    pub timestamp: String,
    pub form_type: FormType,
    pub source: String,
    pub user_agent: String,
}

impl WebhookPayload {
    pub fn new(lead: &ValidLead, form_type: FormType, admin_email: &str, page: &PageContext) -> Self {
        let lead = lead.submission();
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            phone: normalize_phone(&lead.phone),
            description: lead.description.clone(),
            admin_email: admin_email.to_string(),
            timestamp: page.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            form_type,
            source: page.source.clone(),
            user_agent: page.user_agent.clone(),
        }
    }
}

/// What the transport could observe about the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Status(u16),
    /// `no-cors` response; the status is hidden from us.
    Opaque,
}

/// Abstraction over the HTTP call so the flow can run against a double.
pub trait WebhookTransport {
    async fn post_json(&self, url: &str, body: String, opaque: bool) -> Result<Delivery, TransportError>;
}

/// `fetch` via gloo-net.
pub struct FetchTransport;

impl WebhookTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String, opaque: bool) -> Result<Delivery, TransportError> {
        let mut request = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if opaque {
            request = request.mode(RequestMode::NoCors);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if opaque {
            Ok(Delivery::Opaque)
        } else {
            Ok(Delivery::Status(response.status()))
        }
    }
}

pub struct WebhookSubmitter<'a, T: WebhookTransport> {
    config: &'a LeadConfig,
    transport: &'a T,
}

impl<'a, T: WebhookTransport> WebhookSubmitter<'a, T> {
    pub fn new(config: &'a LeadConfig, transport: &'a T) -> Self {
        Self { config, transport }
    }

    /// Sends the lead once. Any failure is logged here, at error level.
    ///
    /// With `verify_response` off the call is fire-and-forget: any status,
    /// opaque or not, counts as delivered as long as the request itself did
    /// not fail.
    pub async fn submit(&self, lead: &ValidLead, form_type: FormType, page: &PageContext) -> Result<(), TransportError> {
        let result = self.deliver(lead, form_type, page).await;
        if let Err(e) = &result {
            error!("Webhook delivery of {} lead failed: {}", form_type, e);
        }
        result
    }

    async fn deliver(&self, lead: &ValidLead, form_type: FormType, page: &PageContext) -> Result<(), TransportError> {
        // An empty URL would resolve to the page itself.
        if !self.config.has_webhook() {
            return Err(TransportError::NoEndpoint);
        }

        let payload = WebhookPayload::new(lead, form_type, &self.config.admin_email, page);
        let body = serde_json::to_string(&payload).map_err(|e| TransportError::Encode(e.to_string()))?;
        debug!("Sending {} lead to {}: {}", form_type, self.config.webhook_url, body);

        let delivery = self
            .transport
            .post_json(&self.config.webhook_url, body, !self.config.verify_response)
            .await?;

        match delivery {
            Delivery::Opaque => info!("Webhook response: opaque"),
            Delivery::Status(status) => info!("Webhook response status: {}", status),
        }

        if !self.config.verify_response {
            return Ok(());
        }

        match delivery {
            Delivery::Status(status) if (200..300).contains(&status) => Ok(()),
            Delivery::Status(status) => Err(TransportError::Status(status)),
            Delivery::Opaque => {
                warn!("Opaque response while verification is on, assuming delivered");
                Ok(())
            }
        }
    }
}
