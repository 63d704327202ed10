//! One pass through the lead form: validate, deliver, download, report.
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!         Validating -> Submitting -> Failed -> Idle
//!                       Submitting -> Succeeded -> (DelayedOffer) -> Idle
//! ```
//!
//! There is no cancellation once `Submitting` is reached.

use log::{info, warn};

use super::download::{start_download, DownloadTrigger};
use super::error::{TransportError, ValidationError};
use super::notice::{Notice, ScheduledNotice};
use super::submission::{FormType, LeadSubmission};
use super::validate::validate;
use super::webhook::{PageContext, WebhookSubmitter, WebhookTransport};
use crate::config::LeadConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Failed,
    Succeeded,
    DelayedOffer,
}

impl SubmissionPhase {
    pub fn is_busy(self) -> bool {
        self == SubmissionPhase::Submitting
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Invalid(ValidationError),
    /// `downloaded` is `None` when the form type defers the download.
    Failed {
        error: TransportError,
        downloaded: Option<bool>,
    },
    Succeeded {
        downloaded: Option<bool>,
    },
}

impl SubmissionOutcome {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionOutcome::Invalid(_) => SubmissionPhase::Invalid,
            SubmissionOutcome::Failed { .. } => SubmissionPhase::Failed,
            SubmissionOutcome::Succeeded { .. } => SubmissionPhase::Succeeded,
        }
    }

    /// Fields are only cleared after a delivered lead.
    pub fn resets_form(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded { .. })
    }

    /// The phase the form rests in once the immediate notices are shown.
    pub fn settled_phase(&self, form_type: FormType) -> SubmissionPhase {
        match (self, form_type) {
            (SubmissionOutcome::Succeeded { .. }, FormType::Contact) => SubmissionPhase::DelayedOffer,
            _ => SubmissionPhase::Idle,
        }
    }

    pub fn notices(&self, form_type: FormType, offer_delay_ms: u32) -> Vec<ScheduledNotice> {
        match self {
            SubmissionOutcome::Invalid(ValidationError::MissingInformation) => {
                vec![ScheduledNotice::now(Notice::MissingInformation)]
            }
            SubmissionOutcome::Invalid(ValidationError::InvalidEmail) => {
                vec![ScheduledNotice::now(Notice::InvalidEmail)]
            }
            SubmissionOutcome::Failed { .. } => vec![ScheduledNotice::now(Notice::SubmissionFailed)],
            SubmissionOutcome::Succeeded { downloaded } => match (form_type, downloaded) {
                (FormType::Download, Some(false)) => vec![ScheduledNotice::now(Notice::GuideDownloadFailed)],
                (FormType::Download, _) => vec![ScheduledNotice::now(Notice::GuideDownloading)],
                (FormType::Contact, _) => vec![
                    ScheduledNotice::now(Notice::RequestReceived),
                    ScheduledNotice::after(Notice::DownloadOffer, offer_delay_ms),
                ],
            },
        }
    }
}

pub struct LeadFlow<'a, T: WebhookTransport, D: DownloadTrigger> {
    config: &'a LeadConfig,
    transport: &'a T,
    download: &'a D,
}

impl<'a, T: WebhookTransport, D: DownloadTrigger> LeadFlow<'a, T, D> {
    pub fn new(config: &'a LeadConfig, transport: &'a T, download: &'a D) -> Self {
        Self {
            config,
            transport,
            download,
        }
    }

    /// Runs one submission. `on_phase` sees every transition up to the
    /// terminal phase of the returned outcome.
    pub async fn submit<F>(
        &self,
        form_type: FormType,
        lead: &LeadSubmission,
        page: &PageContext,
        on_phase: F,
    ) -> SubmissionOutcome
    where
        F: Fn(SubmissionPhase),
    {
        on_phase(SubmissionPhase::Validating);
        let valid = match validate(lead) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Lead rejected: {}", e);
                let outcome = SubmissionOutcome::Invalid(e);
                on_phase(outcome.phase());
                return outcome;
            }
        };

        on_phase(SubmissionPhase::Submitting);
        let result = WebhookSubmitter::new(self.config, self.transport)
            .submit(&valid, form_type, page)
            .await;

        let downloaded = match form_type {
            FormType::Download => Some(start_download(self.download, &self.config.guide)),
            FormType::Contact => None,
        };

        let outcome = match result {
            Ok(()) => {
                info!("{} lead delivered", form_type);
                SubmissionOutcome::Succeeded { downloaded }
            }
            Err(error) => SubmissionOutcome::Failed { error, downloaded },
        };
        on_phase(outcome.phase());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::download::tests::MockDownload;
    use crate::lead::error::RenderError;
    use crate::lead::webhook::tests::{page, MockTransport};
    use crate::lead::webhook::Delivery;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn jane() -> LeadSubmission {
        LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            description: String::new(),
        }
    }

    fn run(
        form_type: FormType,
        lead: &LeadSubmission,
        transport: &MockTransport,
        download: &MockDownload,
    ) -> (SubmissionOutcome, Vec<SubmissionPhase>) {
        let config = LeadConfig {
            webhook_url: "https://hooks.example.com/leads".to_string(),
            ..LeadConfig::default()
        };
        let phases = RefCell::new(Vec::new());
        let flow = LeadFlow::new(&config, transport, download);
        let outcome = block_on(flow.submit(form_type, lead, &page(), |p| phases.borrow_mut().push(p)));
        (outcome, phases.into_inner())
    }

    #[test]
    fn test_missing_fields_never_reach_webhook() {
        for lead in [
            LeadSubmission { first_name: String::new(), ..jane() },
            LeadSubmission { last_name: String::new(), ..jane() },
            LeadSubmission { email: String::new(), ..jane() },
        ] {
            let transport = MockTransport::new(Ok(Delivery::Status(200)));
            let download = MockDownload::new(Ok(()));
            let (outcome, phases) = run(FormType::Download, &lead, &transport, &download);

            assert_eq!(outcome, SubmissionOutcome::Invalid(ValidationError::MissingInformation));
            assert_eq!(transport.call_count(), 0);
            assert!(download.started.borrow().is_empty());
            assert_eq!(phases, vec![SubmissionPhase::Validating, SubmissionPhase::Invalid]);
        }
    }

    #[test]
    fn test_bad_email_shows_invalid_email_without_network() {
        let transport = MockTransport::new(Ok(Delivery::Status(200)));
        let download = MockDownload::new(Ok(()));
        let lead = LeadSubmission { email: "not-an-email".to_string(), ..jane() };
        let (outcome, _) = run(FormType::Download, &lead, &transport, &download);

        assert_eq!(transport.call_count(), 0);
        assert_eq!(
            outcome.notices(FormType::Download, 3_000),
            vec![ScheduledNotice::now(Notice::InvalidEmail)]
        );
        assert!(!outcome.resets_form());
    }

    #[test]
    fn test_success_downloads_and_resets() {
        let transport = MockTransport::new(Ok(Delivery::Status(200)));
        let download = MockDownload::new(Ok(()));
        let (outcome, phases) = run(FormType::Download, &jane(), &transport, &download);

        assert_eq!(outcome, SubmissionOutcome::Succeeded { downloaded: Some(true) });
        assert_eq!(transport.call_count(), 1);
        assert_eq!(download.started.borrow().len(), 1);
        assert!(outcome.resets_form());
        assert_eq!(
            outcome.notices(FormType::Download, 3_000),
            vec![ScheduledNotice::now(Notice::GuideDownloading)]
        );
        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Validating,
                SubmissionPhase::Submitting,
                SubmissionPhase::Succeeded,
            ]
        );

        let body = transport.last_body();
        assert_eq!(body["formType"], "download");
        assert_eq!(body["phone"], "");
        assert_eq!(body["source"], "https://franchise.example.com/");
        assert!(body["timestamp"].as_str().unwrap().starts_with("2024-03-01T12:30:00"));
    }

    #[test]
    fn test_success_with_broken_download_still_succeeds() {
        let transport = MockTransport::new(Ok(Delivery::Status(201)));
        let download = MockDownload::new(Err(RenderError::NoDocument));
        let (outcome, _) = run(FormType::Download, &jane(), &transport, &download);

        assert_eq!(outcome, SubmissionOutcome::Succeeded { downloaded: Some(false) });
        assert!(outcome.resets_form());
        assert_eq!(
            outcome.notices(FormType::Download, 3_000),
            vec![ScheduledNotice::now(Notice::GuideDownloadFailed)]
        );
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        for response in [
            Ok(Delivery::Status(502)),
            Err(TransportError::Network("offline".to_string())),
        ] {
            let transport = MockTransport::new(response);
            let download = MockDownload::new(Ok(()));
            let (outcome, phases) = run(FormType::Download, &jane(), &transport, &download);

            assert!(matches!(outcome, SubmissionOutcome::Failed { downloaded: Some(true), .. }));
            assert!(!outcome.resets_form());
            assert_eq!(
                outcome.notices(FormType::Download, 3_000),
                vec![ScheduledNotice::now(Notice::SubmissionFailed)]
            );
            assert_eq!(phases.last(), Some(&SubmissionPhase::Failed));
            assert_eq!(outcome.settled_phase(FormType::Download), SubmissionPhase::Idle);
        }
    }

    #[test]
    fn test_contact_form_defers_download_offer() {
        let transport = MockTransport::new(Ok(Delivery::Status(200)));
        let download = MockDownload::new(Ok(()));
        let (outcome, _) = run(FormType::Contact, &jane(), &transport, &download);

        assert_eq!(outcome, SubmissionOutcome::Succeeded { downloaded: None });
        assert!(download.started.borrow().is_empty());
        assert_eq!(
            outcome.notices(FormType::Contact, 3_000),
            vec![
                ScheduledNotice::now(Notice::RequestReceived),
                ScheduledNotice::after(Notice::DownloadOffer, 3_000),
            ]
        );
        assert_eq!(outcome.settled_phase(FormType::Contact), SubmissionPhase::DelayedOffer);
        assert_eq!(transport.last_body()["formType"], "contact");
    }

    #[test]
    fn test_contact_failure_offers_nothing() {
        let transport = MockTransport::new(Ok(Delivery::Status(400)));
        let download = MockDownload::new(Ok(()));
        let (outcome, _) = run(FormType::Contact, &jane(), &transport, &download);

        assert!(matches!(outcome, SubmissionOutcome::Failed { downloaded: None, .. }));
        assert_eq!(outcome.settled_phase(FormType::Contact), SubmissionPhase::Idle);
    }

    #[test]
    fn test_only_submitting_is_busy() {
        assert!(SubmissionPhase::Submitting.is_busy());
        assert!(!SubmissionPhase::Validating.is_busy());
        assert!(!SubmissionPhase::DelayedOffer.is_busy());
    }
}
