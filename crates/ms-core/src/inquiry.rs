//! Contact-inquiry form state machine and submission transport.
//!
//! [`InquiryController`] owns the draft and the submission status. Field
//! edits and service toggles are synchronous; submission is split into a
//! synchronous [`InquiryController::begin_submit`] (guard + snapshot) and
//! [`InquiryController::complete_submit`] (outcome applied) around the one
//! asynchronous suspension point, the HTTP POST. At most one request is in
//! flight at a time because `begin_submit` refuses to start while loading.

use serde::Serialize;
use thiserror::Error;

use crate::catalog;

/// Origin tag attached to every submitted payload.
pub const INQUIRY_SOURCE: &str = "website";

/// Fallback shown when a transport failure carries no message of its own.
const GENERIC_FAILURE: &str = "Something went wrong";

/// The inquiry form's editable fields.
///
/// No validation is performed on update; `name` and `email` rely on
/// browser-native required/type checks at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub services: Vec<String>,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            industry: catalog::default_industry().to_string(),
            services: Vec::new(),
            budget: String::new(),
            timeline: String::new(),
            message: String::new(),
        }
    }
}

/// Single-line text fields addressable through
/// [`InquiryController::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Email,
    Company,
    Industry,
    Budget,
    Timeline,
    Message,
}

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// JSON body POSTed to the inquiries endpoint: the draft plus the origin tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub services: Vec<String>,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub source: &'static str,
}

impl InquiryPayload {
    fn from_draft(draft: &InquiryDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            company: draft.company.clone(),
            industry: draft.industry.clone(),
            services: draft.services.clone(),
            budget: draft.budget.clone(),
            timeline: draft.timeline.clone(),
            message: draft.message.clone(),
            source: INQUIRY_SOURCE,
        }
    }
}

/// Failure to complete the request at the transport level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
}

impl TransportError {
    /// Message surfaced to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Network(message) if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Seam over the outbound HTTP POST, so the controller can be exercised
/// against a scripted transport.
#[async_trait::async_trait(?Send)]
pub trait InquiryTransport {
    /// POST the payload as JSON (`Content-Type: application/json`), returning
    /// the HTTP status code. No retries, no cancellation, no timeout.
    async fn post_inquiry(&self, url: &str, payload: &InquiryPayload)
        -> Result<u16, TransportError>;
}

/// Sole owner of the inquiry draft and submission status.
#[derive(Debug, Default)]
pub struct InquiryController {
    draft: InquiryDraft,
    status: SubmissionStatus,
}

impl InquiryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Replace one field of the draft. No validation happens here.
    pub fn update_field(&mut self, field: InquiryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InquiryField::Name => self.draft.name = value,
            InquiryField::Email => self.draft.email = value,
            InquiryField::Company => self.draft.company = value,
            InquiryField::Industry => self.draft.industry = value,
            InquiryField::Budget => self.draft.budget = value,
            InquiryField::Timeline => self.draft.timeline = value,
            InquiryField::Message => self.draft.message = value,
        }
    }

    /// Remove the service if selected, add it if not. Labels outside the
    /// catalog are ignored, keeping `services` a subset of the catalog.
    pub fn toggle_service(&mut self, label: &str) {
        if !catalog::is_known_service(label) {
            tracing::warn!(label, "ignoring unknown service label");
            return;
        }
        if let Some(position) = self.draft.services.iter().position(|s| s == label) {
            self.draft.services.remove(position);
        } else {
            self.draft.services.push(label.to_string());
        }
    }

    /// Start a submission attempt.
    ///
    /// Returns `None` while a request is already in flight. Otherwise moves
    /// to `Loading` (discarding any prior error) and snapshots the payload
    /// to send.
    pub fn begin_submit(&mut self) -> Option<InquiryPayload> {
        if self.status.is_loading() {
            return None;
        }
        self.status = SubmissionStatus::Loading;
        Some(InquiryPayload::from_draft(&self.draft))
    }

    /// Apply the outcome of the request started by [`begin_submit`].
    ///
    /// A 2xx status resets the draft; any other outcome keeps it so the
    /// visitor can resubmit.
    pub fn complete_submit(&mut self, outcome: Result<u16, TransportError>) {
        match outcome {
            Ok(code) if (200..300).contains(&code) => {
                tracing::debug!(code, "inquiry accepted");
                self.status = SubmissionStatus::Success;
                self.draft = InquiryDraft::default();
            }
            Ok(code) => {
                tracing::debug!(code, "inquiry rejected");
                self.status = SubmissionStatus::Error(format!("Request failed: {code}"));
            }
            Err(error) => {
                tracing::debug!(%error, "inquiry transport failed");
                self.status = SubmissionStatus::Error(error.user_message());
            }
        }
    }

    /// Full submission flow: guard, POST, apply the outcome.
    pub async fn submit<T: InquiryTransport>(&mut self, transport: &T, url: &str) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let outcome = transport.post_inquiry(url, &payload).await;
        self.complete_submit(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Transport double: records every request and replays a scripted outcome.
    struct MockTransport {
        outcome: Result<u16, TransportError>,
        requests: RefCell<Vec<(String, InquiryPayload)>>,
    }

    impl MockTransport {
        fn returning(outcome: Result<u16, TransportError>) -> Self {
            Self {
                outcome,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl InquiryTransport for MockTransport {
        async fn post_inquiry(
            &self,
            url: &str,
            payload: &InquiryPayload,
        ) -> Result<u16, TransportError> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), payload.clone()));
            self.outcome.clone()
        }
    }

    fn ada_controller() -> InquiryController {
        let mut controller = InquiryController::new();
        controller.update_field(InquiryField::Name, "Ada");
        controller.update_field(InquiryField::Email, "ada@example.com");
        controller.toggle_service("Custom Chatbots");
        controller
    }

    #[test]
    fn test_empty_draft_defaults() {
        let draft = InquiryDraft::default();
        assert_eq!(draft.industry, "Manufacturing");
        assert!(draft.services.is_empty());
        assert_eq!(draft.budget, "");
    }

    #[test]
    fn test_toggle_service_round_trip() {
        let mut controller = InquiryController::new();
        controller.toggle_service("Custom Chatbots");
        controller.toggle_service("Custom Chatbots");
        assert!(controller.draft().services.is_empty());
    }

    #[test]
    fn test_toggle_service_never_duplicates() {
        let mut controller = InquiryController::new();
        controller.toggle_service("Systems Integrations");
        assert_eq!(controller.draft().services, vec!["Systems Integrations"]);
        controller.toggle_service("Systems Integrations");
        assert!(controller.draft().services.is_empty());
    }

    #[test]
    fn test_toggle_unknown_service_is_ignored() {
        let mut controller = InquiryController::new();
        controller.toggle_service("Quantum Consulting");
        assert!(controller.draft().services.is_empty());
    }

    #[test]
    fn test_begin_submit_guards_while_loading() {
        let mut controller = ada_controller();
        assert!(controller.begin_submit().is_some());
        assert!(controller.status().is_loading());
        assert!(controller.begin_submit().is_none());
    }

    #[test]
    fn test_begin_submit_clears_prior_error() {
        let mut controller = ada_controller();
        controller.begin_submit();
        controller.complete_submit(Err(TransportError::Network("offline".into())));
        assert_eq!(controller.status().error_message(), Some("offline"));

        assert!(controller.begin_submit().is_some());
        assert!(controller.status().error_message().is_none());
    }

    #[tokio::test]
    async fn test_submit_success_resets_draft() {
        let mut controller = ada_controller();
        let transport = MockTransport::returning(Ok(201));

        controller
            .submit(&transport, "http://localhost:8000/api/inquiries")
            .await;

        assert!(controller.status().is_success());
        assert_eq!(controller.draft(), &InquiryDraft::default());

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://localhost:8000/api/inquiries");

        let body = serde_json::to_value(&requests[0].1).unwrap();
        assert_eq!(body["source"], "website");
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["services"], serde_json::json!(["Custom Chatbots"]));
    }

    #[tokio::test]
    async fn test_submit_server_error_preserves_draft() {
        let mut controller = ada_controller();
        let transport = MockTransport::returning(Ok(500));

        controller
            .submit(&transport, "http://localhost:8000/api/inquiries")
            .await;

        let message = controller.status().error_message().unwrap();
        assert!(message.contains("500"), "message: {message}");
        assert_eq!(controller.draft().name, "Ada");
        assert_eq!(controller.draft().services, vec!["Custom Chatbots"]);
    }

    #[tokio::test]
    async fn test_submit_network_failure_surfaces_message() {
        let mut controller = ada_controller();
        let transport = MockTransport::returning(Err(TransportError::Network("offline".into())));

        controller
            .submit(&transport, "http://localhost:8000/api/inquiries")
            .await;

        assert_eq!(controller.status().error_message(), Some("offline"));
        assert_eq!(controller.draft().name, "Ada");
    }

    #[tokio::test]
    async fn test_submit_while_loading_sends_nothing() {
        let mut controller = ada_controller();
        // A request is already in flight.
        controller.begin_submit();

        let transport = MockTransport::returning(Ok(200));
        controller
            .submit(&transport, "http://localhost:8000/api/inquiries")
            .await;

        assert!(transport.requests.borrow().is_empty());
        assert!(controller.status().is_loading());
    }

    #[tokio::test]
    async fn test_resubmit_after_error() {
        let mut controller = ada_controller();
        let failing = MockTransport::returning(Ok(503));
        controller
            .submit(&failing, "http://localhost:8000/api/inquiries")
            .await;
        assert!(controller.status().error_message().is_some());

        let succeeding = MockTransport::returning(Ok(200));
        controller
            .submit(&succeeding, "http://localhost:8000/api/inquiries")
            .await;
        assert!(controller.status().is_success());
        assert_eq!(succeeding.requests.borrow().len(), 1);
    }

    #[test]
    fn test_empty_failure_message_falls_back() {
        let error = TransportError::Network(String::new());
        assert_eq!(error.user_message(), "Something went wrong");
    }

    #[test]
    fn test_boundary_status_codes() {
        let mut controller = InquiryController::new();
        controller.begin_submit();
        controller.complete_submit(Ok(299));
        assert!(controller.status().is_success());

        controller.begin_submit();
        controller.complete_submit(Ok(300));
        assert_eq!(
            controller.status().error_message(),
            Some("Request failed: 300")
        );
    }
}
