//! Create Controller
//!
//! One submission = validate locally, send once, report. Nothing is
//! retried and a second submission is not blocked while one is in flight.

use object_api::{parse_attributes, ApiClient, ApiError, HttpClient, NewObject, ObjectId};

use crate::models::StatusMessage;

/// Raw text of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub description: String,
    pub attributes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Sending,
}

/// Terminal state of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    RejectedLocally,
    Succeeded(ObjectId),
    RejectedRemotely,
    NetworkFailed,
}

/// Page elements the create controller writes to
pub trait StatusSurface {
    fn clear(&self);
    fn show(&self, message: StatusMessage);
    fn set_phase(&self, _phase: SubmissionPhase) {}
}

#[derive(Clone)]
pub struct CreateController<C, S> {
    api: ApiClient<C>,
    surface: S,
}

impl<C: HttpClient, S: StatusSurface> CreateController<C, S> {
    pub fn new(api: ApiClient<C>, surface: S) -> Self {
        Self { api, surface }
    }

    pub async fn submit(&self, input: FormInput) -> SubmitOutcome {
        self.surface.clear();
        self.surface.set_phase(SubmissionPhase::Validating);
        let outcome = self.run(input).await;
        self.surface.set_phase(SubmissionPhase::Idle);
        outcome
    }

    async fn run(&self, input: FormInput) -> SubmitOutcome {
        let attributes = match parse_attributes(&input.attributes) {
            Ok(attributes) => attributes,
            Err(e) => {
                self.surface
                    .show(StatusMessage::error(format!("Error parsing attributes JSON: {}", e)));
                return SubmitOutcome::RejectedLocally;
            }
        };

        let description = if input.description.is_empty() {
            None
        } else {
            Some(input.description)
        };
        let object = NewObject {
            name: input.name,
            description,
            attributes,
        };

        self.surface.set_phase(SubmissionPhase::Sending);
        match self.api.create_object(&object).await {
            Ok(created) => {
                log::info!("[CreateObjectForm] Created object {}", created.id);
                self.surface.show(StatusMessage::success(format!(
                    "Object created successfully! ID: {}",
                    created.id
                )));
                SubmitOutcome::Succeeded(created.id)
            }
            Err(e @ ApiError::Rejected { .. }) => {
                log::warn!("[CreateObjectForm] Server rejected object: {}", e);
                self.surface
                    .show(StatusMessage::error(format!("Error creating object: {}", e)));
                SubmitOutcome::RejectedRemotely
            }
            Err(e) => {
                log::error!("[CreateObjectForm] Network or other error: {}", e);
                self.surface.show(StatusMessage::error(format!(
                    "Network error or other issue: {}",
                    e
                )));
                SubmitOutcome::NetworkFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use object_api::testing::StubClient;
    use object_api::ApiConfig;
    use serde_json::{json, Value};

    use crate::models::StatusKind;

    #[derive(Clone, Default)]
    struct RecordingStatus {
        message: Rc<RefCell<Option<StatusMessage>>>,
        phases: Rc<RefCell<Vec<SubmissionPhase>>>,
    }

    impl RecordingStatus {
        fn message(&self) -> StatusMessage {
            self.message.borrow().clone().expect("no status shown")
        }
    }

    impl StatusSurface for RecordingStatus {
        fn clear(&self) {
            *self.message.borrow_mut() = None;
        }
        fn show(&self, message: StatusMessage) {
            *self.message.borrow_mut() = Some(message);
        }
        fn set_phase(&self, phase: SubmissionPhase) {
            self.phases.borrow_mut().push(phase);
        }
    }

    fn controller(stub: &StubClient) -> (CreateController<StubClient, RecordingStatus>, RecordingStatus) {
        let status = RecordingStatus::default();
        let api = ApiClient::new(stub.clone(), ApiConfig::default());
        (CreateController::new(api, status.clone()), status)
    }

    fn input(name: &str, description: &str, attributes: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            description: description.to_string(),
            attributes: attributes.to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_blocks_request() {
        let stub = StubClient::new();
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("pump", "", "not json")).await;

        assert_eq!(outcome, SubmitOutcome::RejectedLocally);
        assert_eq!(stub.request_count(), 0);
        let message = status.message();
        assert_eq!(message.kind, StatusKind::Error);
        assert!(message.text.starts_with("Error parsing attributes JSON: "));
        assert_eq!(
            *status.phases.borrow(),
            vec![SubmissionPhase::Validating, SubmissionPhase::Idle]
        );
    }

    #[tokio::test]
    async fn test_array_attributes_rejected() {
        let stub = StubClient::new();
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("pump", "", "[1,2]")).await;

        assert_eq!(outcome, SubmitOutcome::RejectedLocally);
        assert_eq!(stub.request_count(), 0);
        assert!(status.message().text.contains("must be a valid JSON object"));
    }

    #[tokio::test]
    async fn test_success_shows_id() {
        let stub = StubClient::new();
        stub.push_json(200, json!({"id": 42}));
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("pump", "main", r#"{"rpm": 1200}"#)).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(ObjectId::Int(42)));
        let message = status.message();
        assert_eq!(message.kind, StatusKind::Success);
        assert_eq!(message.text, "Object created successfully! ID: 42");

        let sent: Value = serde_json::from_str(stub.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "pump", "description": "main", "attributes": {"rpm": 1200}}));
        assert_eq!(
            *status.phases.borrow(),
            vec![SubmissionPhase::Validating, SubmissionPhase::Sending, SubmissionPhase::Idle]
        );
    }

    #[tokio::test]
    async fn test_blank_fields_send_defaults() {
        let stub = StubClient::new();
        stub.push_json(200, json!({"id": 7}));
        let (ctrl, _status) = controller(&stub);

        ctrl.submit(input("pump", "", "  ")).await;

        let sent: Value = serde_json::from_str(stub.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "pump", "description": null, "attributes": {}}));
    }

    #[tokio::test]
    async fn test_whitespace_description_sent_as_given() {
        let stub = StubClient::new();
        stub.push_json(200, json!({"id": 7}));
        let (ctrl, _status) = controller(&stub);

        ctrl.submit(input("pump", "   ", "")).await;

        let sent: Value = serde_json::from_str(stub.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["description"], json!("   "));
    }

    #[tokio::test]
    async fn test_server_rejection_detail() {
        let stub = StubClient::new();
        stub.push_json(422, json!({"detail": [
            {"loc": ["body", "name"], "msg": "required"},
            {"loc": ["body", "attributes"], "msg": "not a dict"}
        ]}));
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("", "", "")).await;

        assert_eq!(outcome, SubmitOutcome::RejectedRemotely);
        let message = status.message();
        assert_eq!(message.kind, StatusKind::Error);
        assert_eq!(
            message.text,
            "Error creating object: Unprocessable Entity - body.name - required, body.attributes - not a dict"
        );
    }

    #[tokio::test]
    async fn test_network_failure_distinct_message() {
        let stub = StubClient::new();
        stub.push_failure("Failed to fetch");
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("pump", "", "{}")).await;

        assert_eq!(outcome, SubmitOutcome::NetworkFailed);
        assert_eq!(status.message().text, "Network error or other issue: Failed to fetch");
    }

    #[tokio::test]
    async fn test_rejection_with_html_body_is_network_error() {
        let stub = StubClient::new();
        stub.push_raw(502, "Bad Gateway", "<html>502 Bad Gateway</html>");
        let (ctrl, status) = controller(&stub);

        let outcome = ctrl.submit(input("pump", "", "")).await;

        assert_eq!(outcome, SubmitOutcome::NetworkFailed);
        let message = status.message();
        assert_eq!(message.kind, StatusKind::Error);
        assert!(message.text.starts_with("Network error or other issue: "), "{}", message.text);
        assert!(!message.text.contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_each_submission_is_independent() {
        let stub = StubClient::new();
        stub.push_failure("Failed to fetch");
        stub.push_json(200, json!({"id": 8}));
        let (ctrl, status) = controller(&stub);

        ctrl.submit(input("pump", "", "")).await;
        let outcome = ctrl.submit(input("pump", "", "")).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(ObjectId::Int(8)));
        assert_eq!(status.message().kind, StatusKind::Success);
        assert_eq!(stub.request_count(), 2);
    }
}
