//! Defines the invocation contract with the provider host: the request
//! a handler receives and the progress event it answers with.

use crate::error::HandlerError;
use crate::model::ResourceModel;
use serde::{Deserialize, Serialize};

/// Default `aws_partition` value.
fn default_aws_partition() -> String {
    String::from("aws")
}

/// The lifecycle action the host is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// Where the invocation happens. Used to derive ARNs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub aws_account_id: String,
    pub region: String,
    #[serde(default = "default_aws_partition")]
    pub aws_partition: String,
}

/// State threaded by the host between successive invocations of the
/// same handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackContext {
    /// The mutating call succeeded during an earlier invocation.
    #[serde(default)]
    pub update_issued: bool,

    /// Describe calls performed so far while stabilizing.
    #[serde(default)]
    pub stabilization_attempts: u32,
}

/// A single handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerRequest {
    pub action: Action,

    #[serde(flatten)]
    pub context: RequestContext,

    pub desired_resource_state: ResourceModel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_resource_state: Option<ResourceModel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Failed,
    InProgress,
}

/// Error codes understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    InvalidRequest,
    NotFound,
    ResourceConflict,
    GeneralServiceException,
    NotStabilized,
}

/// The answer to a handler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: OperationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<ResourceModel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<ResourceModel>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_delay_seconds: Option<u32>,
}

impl ProgressEvent {
    /// The handler finished and the resource is in its final state.
    pub fn success(model: ResourceModel) -> Self {
        ProgressEvent {
            status: OperationStatus::Success,
            resource_model: Some(model),
            resource_models: None,
            message: None,
            error_code: None,
            callback_context: None,
            callback_delay_seconds: None,
        }
    }

    /// The handler needs to be invoked again with the given context.
    pub fn in_progress(
        model: ResourceModel,
        context: CallbackContext,
        callback_delay_seconds: u32,
    ) -> Self {
        ProgressEvent {
            status: OperationStatus::InProgress,
            resource_model: Some(model),
            resource_models: None,
            message: None,
            error_code: None,
            callback_context: Some(context),
            callback_delay_seconds: Some(callback_delay_seconds),
        }
    }

    /// The handler gave up with the given error.
    pub fn failed(error: &HandlerError) -> Self {
        ProgressEvent {
            status: OperationStatus::Failed,
            resource_model: None,
            resource_models: None,
            message: Some(error.to_string()),
            error_code: Some(error.code()),
            callback_context: None,
            callback_delay_seconds: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_resumed_update_request() {
        let request: HandlerRequest = serde_json::from_value(json!({
            "action": "UPDATE",
            "awsAccountId": "123456789012",
            "region": "eu-west-1",
            "desiredResourceState": {"Id": "ds", "IndexId": "idx", "Name": "docs"},
            "callbackContext": {"updateIssued": true, "stabilizationAttempts": 7}
        }))
        .unwrap();
        assert_eq!(request.action, Action::Update);
        assert_eq!(request.context.aws_partition, "aws");
        assert_eq!(request.desired_resource_state.name.as_deref(), Some("docs"));
        assert_eq!(
            request.callback_context,
            Some(CallbackContext {
                update_issued: true,
                stabilization_attempts: 7
            })
        );
    }

    #[test]
    fn in_progress_event_shape() {
        let event = ProgressEvent::in_progress(
            ResourceModel::default(),
            CallbackContext {
                update_issued: true,
                stabilization_attempts: 3,
            },
            30,
        );
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "status": "IN_PROGRESS",
                "resourceModel": {},
                "callbackContext": {"updateIssued": true, "stabilizationAttempts": 3},
                "callbackDelaySeconds": 30
            })
        );
    }

    #[test]
    fn failed_event_carries_code_and_message() {
        let event = ProgressEvent::failed(&HandlerError::ResourceConflict(String::from("busy")));
        assert_eq!(event.status, OperationStatus::Failed);
        assert_eq!(event.error_code, Some(HandlerErrorCode::ResourceConflict));
        assert_eq!(
            serde_json::to_value(&event).unwrap()["errorCode"],
            json!("ResourceConflict")
        );
        assert!(event.message.unwrap().contains("busy"));
    }
}
