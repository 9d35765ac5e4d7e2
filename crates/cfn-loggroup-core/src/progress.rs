//! Progress events returned to the orchestration host

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};

/// Status of a handler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Pending,
    /// The host re-invokes the handler after `callback_delay_seconds`
    InProgress,
    Success,
    Failed,
}

impl OperationStatus {
    /// Whether the host stops invoking the handler on this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Success | OperationStatus::Failed)
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationStatus::Pending => write!(f, "PENDING"),
            OperationStatus::InProgress => write!(f, "IN_PROGRESS"),
            OperationStatus::Success => write!(f, "SUCCESS"),
            OperationStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Error codes understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    NotUpdatable,
    InvalidRequest,
    AccessDenied,
    InvalidCredentials,
    AlreadyExists,
    NotFound,
    ResourceConflict,
    Throttling,
    ServiceLimitExceeded,
    NotStabilized,
    GeneralServiceException,
    ServiceInternalError,
    NetworkFailure,
    InternalFailure,
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            HandlerErrorCode::NotUpdatable => "NotUpdatable",
            HandlerErrorCode::InvalidRequest => "InvalidRequest",
            HandlerErrorCode::AccessDenied => "AccessDenied",
            HandlerErrorCode::InvalidCredentials => "InvalidCredentials",
            HandlerErrorCode::AlreadyExists => "AlreadyExists",
            HandlerErrorCode::NotFound => "NotFound",
            HandlerErrorCode::ResourceConflict => "ResourceConflict",
            HandlerErrorCode::Throttling => "Throttling",
            HandlerErrorCode::ServiceLimitExceeded => "ServiceLimitExceeded",
            HandlerErrorCode::NotStabilized => "NotStabilized",
            HandlerErrorCode::GeneralServiceException => "GeneralServiceException",
            HandlerErrorCode::ServiceInternalError => "ServiceInternalError",
            HandlerErrorCode::NetworkFailure => "NetworkFailure",
            HandlerErrorCode::InternalFailure => "InternalFailure",
        };
        write!(f, "{}", code)
    }
}

/// Outcome of one handler invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<M, C> {
    pub status: OperationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub callback_context: Option<C>,

    #[serde(default)]
    pub callback_delay_seconds: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<M>,

    /// Only populated by list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<M>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<M, C> ProgressEvent<M, C> {
    fn with_status(status: OperationStatus) -> Self {
        Self {
            status,
            error_code: None,
            message: None,
            callback_context: None,
            callback_delay_seconds: 0,
            resource_model: None,
            resource_models: None,
            next_token: None,
        }
    }

    /// Terminal success carrying the resulting model
    pub fn success(model: M) -> Self {
        let mut event = Self::with_status(OperationStatus::Success);
        event.resource_model = Some(model);
        event
    }

    /// Terminal success with no model (delete)
    pub fn success_empty() -> Self {
        Self::with_status(OperationStatus::Success)
    }

    /// Terminal success for a list page
    pub fn list_success(models: Vec<M>, next_token: Option<String>) -> Self {
        let mut event = Self::with_status(OperationStatus::Success);
        event.resource_models = Some(models);
        event.next_token = next_token;
        event
    }

    pub fn failed(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        let mut event = Self::with_status(OperationStatus::Failed);
        event.error_code = Some(error_code);
        event.message = Some(message.into());
        event
    }

    /// Ask the host to call back after `delay_seconds` with `context`
    pub fn in_progress(model: Option<M>, context: C, delay_seconds: u32) -> Self {
        let mut event = Self::with_status(OperationStatus::InProgress);
        event.resource_model = model;
        event.callback_context = Some(context);
        event.callback_delay_seconds = delay_seconds;
        event
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == OperationStatus::Failed
    }
}

impl<M, C> From<HandlerError> for ProgressEvent<M, C> {
    fn from(err: HandlerError) -> Self {
        Self::failed(err.error_code(), err.to_string())
    }
}
