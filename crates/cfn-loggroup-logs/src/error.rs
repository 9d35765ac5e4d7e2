//! CloudWatch Logs error types

use cfn_loggroup_core::HandlerError;
use thiserror::Error;

/// Errors reported by the remote logging service
///
/// Classified by the service's error code; anything unrecognised lands in
/// [`LogsError::Service`] with the code and message preserved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogsError {
    #[error("log group already exists: {0}")]
    ResourceAlreadyExists(String),

    #[error("log group not found: {0}")]
    ResourceNotFound(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation aborted: {0}")]
    OperationAborted(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("throttled: {0}")]
    Throttling(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("{code}: {message}")]
    Service { code: String, message: String },
}

impl LogsError {
    /// Classify a service error by its wire error code
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("ResourceAlreadyExistsException") => LogsError::ResourceAlreadyExists(message),
            Some("ResourceNotFoundException") => LogsError::ResourceNotFound(message),
            Some("InvalidParameterException") => LogsError::InvalidParameter(message),
            Some("LimitExceededException") => LogsError::LimitExceeded(message),
            Some("OperationAbortedException") => LogsError::OperationAborted(message),
            Some("ServiceUnavailableException") => LogsError::ServiceUnavailable(message),
            Some("ThrottlingException") => LogsError::Throttling(message),
            Some("AccessDeniedException") => LogsError::AccessDenied(message),
            Some(other) => LogsError::Service {
                code: other.to_string(),
                message,
            },
            None => LogsError::Service {
                code: "Unknown".to_string(),
                message,
            },
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, LogsError::ResourceAlreadyExists(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LogsError::ResourceNotFound(_))
    }

    /// Translate into a handler error for the log group `name`
    pub fn into_handler_error(self, type_name: &str, name: &str) -> HandlerError {
        match self {
            LogsError::ResourceAlreadyExists(_) => HandlerError::already_exists(type_name, name),
            LogsError::ResourceNotFound(_) => HandlerError::not_found(type_name, name),
            LogsError::InvalidParameter(msg) => HandlerError::InvalidRequest(msg),
            LogsError::LimitExceeded(msg) => HandlerError::ServiceLimitExceeded(msg),
            LogsError::OperationAborted(msg) => HandlerError::ResourceConflict(msg),
            LogsError::ServiceUnavailable(msg) => HandlerError::ServiceInternalError(msg),
            LogsError::Throttling(msg) => HandlerError::Throttling(msg),
            LogsError::AccessDenied(msg) => HandlerError::AccessDenied(msg),
            e @ LogsError::Service { .. } => HandlerError::GeneralService(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogsError>;
