//! Handler error types

use crate::progress::HandlerErrorCode;
use thiserror::Error;

/// Errors a resource handler can terminate an invocation with.
///
/// Every variant maps onto exactly one [`HandlerErrorCode`]; the dispatcher
/// turns an `Err` into a `FAILED` progress event carrying that code.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Resource of type '{resource_type}' with identifier '{identifier}' already exists.")]
    AlreadyExists {
        resource_type: String,
        identifier: String,
    },

    #[error("Resource of type '{resource_type}' with identifier '{identifier}' was not found.")]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("Resource of type '{resource_type}' with identifier '{identifier}' is not updatable with parameters provided.")]
    NotUpdatable {
        resource_type: String,
        identifier: String,
    },

    #[error("Invalid request provided: {0}")]
    InvalidRequest(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource conflict: {0}")]
    ResourceConflict(String),

    #[error("Rate exceeded: {0}")]
    Throttling(String),

    #[error("Limit exceeded: {0}")]
    ServiceLimitExceeded(String),

    #[error("Internal error reported from downstream service: {0}")]
    ServiceInternalError(String),

    #[error("Error occurred during operation: {0}")]
    GeneralService(String),

    #[error("Internal failure: {0}")]
    InternalFailure(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn already_exists(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    pub fn not_updatable(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotUpdatable {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// The host error code this error is reported as
    pub fn error_code(&self) -> HandlerErrorCode {
        match self {
            HandlerError::AlreadyExists { .. } => HandlerErrorCode::AlreadyExists,
            HandlerError::NotFound { .. } => HandlerErrorCode::NotFound,
            HandlerError::NotUpdatable { .. } => HandlerErrorCode::NotUpdatable,
            HandlerError::InvalidRequest(_) | HandlerError::Json(_) => {
                HandlerErrorCode::InvalidRequest
            }
            HandlerError::AccessDenied(_) => HandlerErrorCode::AccessDenied,
            HandlerError::ResourceConflict(_) => HandlerErrorCode::ResourceConflict,
            HandlerError::Throttling(_) => HandlerErrorCode::Throttling,
            HandlerError::ServiceLimitExceeded(_) => HandlerErrorCode::ServiceLimitExceeded,
            HandlerError::ServiceInternalError(_) => HandlerErrorCode::ServiceInternalError,
            HandlerError::GeneralService(_) => HandlerErrorCode::GeneralServiceException,
            HandlerError::InternalFailure(_) => HandlerErrorCode::InternalFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
