//! CloudFormation resource provider protocol
//!
//! Types shared by every handler of the log group provider: the request the
//! host sends, the progress event a handler answers with, the error codes
//! the host understands, and the [`ResourceProvider`] trait a resource type
//! implements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │        CloudFormation (orchestration host)      │
//! └─────────────────┬───────────────────────────────┘
//!                   │  CREATE / READ / UPDATE / DELETE / LIST
//! ┌─────────────────▼───────────────────────────────┐
//! │                  cfn-loggroup                   │
//! │        (Lambda entry, envelope, dispatch)       │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               cfn-loggroup-core                 │
//! │  trait ResourceProvider { create, read, ... }   │
//! │  ProgressEvent / HandlerError / identifier      │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               cfn-loggroup-logs                 │
//! │      LogGroupProvider  ──►  CloudWatch Logs     │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod handler;
pub mod identifier;
pub mod progress;
pub mod request;

// Re-exports
pub use error::{HandlerError, Result};
pub use handler::{Action, ResourceProvider, handle_request};
pub use identifier::{generate_for_request, generate_resource_identifier};
pub use progress::{HandlerErrorCode, OperationStatus, ProgressEvent};
pub use request::{RESERVED_TAG_PREFIX, ResourceHandlerRequest, STACK_NAME_TAG, user_tags};
