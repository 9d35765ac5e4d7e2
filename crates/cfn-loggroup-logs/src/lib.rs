//! `AWS::Logs::LogGroup` resource provider
//!
//! Implements [`cfn_loggroup_core::ResourceProvider`] for CloudWatch Logs
//! log groups.
//!
//! # Features
//!
//! - Create with an optional generated name, KMS key, tags and retention
//! - Read including tags
//! - In-place update of retention, KMS key and tags
//! - Delete
//! - Paginated list
//!
//! # Example
//!
//! ```ignore
//! use cfn_loggroup_core::{Action, ResourceHandlerRequest, handle_request};
//! use cfn_loggroup_logs::{CloudWatchLogsClient, LogGroupProvider, ResourceModel};
//! use std::sync::Arc;
//!
//! let sdk_config = aws_config::load_from_env().await;
//! let provider = LogGroupProvider::new(Arc::new(CloudWatchLogsClient::new(&sdk_config)));
//!
//! let request = ResourceHandlerRequest::new()
//!     .with_desired(ResourceModel::named("app-logs").with_retention(14));
//! let event = handle_request(&provider, Action::Create, &request, None).await;
//! ```

pub mod api;
pub mod aws;
pub mod error;
pub mod handlers;
pub mod model;

pub use api::{LogGroup, LogsApi, find_log_group};
pub use aws::CloudWatchLogsClient;
pub use error::{LogsError, Result};
pub use handlers::{LogGroupEvent, LogGroupProvider, LogGroupRequest};
pub use model::{CallbackContext, ResourceModel, Tag, TYPE_NAME};
