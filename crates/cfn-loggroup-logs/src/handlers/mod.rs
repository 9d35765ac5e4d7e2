//! `AWS::Logs::LogGroup` handlers
//!
//! Each handler finishes within one invocation: remote calls are issued in
//! sequence and the first error ends the invocation. Nothing is retried or
//! rolled back here; that is left to the host.

mod create;
mod delete;
mod list;
mod read;
mod update;

use crate::api::{LogGroup, LogsApi};
use crate::error::LogsError;
use crate::model::{CallbackContext, ResourceModel, TYPE_NAME};
use async_trait::async_trait;
use cfn_loggroup_core::{HandlerError, ProgressEvent, ResourceHandlerRequest, ResourceProvider, user_tags};
use std::collections::BTreeMap;
use std::sync::Arc;

pub use update::diff_tags;

pub type LogGroupRequest = ResourceHandlerRequest<ResourceModel>;
pub type LogGroupEvent = ProgressEvent<ResourceModel, CallbackContext>;

/// Resource provider for `AWS::Logs::LogGroup`
#[derive(Clone)]
pub struct LogGroupProvider {
    api: Arc<dyn LogsApi>,
}

impl LogGroupProvider {
    pub fn new(api: Arc<dyn LogsApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceProvider for LogGroupProvider {
    type Model = ResourceModel;
    type Context = CallbackContext;

    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    async fn create(
        &self,
        request: &LogGroupRequest,
        _context: Option<CallbackContext>,
    ) -> cfn_loggroup_core::Result<LogGroupEvent> {
        create::handle(self.api.as_ref(), request).await
    }

    async fn read(
        &self,
        request: &LogGroupRequest,
        _context: Option<CallbackContext>,
    ) -> cfn_loggroup_core::Result<LogGroupEvent> {
        read::handle(self.api.as_ref(), request).await
    }

    async fn update(
        &self,
        request: &LogGroupRequest,
        _context: Option<CallbackContext>,
    ) -> cfn_loggroup_core::Result<LogGroupEvent> {
        update::handle(self.api.as_ref(), request).await
    }

    async fn delete(
        &self,
        request: &LogGroupRequest,
        _context: Option<CallbackContext>,
    ) -> cfn_loggroup_core::Result<LogGroupEvent> {
        delete::handle(self.api.as_ref(), request).await
    }

    async fn list(
        &self,
        request: &LogGroupRequest,
        _context: Option<CallbackContext>,
    ) -> cfn_loggroup_core::Result<LogGroupEvent> {
        list::handle(self.api.as_ref(), request).await
    }
}

/// `map_err` adapter naming the log group in the handler error
fn remote_error(name: &str) -> impl FnOnce(LogsError) -> HandlerError + '_ {
    move |e| e.into_handler_error(TYPE_NAME, name)
}

/// Request tags merged with the model's own tags, reserved keys removed.
/// Model entries win on key collision.
fn merged_tags(
    request_tags: &BTreeMap<String, String>,
    model: Option<&ResourceModel>,
) -> BTreeMap<String, String> {
    let mut tags = request_tags.clone();
    if let Some(model_tags) = model.and_then(|m| m.tags.as_ref()) {
        tags.extend(model_tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    user_tags(&tags)
}

fn model_from_group(group: LogGroup, tags: BTreeMap<String, String>) -> ResourceModel {
    ResourceModel {
        log_group_name: Some(group.log_group_name),
        kms_key_id: group.kms_key_id,
        retention_in_days: group.retention_in_days,
        arn: group.arn,
        tags: (!tags.is_empty()).then_some(tags),
    }
}
