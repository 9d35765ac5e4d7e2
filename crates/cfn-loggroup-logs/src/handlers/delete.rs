//! Delete handler

use super::{LogGroupEvent, LogGroupRequest, remote_error};
use crate::api::LogsApi;
use crate::model::{ResourceModel, TYPE_NAME};
use cfn_loggroup_core::{HandlerError, Result};

pub(super) async fn handle(api: &dyn LogsApi, request: &LogGroupRequest) -> Result<LogGroupEvent> {
    let name = request
        .desired_resource_state
        .as_ref()
        .and_then(ResourceModel::name)
        .ok_or_else(|| HandlerError::not_found(TYPE_NAME, "(no LogGroupName)"))?;

    tracing::info!("Deleting log group {}", name);
    api.delete_log_group(name)
        .await
        .map_err(remote_error(name))?;

    Ok(LogGroupEvent::success_empty())
}
