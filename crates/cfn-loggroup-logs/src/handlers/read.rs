//! Read handler

use super::{LogGroupEvent, LogGroupRequest, model_from_group, remote_error};
use crate::api::{LogsApi, find_log_group};
use crate::model::{ResourceModel, TYPE_NAME};
use cfn_loggroup_core::{HandlerError, Result};

pub(super) async fn handle(api: &dyn LogsApi, request: &LogGroupRequest) -> Result<LogGroupEvent> {
    let name = request
        .desired_resource_state
        .as_ref()
        .and_then(ResourceModel::name)
        .ok_or_else(|| HandlerError::not_found(TYPE_NAME, "(no LogGroupName)"))?;

    let model = read_model(api, name).await?;
    Ok(LogGroupEvent::success(model))
}

/// Current remote state of `name` including tags, or `NotFound`
async fn read_model(api: &dyn LogsApi, name: &str) -> Result<ResourceModel> {
    let group = find_log_group(api, name)
        .await
        .map_err(remote_error(name))?
        .ok_or_else(|| HandlerError::not_found(TYPE_NAME, name))?;

    let tags = match group.resource_arn() {
        Some(arn) => api
            .list_tags_for_resource(arn)
            .await
            .map_err(remote_error(name))?,
        None => Default::default(),
    };

    tracing::debug!("Read log group {} ({} tags)", name, tags.len());
    Ok(model_from_group(group, tags))
}
