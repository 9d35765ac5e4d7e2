//! Create handler
//!
//! 1. Generate a name if the template gave none.
//! 2. Fail with `AlreadyExists` if a group of that exact name exists.
//! 3. `CreateLogGroup` with name, KMS key and tags.
//! 4. `PutRetentionPolicy` when retention is set (not settable at create).
//! 5. Read the group back for its ARN.
//!
//! A failure at step 4 leaves the group created without retention.

use super::{LogGroupEvent, LogGroupRequest, merged_tags, remote_error};
use crate::api::{CreateLogGroupRequest, LogsApi, PutRetentionPolicyRequest, find_log_group};
use crate::model::{DEFAULT_LOGICAL_ID, MAX_LOG_GROUP_NAME_LENGTH, TYPE_NAME};
use cfn_loggroup_core::{HandlerError, Result, generate_for_request};

pub(super) async fn handle(api: &dyn LogsApi, request: &LogGroupRequest) -> Result<LogGroupEvent> {
    let mut model = request.desired_resource_state.clone().unwrap_or_default();
    model.validate()?;

    let name = match model.name() {
        Some(name) => name.to_string(),
        None => {
            let name = generate_for_request(request, DEFAULT_LOGICAL_ID, MAX_LOG_GROUP_NAME_LENGTH);
            tracing::info!("No LogGroupName given, generated {}", name);
            name
        }
    };
    model.log_group_name = Some(name.clone());

    if find_log_group(api, &name)
        .await
        .map_err(remote_error(&name))?
        .is_some()
    {
        return Err(HandlerError::already_exists(TYPE_NAME, &name));
    }

    let tags = merged_tags(&request.desired_resource_tags, request.desired_resource_state.as_ref());
    let create = CreateLogGroupRequest {
        log_group_name: name.clone(),
        kms_key_id: model.kms_key_id.clone(),
        tags: (!tags.is_empty()).then_some(tags),
    };

    tracing::info!("Creating log group {}", name);
    api.create_log_group(&create)
        .await
        .map_err(remote_error(&name))?;

    if let Some(retention_in_days) = model.retention_in_days {
        tracing::info!("Setting retention of {} to {} days", name, retention_in_days);
        api.put_retention_policy(&PutRetentionPolicyRequest {
            log_group_name: name.clone(),
            retention_in_days,
        })
        .await
        .map_err(remote_error(&name))?;
    }

    match find_log_group(api, &name).await {
        Ok(Some(group)) => model.arn = group.arn,
        Ok(None) => tracing::warn!("Log group {} not visible yet, returning without Arn", name),
        Err(e) => tracing::warn!("Could not read back log group {}: {}", name, e),
    }

    Ok(LogGroupEvent::success(model))
}
