//! Update handler
//!
//! Only retention, KMS key and tags can change in place. The name is
//! create-only: a different name means the host should have replaced the
//! resource, so it is rejected as `NotUpdatable`.

use super::{LogGroupEvent, LogGroupRequest, merged_tags, remote_error};
use crate::api::{LogsApi, PutRetentionPolicyRequest, find_log_group};
use crate::model::{ResourceModel, TYPE_NAME};
use cfn_loggroup_core::{HandlerError, Result};
use std::collections::BTreeMap;

pub(super) async fn handle(api: &dyn LogsApi, request: &LogGroupRequest) -> Result<LogGroupEvent> {
    let mut desired = request.desired_resource_state.clone().unwrap_or_default();
    desired.validate()?;

    let previous_name = request
        .previous_resource_state
        .as_ref()
        .and_then(ResourceModel::name);

    let name = match (desired.name(), previous_name) {
        (Some(desired_name), Some(previous_name)) if desired_name != previous_name => {
            return Err(HandlerError::not_updatable(TYPE_NAME, previous_name));
        }
        (Some(name), _) | (None, Some(name)) => name.to_string(),
        (None, None) => return Err(HandlerError::not_found(TYPE_NAME, "(no LogGroupName)")),
    };
    desired.log_group_name = Some(name.clone());

    let current = find_log_group(api, &name)
        .await
        .map_err(remote_error(&name))?
        .ok_or_else(|| HandlerError::not_found(TYPE_NAME, &name))?;

    if desired.retention_in_days != current.retention_in_days {
        match desired.retention_in_days {
            Some(retention_in_days) => {
                tracing::info!("Setting retention of {} to {} days", name, retention_in_days);
                api.put_retention_policy(&PutRetentionPolicyRequest {
                    log_group_name: name.clone(),
                    retention_in_days,
                })
                .await
                .map_err(remote_error(&name))?;
            }
            None => {
                tracing::info!("Removing retention policy of {}", name);
                api.delete_retention_policy(&name)
                    .await
                    .map_err(remote_error(&name))?;
            }
        }
    }

    if desired.kms_key_id != current.kms_key_id {
        match desired.kms_key_id.as_deref() {
            Some(kms_key_id) => {
                tracing::info!("Associating KMS key with {}", name);
                api.associate_kms_key(&name, kms_key_id)
                    .await
                    .map_err(remote_error(&name))?;
            }
            None => {
                tracing::info!("Disassociating KMS key from {}", name);
                api.disassociate_kms_key(&name)
                    .await
                    .map_err(remote_error(&name))?;
            }
        }
    }

    let previous_tags = merged_tags(
        &request.previous_resource_tags,
        request.previous_resource_state.as_ref(),
    );
    let desired_tags = merged_tags(
        &request.desired_resource_tags,
        request.desired_resource_state.as_ref(),
    );
    let (to_add, to_remove) = diff_tags(&previous_tags, &desired_tags);

    if !to_add.is_empty() || !to_remove.is_empty() {
        let arn = current
            .resource_arn()
            .ok_or_else(|| HandlerError::InternalFailure(format!("log group {} has no ARN", name)))?;

        if !to_remove.is_empty() {
            tracing::info!("Removing tags {:?} from {}", to_remove, name);
            api.untag_resource(arn, &to_remove)
                .await
                .map_err(remote_error(&name))?;
        }
        if !to_add.is_empty() {
            tracing::info!("Applying {} tags to {}", to_add.len(), name);
            api.tag_resource(arn, &to_add)
                .await
                .map_err(remote_error(&name))?;
        }
    }

    desired.arn = current.arn;
    Ok(LogGroupEvent::success(desired))
}

/// Tags to apply and tag keys to remove to go from `previous` to `desired`
pub fn diff_tags(
    previous: &BTreeMap<String, String>,
    desired: &BTreeMap<String, String>,
) -> (BTreeMap<String, String>, Vec<String>) {
    let to_add = desired
        .iter()
        .filter(|(k, v)| previous.get(*k) != Some(*v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let to_remove = previous
        .keys()
        .filter(|k| !desired.contains_key(*k))
        .cloned()
        .collect();

    (to_add, to_remove)
}
