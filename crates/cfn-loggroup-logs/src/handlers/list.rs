//! List handler: one page per invocation, tags are not listed

use super::{LogGroupEvent, LogGroupRequest, model_from_group};
use crate::api::{DescribeLogGroupsRequest, LogsApi};
use crate::model::TYPE_NAME;
use cfn_loggroup_core::Result;

pub(super) async fn handle(api: &dyn LogsApi, request: &LogGroupRequest) -> Result<LogGroupEvent> {
    let describe = DescribeLogGroupsRequest {
        log_group_name_prefix: None,
        next_token: request.next_token.clone(),
    };

    let response = api
        .describe_log_groups(&describe)
        .await
        .map_err(|e| e.into_handler_error(TYPE_NAME, "*"))?;

    let models: Vec<_> = response
        .log_groups
        .into_iter()
        .map(|group| model_from_group(group, Default::default()))
        .collect();

    tracing::debug!("Listed {} log groups", models.len());
    Ok(LogGroupEvent::list_success(models, response.next_token))
}
