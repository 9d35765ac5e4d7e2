//! Remote logging service seam
//!
//! [`LogsApi`] is the set of CloudWatch Logs operations the handlers use.
//! The AWS SDK implementation lives in [`crate::aws`]; tests substitute a
//! recording fake.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// CloudWatch Logs operations used by the log group handlers
#[async_trait]
pub trait LogsApi: Send + Sync {
    /// One page of log groups whose name starts with `prefix`
    async fn describe_log_groups(
        &self,
        request: &DescribeLogGroupsRequest,
    ) -> Result<DescribeLogGroupsResponse>;

    async fn create_log_group(&self, request: &CreateLogGroupRequest) -> Result<()>;

    async fn put_retention_policy(&self, request: &PutRetentionPolicyRequest) -> Result<()>;

    async fn delete_retention_policy(&self, log_group_name: &str) -> Result<()>;

    async fn associate_kms_key(&self, log_group_name: &str, kms_key_id: &str) -> Result<()>;

    async fn disassociate_kms_key(&self, log_group_name: &str) -> Result<()>;

    async fn delete_log_group(&self, log_group_name: &str) -> Result<()>;

    /// Tags of the resource at `resource_arn` (no trailing `:*`)
    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<BTreeMap<String, String>>;

    async fn tag_resource(&self, resource_arn: &str, tags: &BTreeMap<String, String>) -> Result<()>;

    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLogGroupsRequest {
    pub log_group_name_prefix: Option<String>,
    pub next_token: Option<String>,
}

impl DescribeLogGroupsRequest {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            log_group_name_prefix: Some(prefix.into()),
            next_token: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLogGroupsResponse {
    pub log_groups: Vec<LogGroup>,
    pub next_token: Option<String>,
}

/// A log group as the service reports it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogGroup {
    pub log_group_name: String,
    pub retention_in_days: Option<i32>,
    pub kms_key_id: Option<String>,
    /// Ends in `:*`
    pub arn: Option<String>,
}

impl LogGroup {
    /// ARN usable with the tagging APIs
    pub fn resource_arn(&self) -> Option<&str> {
        self.arn.as_deref().map(|arn| arn.trim_end_matches(":*"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLogGroupRequest {
    pub log_group_name: String,
    pub kms_key_id: Option<String>,
    /// `None` when there is nothing to attach
    pub tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRetentionPolicyRequest {
    pub log_group_name: String,
    pub retention_in_days: i32,
}

/// Find the log group named exactly `name`.
///
/// Describe filters by prefix, so `app` would also return `app-worker`;
/// only an exact match counts. Pages are followed until one is found.
pub async fn find_log_group<A>(api: &A, name: &str) -> Result<Option<LogGroup>>
where
    A: LogsApi + ?Sized,
{
    let mut request = DescribeLogGroupsRequest::with_prefix(name);
    loop {
        let response = api.describe_log_groups(&request).await?;
        if let Some(group) = response
            .log_groups
            .into_iter()
            .find(|g| g.log_group_name == name)
        {
            return Ok(Some(group));
        }

        match response.next_token {
            Some(token) => request.next_token = Some(token),
            None => return Ok(None),
        }
    }
}
