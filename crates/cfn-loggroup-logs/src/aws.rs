//! CloudWatch Logs client backed by the AWS SDK

use crate::api::{
    CreateLogGroupRequest, DescribeLogGroupsRequest, DescribeLogGroupsResponse, LogGroup, LogsApi,
    PutRetentionPolicyRequest,
};
use crate::error::{LogsError, Result};
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::collections::{BTreeMap, HashMap};

/// [`LogsApi`] over `aws-sdk-cloudwatchlogs`
#[derive(Clone)]
pub struct CloudWatchLogsClient {
    client: Client,
}

impl CloudWatchLogsClient {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Client talking to a non-default endpoint (LocalStack etc.)
    pub fn with_endpoint(sdk_config: &aws_config::SdkConfig, endpoint_url: &str) -> Self {
        let config = aws_sdk_cloudwatchlogs::config::Builder::from(sdk_config)
            .endpoint_url(endpoint_url)
            .build();
        Self {
            client: Client::from_conf(config),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Classify an SDK error by the service's error code
fn classify<E, R>(err: SdkError<E, R>) -> LogsError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(err).to_string(),
    };
    LogsError::from_code(code.as_deref(), message)
}

fn to_hash_map(tags: &BTreeMap<String, String>) -> HashMap<String, String> {
    tags.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

#[async_trait]
impl LogsApi for CloudWatchLogsClient {
    async fn describe_log_groups(
        &self,
        request: &DescribeLogGroupsRequest,
    ) -> Result<DescribeLogGroupsResponse> {
        tracing::debug!(
            "DescribeLogGroups prefix={:?} next_token={:?}",
            request.log_group_name_prefix,
            request.next_token
        );

        let output = self
            .client
            .describe_log_groups()
            .set_log_group_name_prefix(request.log_group_name_prefix.clone())
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(classify)?;

        let log_groups = output
            .log_groups()
            .iter()
            .map(|g| LogGroup {
                log_group_name: g.log_group_name().unwrap_or_default().to_string(),
                retention_in_days: g.retention_in_days(),
                kms_key_id: g.kms_key_id().map(str::to_string),
                arn: g.arn().map(str::to_string),
            })
            .collect();

        Ok(DescribeLogGroupsResponse {
            log_groups,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn create_log_group(&self, request: &CreateLogGroupRequest) -> Result<()> {
        self.client
            .create_log_group()
            .log_group_name(&request.log_group_name)
            .set_kms_key_id(request.kms_key_id.clone())
            .set_tags(request.tags.as_ref().map(to_hash_map))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn put_retention_policy(&self, request: &PutRetentionPolicyRequest) -> Result<()> {
        self.client
            .put_retention_policy()
            .log_group_name(&request.log_group_name)
            .retention_in_days(request.retention_in_days)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn delete_retention_policy(&self, log_group_name: &str) -> Result<()> {
        self.client
            .delete_retention_policy()
            .log_group_name(log_group_name)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn associate_kms_key(&self, log_group_name: &str, kms_key_id: &str) -> Result<()> {
        self.client
            .associate_kms_key()
            .log_group_name(log_group_name)
            .kms_key_id(kms_key_id)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn disassociate_kms_key(&self, log_group_name: &str) -> Result<()> {
        self.client
            .disassociate_kms_key()
            .log_group_name(log_group_name)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn delete_log_group(&self, log_group_name: &str) -> Result<()> {
        self.client
            .delete_log_group()
            .log_group_name(log_group_name)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<BTreeMap<String, String>> {
        let output = self
            .client
            .list_tags_for_resource()
            .resource_arn(resource_arn)
            .send()
            .await
            .map_err(classify)?;

        Ok(output
            .tags()
            .map(|tags| tags.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    async fn tag_resource(&self, resource_arn: &str, tags: &BTreeMap<String, String>) -> Result<()> {
        self.client
            .tag_resource()
            .resource_arn(resource_arn)
            .set_tags(Some(to_hash_map(tags)))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<()> {
        self.client
            .untag_resource()
            .resource_arn(resource_arn)
            .set_tag_keys(Some(tag_keys.to_vec()))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }
}
