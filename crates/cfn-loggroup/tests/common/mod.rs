use async_trait::async_trait;
use cfn_loggroup_logs::api::{
    CreateLogGroupRequest, DescribeLogGroupsRequest, DescribeLogGroupsResponse, LogGroup, LogsApi,
    PutRetentionPolicyRequest,
};
use cfn_loggroup_logs::{LogsError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Minimal in-memory CloudWatch Logs recording operation names
#[derive(Default)]
pub struct MemoryLogs {
    groups: Mutex<BTreeMap<String, LogGroup>>,
    operations: Mutex<Vec<&'static str>>,
}

#[allow(dead_code)]
impl MemoryLogs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_group(self: Arc<Self>, name: &str, retention_in_days: Option<i32>) -> Arc<Self> {
        self.insert(name, retention_in_days, None);
        self
    }

    fn insert(&self, name: &str, retention_in_days: Option<i32>, kms_key_id: Option<String>) {
        self.groups.lock().unwrap().insert(
            name.to_string(),
            LogGroup {
                log_group_name: name.to_string(),
                retention_in_days,
                kms_key_id,
                arn: Some(format!("arn:aws:logs:us-east-1:123456789012:log-group:{}:*", name)),
            },
        );
    }

    pub fn group(&self, name: &str) -> Option<LogGroup> {
        self.groups.lock().unwrap().get(name).cloned()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) {
        self.operations.lock().unwrap().push(operation);
    }

    fn update<F: FnOnce(&mut LogGroup)>(&self, name: &str, f: F) -> Result<()> {
        match self.groups.lock().unwrap().get_mut(name) {
            Some(group) => {
                f(group);
                Ok(())
            }
            None => Err(LogsError::ResourceNotFound(name.to_string())),
        }
    }
}

#[async_trait]
impl LogsApi for MemoryLogs {
    async fn describe_log_groups(&self, request: &DescribeLogGroupsRequest) -> Result<DescribeLogGroupsResponse> {
        self.record("DescribeLogGroups");
        let prefix = request.log_group_name_prefix.clone().unwrap_or_default();
        let log_groups = self
            .groups
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.log_group_name.starts_with(&prefix))
            .cloned()
            .collect();
        Ok(DescribeLogGroupsResponse {
            log_groups,
            next_token: None,
        })
    }

    async fn create_log_group(&self, request: &CreateLogGroupRequest) -> Result<()> {
        self.record("CreateLogGroup");
        if self.group(&request.log_group_name).is_some() {
            return Err(LogsError::ResourceAlreadyExists(request.log_group_name.clone()));
        }
        self.insert(&request.log_group_name, None, request.kms_key_id.clone());
        Ok(())
    }

    async fn put_retention_policy(&self, request: &PutRetentionPolicyRequest) -> Result<()> {
        self.record("PutRetentionPolicy");
        let days = request.retention_in_days;
        self.update(&request.log_group_name, |g| g.retention_in_days = Some(days))
    }

    async fn delete_retention_policy(&self, log_group_name: &str) -> Result<()> {
        self.record("DeleteRetentionPolicy");
        self.update(log_group_name, |g| g.retention_in_days = None)
    }

    async fn associate_kms_key(&self, log_group_name: &str, kms_key_id: &str) -> Result<()> {
        self.record("AssociateKmsKey");
        let key = kms_key_id.to_string();
        self.update(log_group_name, |g| g.kms_key_id = Some(key))
    }

    async fn disassociate_kms_key(&self, log_group_name: &str) -> Result<()> {
        self.record("DisassociateKmsKey");
        self.update(log_group_name, |g| g.kms_key_id = None)
    }

    async fn delete_log_group(&self, log_group_name: &str) -> Result<()> {
        self.record("DeleteLogGroup");
        self.groups
            .lock()
            .unwrap()
            .remove(log_group_name)
            .map(|_| ())
            .ok_or_else(|| LogsError::ResourceNotFound(log_group_name.to_string()))
    }

    async fn list_tags_for_resource(&self, _resource_arn: &str) -> Result<BTreeMap<String, String>> {
        self.record("ListTagsForResource");
        Ok(BTreeMap::new())
    }

    async fn tag_resource(&self, _resource_arn: &str, _tags: &BTreeMap<String, String>) -> Result<()> {
        self.record("TagResource");
        Ok(())
    }

    async fn untag_resource(&self, _resource_arn: &str, _tag_keys: &[String]) -> Result<()> {
        self.record("UntagResource");
        Ok(())
    }
}
