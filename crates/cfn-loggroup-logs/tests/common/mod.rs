use async_trait::async_trait;
use cfn_loggroup_logs::api::{
    CreateLogGroupRequest, DescribeLogGroupsRequest, DescribeLogGroupsResponse, LogGroup, LogsApi,
    PutRetentionPolicyRequest,
};
use cfn_loggroup_logs::{LogGroupProvider, LogsError};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

pub const ACCOUNT_ARN_PREFIX: &str = "arn:aws:logs:us-east-1:123456789012:log-group:";

/// One recorded call against the fake
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Describe(DescribeLogGroupsRequest),
    Create(CreateLogGroupRequest),
    PutRetention(PutRetentionPolicyRequest),
    DeleteRetention(String),
    AssociateKms(String, String),
    DisassociateKms(String),
    Delete(String),
    ListTags(String),
    Tag(String, BTreeMap<String, String>),
    Untag(String, Vec<String>),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::Describe(_) | Call::ListTags(_))
    }
}

#[derive(Default)]
struct State {
    groups: BTreeMap<String, LogGroup>,
    tags: BTreeMap<String, BTreeMap<String, String>>,
    calls: Vec<Call>,
    failures: HashMap<&'static str, LogsError>,
    page_size: Option<usize>,
}

/// In-memory CloudWatch Logs that records every call
#[derive(Default)]
pub struct FakeLogs {
    state: Mutex<State>,
}

#[allow(dead_code)]
impl FakeLogs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn provider(self: &Arc<Self>) -> LogGroupProvider {
        LogGroupProvider::new(self.clone())
    }

    pub fn arn_of(name: &str) -> String {
        format!("{}{}:*", ACCOUNT_ARN_PREFIX, name)
    }

    pub fn insert_group(&self, name: &str, retention_in_days: Option<i32>, kms_key_id: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        state.groups.insert(
            name.to_string(),
            LogGroup {
                log_group_name: name.to_string(),
                retention_in_days,
                kms_key_id: kms_key_id.map(str::to_string),
                arn: Some(Self::arn_of(name)),
            },
        );
    }

    pub fn insert_tags(&self, name: &str, tags: &[(&str, &str)]) {
        let mut state = self.state.lock().unwrap();
        state.tags.insert(
            name.to_string(),
            tags.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
    }

    /// Make every call of `operation` fail with `error`
    pub fn fail_on(&self, operation: &'static str, error: LogsError) {
        self.state.lock().unwrap().failures.insert(operation, error);
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state.lock().unwrap().page_size = Some(page_size);
    }

    pub fn group(&self, name: &str) -> Option<LogGroup> {
        self.state.lock().unwrap().groups.get(name).cloned()
    }

    pub fn tags_of(&self, name: &str) -> BTreeMap<String, String> {
        self.state
            .lock()
            .unwrap()
            .tags
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn record(&self, operation: &'static str, call: Call) -> cfn_loggroup_logs::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn name_for_arn(arn: &str) -> String {
        arn.trim_start_matches(ACCOUNT_ARN_PREFIX).to_string()
    }
}

#[async_trait]
impl LogsApi for FakeLogs {
    async fn describe_log_groups(
        &self,
        request: &DescribeLogGroupsRequest,
    ) -> cfn_loggroup_logs::Result<DescribeLogGroupsResponse> {
        self.record("DescribeLogGroups", Call::Describe(request.clone()))?;

        let state = self.state.lock().unwrap();
        let matching: Vec<LogGroup> = state
            .groups
            .values()
            .filter(|g| match &request.log_group_name_prefix {
                Some(prefix) => g.log_group_name.starts_with(prefix.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        let start: usize = request
            .next_token
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0);
        let page_size = state.page_size.unwrap_or(usize::MAX);
        let end = start.saturating_add(page_size).min(matching.len());

        Ok(DescribeLogGroupsResponse {
            log_groups: matching[start.min(end)..end].to_vec(),
            next_token: (end < matching.len()).then(|| end.to_string()),
        })
    }

    async fn create_log_group(&self, request: &CreateLogGroupRequest) -> cfn_loggroup_logs::Result<()> {
        self.record("CreateLogGroup", Call::Create(request.clone()))?;

        let name = &request.log_group_name;
        if self.group(name).is_some() {
            return Err(LogsError::ResourceAlreadyExists(
                "The specified log group already exists".to_string(),
            ));
        }

        self.insert_group(name, None, request.kms_key_id.as_deref());
        if let Some(tags) = &request.tags {
            self.state.lock().unwrap().tags.insert(name.clone(), tags.clone());
        }
        Ok(())
    }

    async fn put_retention_policy(
        &self,
        request: &PutRetentionPolicyRequest,
    ) -> cfn_loggroup_logs::Result<()> {
        self.record("PutRetentionPolicy", Call::PutRetention(request.clone()))?;

        let mut state = self.state.lock().unwrap();
        match state.groups.get_mut(&request.log_group_name) {
            Some(group) => {
                group.retention_in_days = Some(request.retention_in_days);
                Ok(())
            }
            None => Err(LogsError::ResourceNotFound(request.log_group_name.clone())),
        }
    }

    async fn delete_retention_policy(&self, log_group_name: &str) -> cfn_loggroup_logs::Result<()> {
        self.record("DeleteRetentionPolicy", Call::DeleteRetention(log_group_name.to_string()))?;

        let mut state = self.state.lock().unwrap();
        match state.groups.get_mut(log_group_name) {
            Some(group) => {
                group.retention_in_days = None;
                Ok(())
            }
            None => Err(LogsError::ResourceNotFound(log_group_name.to_string())),
        }
    }

    async fn associate_kms_key(&self, log_group_name: &str, kms_key_id: &str) -> cfn_loggroup_logs::Result<()> {
        self.record(
            "AssociateKmsKey",
            Call::AssociateKms(log_group_name.to_string(), kms_key_id.to_string()),
        )?;

        let mut state = self.state.lock().unwrap();
        match state.groups.get_mut(log_group_name) {
            Some(group) => {
                group.kms_key_id = Some(kms_key_id.to_string());
                Ok(())
            }
            None => Err(LogsError::ResourceNotFound(log_group_name.to_string())),
        }
    }

    async fn disassociate_kms_key(&self, log_group_name: &str) -> cfn_loggroup_logs::Result<()> {
        self.record("DisassociateKmsKey", Call::DisassociateKms(log_group_name.to_string()))?;

        let mut state = self.state.lock().unwrap();
        match state.groups.get_mut(log_group_name) {
            Some(group) => {
                group.kms_key_id = None;
                Ok(())
            }
            None => Err(LogsError::ResourceNotFound(log_group_name.to_string())),
        }
    }

    async fn delete_log_group(&self, log_group_name: &str) -> cfn_loggroup_logs::Result<()> {
        self.record("DeleteLogGroup", Call::Delete(log_group_name.to_string()))?;

        let mut state = self.state.lock().unwrap();
        state.tags.remove(log_group_name);
        match state.groups.remove(log_group_name) {
            Some(_) => Ok(()),
            None => Err(LogsError::ResourceNotFound(
                "The specified log group does not exist.".to_string(),
            )),
        }
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> cfn_loggroup_logs::Result<BTreeMap<String, String>> {
        self.record("ListTagsForResource", Call::ListTags(resource_arn.to_string()))?;
        Ok(self.tags_of(&Self::name_for_arn(resource_arn)))
    }

    async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: &BTreeMap<String, String>,
    ) -> cfn_loggroup_logs::Result<()> {
        self.record("TagResource", Call::Tag(resource_arn.to_string(), tags.clone()))?;

        let mut state = self.state.lock().unwrap();
        let current = state.tags.entry(Self::name_for_arn(resource_arn)).or_default();
        current.extend(tags.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> cfn_loggroup_logs::Result<()> {
        self.record("UntagResource", Call::Untag(resource_arn.to_string(), tag_keys.to_vec()))?;

        let mut state = self.state.lock().unwrap();
        if let Some(current) = state.tags.get_mut(&Self::name_for_arn(resource_arn)) {
            for key in tag_keys {
                current.remove(key);
            }
        }
        Ok(())
    }
}
