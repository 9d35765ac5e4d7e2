//! `AWS::Logs::LogGroup` resource model

use cfn_loggroup_core::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource type name registered with CloudFormation
pub const TYPE_NAME: &str = "AWS::Logs::LogGroup";

/// Maximum log group name length accepted by CloudWatch Logs
pub const MAX_LOG_GROUP_NAME_LENGTH: usize = 512;

/// Logical id used for generated names when the host sends none
pub const DEFAULT_LOGICAL_ID: &str = "LogGroup";

/// Retention periods CloudWatch Logs accepts, in days
pub const VALID_RETENTION_DAYS: [i32; 22] = [
    1, 3, 5, 7, 14, 30, 60, 90, 120, 150, 180, 365, 400, 545, 731, 1096, 1827, 2192, 2557, 2922,
    3288, 3653,
];

/// Log group properties as declared in a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceModel {
    /// Immutable once assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i32>,

    /// Output only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "tag_list"
    )]
    pub tags: Option<BTreeMap<String, String>>,
}

impl ResourceModel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            log_group_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_retention(mut self, days: i32) -> Self {
        self.retention_in_days = Some(days);
        self
    }

    pub fn with_kms_key(mut self, key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(key_id.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Name as a non-empty string
    pub fn name(&self) -> Option<&str> {
        self.log_group_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Reject retention values CloudWatch Logs would refuse
    pub fn validate(&self) -> Result<(), HandlerError> {
        if let Some(days) = self.retention_in_days {
            if !VALID_RETENTION_DAYS.contains(&days) {
                return Err(HandlerError::InvalidRequest(format!(
                    "RetentionInDays {} is not one of {:?}",
                    days, VALID_RETENTION_DAYS
                )));
            }
        }
        Ok(())
    }
}

/// Empty: every handler of this provider finishes in one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackContext {}

/// CloudFormation tag shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// `Tags` travel as `[{ "Key": .., "Value": .. }]` but are held as a map
mod tag_list {
    use super::Tag;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(tags: &Option<BTreeMap<String, String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match tags {
            Some(map) => map
                .iter()
                .map(|(key, value)| Tag {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect::<Vec<_>>()
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags: Option<Vec<Tag>> = Option::deserialize(deserializer)?;
        Ok(tags.map(|list| list.into_iter().map(|t| (t.key, t.value)).collect()))
    }
}
