//! Handler request passed to every resource handler

use std::collections::BTreeMap;

/// System tag the host sets to the owning stack's name
pub const STACK_NAME_TAG: &str = "aws:cloudformation:stack-name";

/// Tag keys with this prefix are reserved by AWS and never sent to services
pub const RESERVED_TAG_PREFIX: &str = "aws:";

/// Request for a single handler invocation
///
/// Built by the entry point from the host envelope. `M` is the resource
/// model type of the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: Option<M>,
    pub previous_resource_state: Option<M>,

    /// Stack tags merged with the model's own tags
    pub desired_resource_tags: BTreeMap<String, String>,
    pub previous_resource_tags: BTreeMap<String, String>,

    /// Tags the host attaches on its own (`aws:cloudformation:*`)
    pub system_tags: BTreeMap<String, String>,

    pub stack_id: Option<String>,
    pub logical_resource_identifier: Option<String>,

    /// Stable across host retries of the same operation
    pub client_request_token: Option<String>,

    /// Pagination token (list only)
    pub next_token: Option<String>,

    pub region: Option<String>,
    pub aws_account_id: Option<String>,
}

impl<M> Default for ResourceHandlerRequest<M> {
    fn default() -> Self {
        Self {
            desired_resource_state: None,
            previous_resource_state: None,
            desired_resource_tags: BTreeMap::new(),
            previous_resource_tags: BTreeMap::new(),
            system_tags: BTreeMap::new(),
            stack_id: None,
            logical_resource_identifier: None,
            client_request_token: None,
            next_token: None,
            region: None,
            aws_account_id: None,
        }
    }
}

impl<M> ResourceHandlerRequest<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_desired(mut self, model: M) -> Self {
        self.desired_resource_state = Some(model);
        self
    }

    pub fn with_previous(mut self, model: M) -> Self {
        self.previous_resource_state = Some(model);
        self
    }

    pub fn with_desired_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.desired_resource_tags.insert(key.into(), value.into());
        self
    }

    pub fn with_previous_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.previous_resource_tags.insert(key.into(), value.into());
        self
    }

    pub fn with_system_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.system_tags.insert(key.into(), value.into());
        self
    }

    pub fn with_logical_id(mut self, logical_id: impl Into<String>) -> Self {
        self.logical_resource_identifier = Some(logical_id.into());
        self
    }

    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Name of the owning stack, if the host sent it as a system tag
    pub fn stack_name(&self) -> Option<&str> {
        self.system_tags
            .get(STACK_NAME_TAG)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Drop reserved `aws:` keys from a tag map
pub fn user_tags(tags: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    tags.iter()
        .filter(|(k, _)| !k.starts_with(RESERVED_TAG_PREFIX))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
