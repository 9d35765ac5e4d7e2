//! Host request envelope
//!
//! The host invokes the function with a JSON envelope carrying the action,
//! the caller's credentials context and the resource properties. This module
//! deserializes it and turns it into a [`LogGroupRequest`] for the handlers.

use cfn_loggroup_core::{Action, HandlerError, Result};
use cfn_loggroup_logs::{CallbackContext, LogGroupRequest, ResourceModel, TYPE_NAME};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Request envelope as sent by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerRequest {
    pub aws_account_id: Option<String>,

    /// Stable across host retries; used as the client request token
    pub bearer_token: Option<String>,

    pub region: Option<String>,

    /// `CREATE`, `READ`, `UPDATE`, `DELETE` or `LIST`
    pub action: String,

    pub resource_type: Option<String>,
    pub resource_type_version: Option<String>,
    pub stack_id: Option<String>,
    pub next_token: Option<String>,
    pub callback_context: Option<Value>,

    #[serde(default)]
    pub request_data: RequestData,

    #[serde(default)]
    pub request_context: RequestContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    pub logical_resource_id: Option<String>,
    pub resource_properties: Option<Value>,
    pub previous_resource_properties: Option<Value>,
    pub system_tags: Option<BTreeMap<String, String>>,
    pub stack_tags: Option<BTreeMap<String, String>>,
    pub previous_stack_tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// How many times the host has invoked this operation so far
    #[serde(default)]
    pub invocation: u32,
}

impl HandlerRequest {
    /// Parse the raw invocation payload
    pub fn from_value(payload: Value) -> Result<Self> {
        serde_json::from_value(payload)
            .map_err(|e| HandlerError::InvalidRequest(format!("malformed request envelope: {}", e)))
    }

    pub fn parsed_action(&self) -> Result<Action> {
        self.action.parse().map_err(HandlerError::InvalidRequest)
    }

    /// Callback context from a previous invocation, if any
    pub fn parsed_callback_context(&self) -> Result<Option<CallbackContext>> {
        match &self.callback_context {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| HandlerError::InvalidRequest(format!("invalid callback context: {}", e))),
        }
    }

    /// Build the handler request.
    ///
    /// Fails with `InvalidRequest` when the envelope targets another resource
    /// type or a resource model does not deserialize.
    pub fn to_resource_request(&self) -> Result<LogGroupRequest> {
        if let Some(resource_type) = self.resource_type.as_deref()
            && resource_type != TYPE_NAME
        {
            return Err(HandlerError::InvalidRequest(format!(
                "unsupported resource type {} (expected {})",
                resource_type, TYPE_NAME
            )));
        }

        let data = &self.request_data;
        Ok(LogGroupRequest {
            desired_resource_state: parse_model(data.resource_properties.as_ref(), "resourceProperties")?,
            previous_resource_state: parse_model(
                data.previous_resource_properties.as_ref(),
                "previousResourceProperties",
            )?,
            desired_resource_tags: data.stack_tags.clone().unwrap_or_default(),
            previous_resource_tags: data.previous_stack_tags.clone().unwrap_or_default(),
            system_tags: data.system_tags.clone().unwrap_or_default(),
            stack_id: self.stack_id.clone(),
            logical_resource_identifier: data.logical_resource_id.clone(),
            client_request_token: self.bearer_token.clone(),
            next_token: self.next_token.clone(),
            region: self.region.clone(),
            aws_account_id: self.aws_account_id.clone(),
        })
    }
}

fn parse_model(value: Option<&Value>, field: &str) -> Result<Option<ResourceModel>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| HandlerError::InvalidRequest(format!("invalid {}: {}", field, e))),
    }
}
