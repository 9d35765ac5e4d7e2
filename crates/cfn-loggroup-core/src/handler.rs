//! Resource provider trait and action dispatch

use crate::error::Result;
use crate::progress::ProgressEvent;
use crate::request::ResourceHandlerRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Operation the host asks the provider to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "CREATE"),
            Action::Read => write!(f, "READ"),
            Action::Update => write!(f, "UPDATE"),
            Action::Delete => write!(f, "DELETE"),
            Action::List => write!(f, "LIST"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(Action::Create),
            "READ" => Ok(Action::Read),
            "UPDATE" => Ok(Action::Update),
            "DELETE" => Ok(Action::Delete),
            "LIST" => Ok(Action::List),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

/// Resource provider abstraction
///
/// One implementation per resource type. Each method runs a single
/// invocation to completion; stabilization and retries belong to the host.
/// Returning `Err` fails the invocation with the error's code.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Resource model (the resource's properties)
    type Model: Send + Sync;

    /// State carried between invocations of one operation
    type Context: Send + Sync;

    /// Resource type name, e.g. `AWS::Logs::LogGroup`
    fn type_name(&self) -> &str;

    async fn create(
        &self,
        request: &ResourceHandlerRequest<Self::Model>,
        context: Option<Self::Context>,
    ) -> Result<ProgressEvent<Self::Model, Self::Context>>;

    async fn read(
        &self,
        request: &ResourceHandlerRequest<Self::Model>,
        context: Option<Self::Context>,
    ) -> Result<ProgressEvent<Self::Model, Self::Context>>;

    async fn update(
        &self,
        request: &ResourceHandlerRequest<Self::Model>,
        context: Option<Self::Context>,
    ) -> Result<ProgressEvent<Self::Model, Self::Context>>;

    async fn delete(
        &self,
        request: &ResourceHandlerRequest<Self::Model>,
        context: Option<Self::Context>,
    ) -> Result<ProgressEvent<Self::Model, Self::Context>>;

    async fn list(
        &self,
        request: &ResourceHandlerRequest<Self::Model>,
        context: Option<Self::Context>,
    ) -> Result<ProgressEvent<Self::Model, Self::Context>>;
}

/// Route `action` to the provider and fold any error into a failed event
pub async fn handle_request<P>(
    provider: &P,
    action: Action,
    request: &ResourceHandlerRequest<P::Model>,
    context: Option<P::Context>,
) -> ProgressEvent<P::Model, P::Context>
where
    P: ResourceProvider + ?Sized,
{
    let result = match action {
        Action::Create => provider.create(request, context).await,
        Action::Read => provider.read(request, context).await,
        Action::Update => provider.update(request, context).await,
        Action::Delete => provider.delete(request, context).await,
        Action::List => provider.list(request, context).await,
    };

    match result {
        Ok(event) => {
            tracing::debug!("{} {} finished with {}", provider.type_name(), action, event.status);
            event
        }
        Err(e) => {
            tracing::warn!("{} {} failed: {}", provider.type_name(), action, e);
            e.into()
        }
    }
}
