//! Lambda entry point for the `AWS::Logs::LogGroup` resource provider
//!
//! ```text
//!  host envelope (JSON)
//!        │
//!        ▼
//!  wire::HandlerRequest ──► LogGroupRequest ──► handle_request ──► LogGroupProvider
//!                                                     │                  │
//!                                                     ▼                  ▼
//!                                              ProgressEvent     CloudWatch Logs
//! ```

pub mod config;
pub mod wire;

pub use config::{ConfigError, HandlerConfig};
pub use wire::HandlerRequest;

use aws_config::{BehaviorVersion, Region};
use cfn_loggroup_core::{HandlerError, handle_request};
use cfn_loggroup_logs::{CloudWatchLogsClient, LogGroupEvent, LogGroupProvider, LogsApi};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use std::sync::Arc;

/// Install the global tracing subscriber.
///
/// ANSI colors are off: Lambda output ends up in CloudWatch Logs.
pub fn init_logging(config: &HandlerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_ansi(false)
        .init();
}

/// Run one parsed envelope against `provider`
pub async fn process(provider: &LogGroupProvider, request: &HandlerRequest) -> LogGroupEvent {
    let prepared = request.parsed_action().and_then(|action| {
        Ok((
            action,
            request.to_resource_request()?,
            request.parsed_callback_context()?,
        ))
    });

    match prepared {
        Ok((action, resource_request, context)) => {
            tracing::info!(
                "{} {} (invocation {})",
                action,
                request.resource_type.as_deref().unwrap_or(cfn_loggroup_logs::TYPE_NAME),
                request.request_context.invocation
            );
            handle_request(provider, action, &resource_request, context).await
        }
        Err(e) => rejected(e),
    }
}

/// Parse a raw payload and run it against the given remote service
pub async fn handle_payload(api: Arc<dyn LogsApi>, payload: Value) -> LogGroupEvent {
    match HandlerRequest::from_value(payload) {
        Ok(request) => process(&LogGroupProvider::new(api), &request).await,
        Err(e) => rejected(e),
    }
}

/// Parse a raw payload and run it against CloudWatch Logs in the request's region
pub async fn handle_event(config: &HandlerConfig, payload: Value) -> LogGroupEvent {
    let request = match HandlerRequest::from_value(payload) {
        Ok(request) => request,
        Err(e) => return rejected(e),
    };

    let client = logs_client(config, request.region.as_deref()).await;
    process(&LogGroupProvider::new(Arc::new(client)), &request).await
}

/// CloudWatch Logs client for `region`, falling back to the configured default
pub async fn logs_client(config: &HandlerConfig, region: Option<&str>) -> CloudWatchLogsClient {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region.or(config.default_region.as_deref()) {
        loader = loader.region(Region::new(region.to_string()));
    }
    let sdk_config = loader.load().await;

    match config.logs_endpoint_url.as_deref() {
        Some(url) => {
            tracing::debug!("Using CloudWatch Logs endpoint {}", url);
            CloudWatchLogsClient::with_endpoint(&sdk_config, url)
        }
        None => CloudWatchLogsClient::new(&sdk_config),
    }
}

fn rejected(err: HandlerError) -> LogGroupEvent {
    tracing::warn!("Rejected request: {}", err);
    err.into()
}

/// Lambda runtime entry point
pub async fn run() -> Result<(), Error> {
    let config = HandlerConfig::from_env()?;
    init_logging(&config);
    tracing::info!("cfn-loggroup {} starting", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let config = Arc::clone(&config);
        async move {
            let (payload, _context) = event.into_parts();
            Ok::<_, Error>(handle_event(&config, payload).await)
        }
    }))
    .await
}
