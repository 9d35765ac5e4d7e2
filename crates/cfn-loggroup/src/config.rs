//! Process configuration read from the Lambda environment

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `LOG_LEVEL` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log filter in {var}: {reason}")]
    InvalidLogFilter { var: &'static str, reason: String },

    #[error("invalid LOGS_ENDPOINT_URL (must be http:// or https://): {0}")]
    InvalidEndpoint(String),
}

/// Configuration for the handler process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// CloudWatch Logs endpoint override (e.g. LocalStack)
    pub logs_endpoint_url: Option<String>,

    /// Used when the request envelope carries no region
    pub default_region: Option<String>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            logs_endpoint_url: None,
            default_region: None,
        }
    }
}

impl HandlerConfig {
    /// Create HandlerConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let (var, log_filter) = match non_empty_var("LOG_LEVEL") {
            Some(filter) => ("LOG_LEVEL", filter),
            None => match non_empty_var("RUST_LOG") {
                Some(filter) => ("RUST_LOG", filter),
                None => ("LOG_LEVEL", DEFAULT_LOG_FILTER.to_string()),
            },
        };
        EnvFilter::try_new(&log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            var,
            reason: e.to_string(),
        })?;

        let logs_endpoint_url = non_empty_var("LOGS_ENDPOINT_URL");
        if let Some(url) = &logs_endpoint_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEndpoint(url.clone()));
        }

        Ok(Self {
            log_filter,
            logs_endpoint_url,
            default_region: non_empty_var("AWS_REGION"),
        })
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
