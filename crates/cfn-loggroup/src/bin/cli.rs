use anyhow::Context;
use cfn_loggroup::{HandlerConfig, HandlerRequest, init_logging, logs_client, process};
use cfn_loggroup_core::{ResourceHandlerRequest, STACK_NAME_TAG, generate_for_request};
use cfn_loggroup_logs::LogGroupProvider;
use cfn_loggroup_logs::model::{DEFAULT_LOGICAL_ID, MAX_LOG_GROUP_NAME_LENGTH, ResourceModel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cfn-loggroup")]
#[command(about = "AWS::Logs::LogGroup resource provider, run locally", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a host request envelope against CloudWatch Logs
    Invoke {
        /// JSON file holding the request envelope
        #[arg(short, long)]
        event: PathBuf,
        /// Override the envelope's region
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Print the log group name a create would generate
    Name {
        /// Logical resource id in the template
        #[arg(short, long, default_value = DEFAULT_LOGICAL_ID)]
        logical_id: String,
        /// Stack name
        #[arg(short, long)]
        stack: Option<String>,
        /// Client request token (random when omitted)
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke { event, region } => {
            let config = HandlerConfig::from_env()?;
            init_logging(&config);

            let raw = std::fs::read_to_string(&event)
                .with_context(|| format!("failed to read {}", event.display()))?;
            let payload: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", event.display()))?;
            let request = HandlerRequest::from_value(payload)?;

            let client = logs_client(&config, region.as_deref().or(request.region.as_deref())).await;
            let provider = LogGroupProvider::new(Arc::new(client));
            let progress = process(&provider, &request).await;

            println!("{}", serde_json::to_string_pretty(&progress)?);
            if progress.is_failed() {
                std::process::exit(1);
            }
        }
        Commands::Name {
            logical_id,
            stack,
            token,
        } => {
            let mut request = ResourceHandlerRequest::<ResourceModel>::new().with_logical_id(logical_id);
            if let Some(stack) = stack {
                request = request.with_system_tag(STACK_NAME_TAG, stack);
            }
            if let Some(token) = token {
                request = request.with_client_request_token(token);
            }

            println!(
                "{}",
                generate_for_request(&request, DEFAULT_LOGICAL_ID, MAX_LOG_GROUP_NAME_LENGTH)
            );
        }
    }

    Ok(())
}
