use std::sync::Arc;

use nextplay_agent::{
    boundary::{self, InboundRequest},
    openai::OpenAiCompletionClient,
    runtime::AgentRuntime,
};
use nextplay_core::{
    config::{AppConfig, LoadOptions, LogFormat},
    ApplicationError,
};

use crate::commands::CommandResult;

const COMMAND: &str = "ask";

pub fn run(
    message: String,
    channel: Option<String>,
    customer_name: Option<String>,
) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(COMMAND, "config_validation", error.to_string(), 2)
        }
    };
    init_logging(&config);

    let client = match OpenAiCompletionClient::from_config(&config.llm) {
        Ok(client) => client,
        Err(error) => {
            return CommandResult::failure(COMMAND, "completion_client", error.to_string(), 6)
        }
    };
    let runtime = AgentRuntime::new(Arc::new(client));

    let executor = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(executor) => executor,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "async_runtime",
                format!("failed to initialize async runtime: {error}"),
                6,
            )
        }
    };

    let request = InboundRequest { message: Some(message), channel, customer_name };
    match executor.block_on(boundary::respond(&runtime, request, "cli")) {
        Ok(envelope) => match serde_json::to_string_pretty(&envelope) {
            Ok(output) => CommandResult { exit_code: 0, output },
            Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 6),
        },
        Err(error) => {
            let (error_class, exit_code) = classify_failure(&error);
            CommandResult::failure(COMMAND, error_class, error.to_string(), exit_code)
        }
    }
}

fn classify_failure(error: &ApplicationError) -> (&'static str, u8) {
    match error {
        ApplicationError::Domain(_) => ("validation", 3),
        ApplicationError::Configuration(_) => ("configuration", 4),
        ApplicationError::Service(_) => ("completion_service", 5),
    }
}

// Logs go to stderr so stdout stays a single JSON document.
fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
