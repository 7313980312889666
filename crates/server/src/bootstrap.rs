use std::sync::Arc;

use nextplay_agent::{llm::ServiceError, openai::OpenAiCompletionClient, runtime::AgentRuntime};
use nextplay_core::config::AppConfig;
use thiserror::Error;
use tracing::{info, warn};

pub struct Application {
    pub config: AppConfig,
    pub agent_runtime: Arc<AgentRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("completion client setup failed: {0}")]
    CompletionClient(#[source] ServiceError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let completion =
        OpenAiCompletionClient::from_config(&config.llm).map_err(BootstrapError::CompletionClient)?;
    info!(
        event_name = "system.bootstrap.completion_client_ready",
        correlation_id = "bootstrap",
        model = completion.model(),
        base_url = %config.llm.base_url,
        "completion client configured"
    );

    if !config.llm.has_api_key() {
        warn!(
            event_name = "system.bootstrap.missing_api_key",
            correlation_id = "bootstrap",
            "no completion api key configured; requests will fail until one is provided"
        );
    }

    Ok(Application { config, agent_runtime: Arc::new(AgentRuntime::new(Arc::new(completion))) })
}
