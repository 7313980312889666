//! Request boundary: input validation, configuration precondition, and the
//! response envelope handed back to transports.

use chrono::SecondsFormat;
use nextplay_core::{ApplicationError, Channel, DomainError, Message, Reply};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::runtime::AgentRuntime;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InboundRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    /// Raw classifier text the reply was routed on.
    pub intent: String,
    pub reply: String,
    pub handler: String,
    pub time: String,
}

impl From<Reply> for ReplyEnvelope {
    fn from(reply: Reply) -> Self {
        Self {
            intent: reply.classification.raw().to_string(),
            reply: reply.text,
            handler: reply.handler,
            time: reply.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl InboundRequest {
    pub fn into_message(self) -> Result<Message, ApplicationError> {
        let text = self.message.ok_or(DomainError::EmptyMessage)?;
        let channel = self.channel.as_deref().map(Channel::from_tag).unwrap_or_default();
        Ok(Message::new(text, channel, self.customer_name)?)
    }
}

/// Validates the request, checks the completion credential, then runs the
/// pipeline. Both preconditions are checked before any classification.
pub async fn respond(
    runtime: &AgentRuntime,
    request: InboundRequest,
    correlation_id: &str,
) -> Result<ReplyEnvelope, ApplicationError> {
    let message = request.into_message().map_err(|error| {
        warn!(
            event_name = "agent.boundary.rejected",
            correlation_id = correlation_id,
            error = %error,
            "inbound request failed validation"
        );
        error
    })?;

    if !runtime.completion_ready() {
        warn!(
            event_name = "agent.boundary.unconfigured",
            correlation_id = correlation_id,
            "completion service credential is not configured"
        );
        return Err(ApplicationError::Configuration(
            "completion service api key is not configured".to_string(),
        ));
    }

    let reply = runtime.handle_message(&message, correlation_id).await?;
    info!(
        event_name = "agent.boundary.replied",
        correlation_id = correlation_id,
        intent = %reply.intent,
        handler = %reply.handler,
        "reply produced"
    );

    Ok(ReplyEnvelope::from(reply))
}
