use nextplay_core::{ClassificationResult, Intent, Message};
use tracing::info;

use crate::llm::{CompletionService, ServiceError};

pub const CLASSIFIER_ROLE: &str = "You are an intent classifier.";

#[derive(Clone, Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn prompt(&self, message: &str) -> String {
        let vocabulary = Intent::VOCABULARY
            .iter()
            .map(|intent| format!("- {}", intent.marker()))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Detect intent from message.\nIntents:\n{vocabulary}\n\nMessage: {message}\n")
    }

    /// Asks the completion service to label the message. Failures are returned unchanged.
    pub async fn classify(
        &self,
        completion: &dyn CompletionService,
        message: &Message,
        correlation_id: &str,
    ) -> Result<ClassificationResult, ServiceError> {
        info!(
            event_name = "agent.classifier.start",
            correlation_id = correlation_id,
            channel = %message.channel(),
            "classifying inbound message"
        );

        let raw = completion.complete(CLASSIFIER_ROLE, &self.prompt(message.text())).await?;
        let result = ClassificationResult::new(raw);

        info!(
            event_name = "agent.classifier.completed",
            correlation_id = correlation_id,
            classification = result.raw(),
            "classifier returned"
        );
        Ok(result)
    }
}
