use std::sync::Arc;

use nextplay_core::{ApplicationError, Message, Reply};
use tracing::warn;

use crate::classifier::IntentClassifier;
use crate::dispatch::Dispatcher;
use crate::llm::CompletionService;

/// One-shot classify then dispatch. Holds no per-request state, so a single
/// instance serves concurrent requests.
pub struct AgentRuntime {
    completion: Arc<dyn CompletionService>,
    classifier: IntentClassifier,
    dispatcher: Dispatcher,
}

impl AgentRuntime {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion, classifier: IntentClassifier::new(), dispatcher: Dispatcher::standard() }
    }

    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn completion_ready(&self) -> bool {
        self.completion.has_credential()
    }

    pub async fn handle_message(
        &self,
        message: &Message,
        correlation_id: &str,
    ) -> Result<Reply, ApplicationError> {
        let completion = self.completion.as_ref();

        let classification =
            self.classifier.classify(completion, message, correlation_id).await.map_err(|error| {
                warn!(
                    event_name = "agent.classifier.failed",
                    correlation_id = correlation_id,
                    error = %error,
                    "classification failed"
                );
                ApplicationError::from(error)
            })?;

        self.dispatcher.dispatch(classification, message, completion, correlation_id).await.map_err(
            |error| {
                warn!(
                    event_name = "agent.dispatch.failed",
                    correlation_id = correlation_id,
                    error = %error,
                    "reply strategy failed"
                );
                ApplicationError::from(error)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nextplay_core::{ApplicationError, Channel, Intent, Message};

    use super::AgentRuntime;
    use crate::classifier::CLASSIFIER_ROLE;
    use crate::handlers::{GENERAL_ROLE, SALES_ROLE};
    use crate::llm::ServiceError;
    use crate::testing::ScriptedCompletion;

    #[tokio::test]
    async fn classify_then_dispatch_in_sequence() {
        let completion = Arc::new(ScriptedCompletion::replying(&["BUY", "Great choice!"]));
        let runtime = AgentRuntime::new(completion.clone());
        let message =
            Message::new("I want the pro plan", Channel::Chat, None).expect("valid message");

        let reply = runtime.handle_message(&message, "req-1").await.expect("reply");

        assert_eq!(reply.intent, Intent::Buy);
        assert_eq!(reply.text, "Great choice!");
        let roles = completion.calls().into_iter().map(|call| call.system_role).collect::<Vec<_>>();
        assert_eq!(roles, vec![CLASSIFIER_ROLE.to_string(), SALES_ROLE.to_string()]);
    }

    #[tokio::test]
    async fn every_message_yields_one_reply_even_for_noisy_labels() {
        for label in ["", "unknown", "Intent: GENERAL", "buy?"] {
            let completion = Arc::new(ScriptedCompletion::replying(&[label, "Hello!"]));
            let runtime = AgentRuntime::new(completion.clone());
            let message = Message::new("hi", Channel::Chat, None).expect("valid message");

            let reply = runtime.handle_message(&message, "req-2").await.expect("reply");

            assert_eq!(reply.intent, Intent::General);
            assert_eq!(reply.handler, "general");
            assert!(!reply.text.is_empty());
            assert_eq!(completion.calls()[1].system_role, GENERAL_ROLE);
        }
    }

    #[tokio::test]
    async fn classifier_failure_skips_dispatch() {
        let completion = Arc::new(ScriptedCompletion::new(vec![Err(ServiceError::Status {
            status: 500,
            body: "overloaded".to_string(),
        })]));
        let runtime = AgentRuntime::new(completion.clone());
        let message = Message::new("hi", Channel::Chat, None).expect("valid message");

        let result = runtime.handle_message(&message, "req-3").await;

        assert!(matches!(
            result,
            Err(ApplicationError::Service(ref message)) if message.contains("overloaded")
        ));
        assert_eq!(completion.calls().len(), 1);
    }
}
