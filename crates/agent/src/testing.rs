use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{CompletionService, ServiceError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub system_role: String,
    pub user_text: String,
}

/// Replays canned completions in order and records every call it receives.
pub struct ScriptedCompletion {
    responses: Mutex<VecDeque<Result<String, ServiceError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    credential: bool,
}

impl ScriptedCompletion {
    pub fn new(responses: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            credential: true,
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|text| Ok((*text).to_string())).collect())
    }

    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, system_role: &str, user_text: &str) -> Result<String, ServiceError> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            system_role: system_role.to_string(),
            user_text: user_text.to_string(),
        });
        self.responses.lock().expect("responses lock").pop_front().unwrap_or_else(|| {
            Err(ServiceError::Transport("no scripted response left".to_string()))
        })
    }

    fn has_credential(&self) -> bool {
        self.credential
    }
}
