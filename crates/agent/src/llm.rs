use async_trait::async_trait;
use nextplay_core::ApplicationError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("completion response was malformed: {0}")]
    MalformedResponse(String),
    #[error("completion service api key is not configured")]
    MissingCredential,
}

impl From<ServiceError> for ApplicationError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::MissingCredential => Self::Configuration(value.to_string()),
            other => Self::Service(other.to_string()),
        }
    }
}

/// Text completion with a system role and a single user turn.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, system_role: &str, user_text: &str) -> Result<String, ServiceError>;

    /// Whether the credential this service needs is present.
    fn has_credential(&self) -> bool {
        true
    }
}
