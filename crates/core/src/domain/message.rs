use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Where the inbound message arrived from.
///
/// Tags are matched exactly. Only `email` changes routing; any other spelling is
/// kept verbatim as `Other` and routed like chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[default]
    Chat,
    Email,
    Call,
    Other(String),
}

impl Channel {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "chat" => Self::Chat,
            "email" => Self::Email,
            "call" => Self::Call,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Chat => "chat",
            Self::Email => "email",
            Self::Call => "call",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    text: String,
    channel: Channel,
    customer_name: String,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        channel: Channel,
        customer_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        let customer_name = customer_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string());

        Ok(Self { text, channel, customer_name })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}
