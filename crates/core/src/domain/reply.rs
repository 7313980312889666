use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::intent::{ClassificationResult, Intent};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: Intent,
    pub classification: ClassificationResult,
    pub handler: String,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(
        intent: Intent,
        classification: ClassificationResult,
        handler: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            intent,
            classification,
            handler: handler.into(),
            text: text.into(),
            generated_at: Utc::now(),
        }
    }
}
