use serde::{Deserialize, Serialize};

/// Closed set of request categories the classifier is asked to choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Buy,
    Sell,
    Support,
    Payment,
    Call,
    General,
}

impl Intent {
    /// Vocabulary presented to the classifier, in prompt order.
    pub const VOCABULARY: [Intent; 6] =
        [Self::Buy, Self::Sell, Self::Support, Self::Payment, Self::Call, Self::General];

    /// Uppercase token the classifier is expected to emit for this intent.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Support => "SUPPORT",
            Self::Payment => "PAYMENT",
            Self::Call => "CALL",
            Self::General => "GENERAL",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Raw classifier output, trimmed.
///
/// Carries an intent only by convention: callers look for markers inside the
/// text rather than parsing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    raw: String,
}

impl ClassificationResult {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self { raw: raw.as_ref().trim().to_string() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn contains_marker(&self, intent: Intent) -> bool {
        self.raw.contains(intent.marker())
    }
}
