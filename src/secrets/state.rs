//! Secret value classification.

use serde::Serialize;

/// Value shipped in `.env.example`; means the key was never filled in.
pub const OPENAI_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

/// The state of a secret after lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretState {
    /// The variable is not defined anywhere.
    Missing,
    /// The variable is defined but blank.
    Empty,
    /// The variable still holds the template placeholder.
    Placeholder,
    /// The variable holds something else. Not validated further.
    Set,
}

impl SecretState {
    /// Classify a looked-up value.
    pub fn classify(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => Self::Missing,
            Some("") => Self::Empty,
            Some(OPENAI_KEY_PLACEHOLDER) => Self::Placeholder,
            Some(_) => Self::Set,
        }
    }

    /// Whether the secret counts as configured.
    pub fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }

    /// Short human description used in failure lines.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Missing => "not defined",
            Self::Empty => "empty",
            Self::Placeholder => "still the placeholder value",
            Self::Set => "set",
        }
    }
}
