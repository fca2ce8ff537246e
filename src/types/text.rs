use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// Options specific to single-line text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    /// Regex pattern the value must match (used by the `pattern` validator).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Minimum required character count (used by `min_length`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum allowed character count (used by `max_length`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// A single-line text input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TextOptions>,
}

impl TextField {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(id),
            default: None,
            options: None,
        }
    }

    /// Set the literal default (builder-style, consuming).
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}
