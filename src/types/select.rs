use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::FieldMetadata;
use crate::option::SelectChoice;

/// A single-choice selection field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// The available choices (used by the `one_of` validator).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<SelectChoice>,
}

impl SelectField {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(id),
            default: None,
            choices: Vec::new(),
        }
    }

    /// Add a choice (builder-style, consuming).
    #[must_use]
    pub fn with_choice(mut self, choice: SelectChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the literal default (builder-style, consuming).
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}
