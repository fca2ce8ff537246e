use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::FieldMetadata;
use crate::option::SelectChoice;

/// A multi-choice selection field. The model value is an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiSelectField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<Value>>,

    /// The available choices (used by the `one_of` validator).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<SelectChoice>,

    /// Minimum number of selections (used by `min_length`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selections: Option<usize>,

    /// Maximum number of selections (used by `max_length`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
}

impl MultiSelectField {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(id),
            default: None,
            choices: Vec::new(),
            min_selections: None,
            max_selections: None,
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
    pub fn with_default(mut self, default: Vec<Value>) -> Self {
        self.default = Some(default);
        self
    }
}
