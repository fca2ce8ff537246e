use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A boolean toggle field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckboxField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

impl CheckboxField {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(id),
            default: None,
        }
    }

    /// Set the literal default (builder-style, consuming).
    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }
}
