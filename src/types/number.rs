use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// Options specific to numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberOptions {
    /// Minimum allowed value (used by the `min` validator).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum allowed value (used by the `max` validator).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Step increment for UI spinners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// A numeric input field.
///
/// Carries no zero default: an untouched number is `null`, not `0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NumberOptions>,
}

impl NumberField {
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
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }
}
