use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::ValidatorChain;
use crate::condition::Condition;
use crate::values::FormValues;

/// A host-supplied default producer: `(in-progress model, metadata) -> value`.
///
/// Invoked by default building with the partially built object, so a
/// computed default may depend on values of fields declared earlier.
#[derive(Clone)]
pub struct DefaultFn(Arc<dyn Fn(&FormValues, &FieldMetadata) -> Value + Send + Sync>);

impl DefaultFn {
    /// Wrap a closure as a default producer.
    pub fn new(f: impl Fn(&FormValues, &FieldMetadata) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Produce the default value.
    #[must_use]
    pub fn call(&self, values: &FormValues, metadata: &FieldMetadata) -> Value {
        (self.0)(values, metadata)
    }
}

impl fmt::Debug for DefaultFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFn(..)")
    }
}

/// Metadata shared by every field type.
///
/// `id` is the raw human label; the model key is its slugified form, and
/// `model` overrides where the field reads and writes when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Raw field label, e.g. `"Full Name"`. Accepted as `label` on input.
    #[serde(alias = "label")]
    pub id: String,

    /// Dot-separated model path override. When absent the field uses its
    /// slugified id as a top-level key.
    #[serde(default, alias = "path", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Longer description shown as tooltip or help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short contextual hint displayed near the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Placeholder text shown in empty input widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether the user must provide a value. Shorthand for putting
    /// `required` at the front of the validator chain.
    #[serde(default)]
    pub required: bool,

    /// Whether this field participates in multi-object value merging.
    #[serde(default)]
    pub multi: bool,

    /// Visibility condition; absent means always visible. Re-evaluated on
    /// every resolution pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Condition>,

    /// Disabled condition; absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Condition>,

    /// The validator chain run against this field's value.
    #[serde(default, skip_serializing_if = "ValidatorChain::is_empty")]
    pub validator: ValidatorChain,

    /// Host-computed default. Wins over a declared literal default.
    /// Only settable from code; never serialized.
    #[serde(skip)]
    pub default_with: Option<DefaultFn>,
}

impl FieldMetadata {
    /// Create metadata for the given raw label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sets_id_only() {
        let meta = FieldMetadata::new("Full Name");
        assert_eq!(meta.id, "Full Name");
        assert!(meta.model.is_none());
        assert!(!meta.required);
        assert!(!meta.multi);
        assert!(meta.visible.is_none());
        assert!(meta.disabled.is_none());
        assert!(meta.validator.is_empty());
        assert!(meta.default_with.is_none());
    }

    #[test]
    fn deserializes_minimal() {
        let meta: FieldMetadata = serde_json::from_value(json!({"id": "Age"})).unwrap();
        assert_eq!(meta.id, "Age");
        assert!(!meta.required);
    }

    #[test]
    fn path_alias_for_model() {
        let meta: FieldMetadata =
            serde_json::from_value(json!({"id": "Street", "path": "address.street"})).unwrap();
        assert_eq!(meta.model.as_deref(), Some("address.street"));

        let meta: FieldMetadata =
            serde_json::from_value(json!({"id": "Street", "model": "address.street"})).unwrap();
        assert_eq!(meta.model.as_deref(), Some("address.street"));
    }

    #[test]
    fn optional_fields_omitted_from_json() {
        let meta = FieldMetadata::new("Name");
        let json = serde_json::to_string(&meta).unwrap();

        assert!(!json.contains("model"));
        assert!(!json.contains("description"));
        assert!(!json.contains("validator"));
        assert!(!json.contains("visible"));
    }

    #[test]
    fn deserializes_validator_and_visibility() {
        let meta: FieldMetadata = serde_json::from_value(json!({
            "id": "Company",
            "required": true,
            "validator": ["required", "min_length"],
            "visible": {"field": "is_business", "test": "is_true"}
        }))
        .unwrap();

        assert!(meta.required);
        assert_eq!(meta.validator.len(), 2);
        assert!(meta.visible.is_some());
    }

    #[test]
    fn default_with_survives_clone_but_not_serde() {
        let mut meta = FieldMetadata::new("Token");
        meta.default_with = Some(DefaultFn::new(|_, _| json!("generated")));

        let copy = meta.clone();
        assert!(copy.default_with.is_some());

        let json = serde_json::to_string(&meta).unwrap();
        assert!(!json.contains("default_with"));
    }
}
