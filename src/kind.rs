use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a field, determining its value semantics and which zero
/// value an unset field contributes to a built default object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Checkbox,
    Select,
    MultiSelect,
    /// A field whose declared type the engine does not recognize. Carried
    /// through resolution and validation; its default contribution is
    /// `null` (see [`FieldKind::zero_value`]).
    Custom,
}

impl FieldKind {
    /// String identifier for serialization and logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Custom => "custom",
        }
    }

    /// The JSON value type this field expects.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "string",
            Self::Number => "number",
            Self::Checkbox => "boolean",
            Self::MultiSelect => "array",
            Self::Select | Self::Custom => "any",
        }
    }

    /// The value a field of this kind contributes to a default object when
    /// it declares no default of its own.
    ///
    /// Text-like kinds yield the empty string, boolean-like kinds `false`,
    /// multi-select-like kinds the empty array. `Number`, `Select`, and
    /// `Custom` have no natural zero; they deliberately yield `null`, a
    /// defined fallback, not an accident of missing data.
    #[must_use]
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Text | Self::Textarea => Value::String(String::new()),
            Self::Checkbox => Value::Bool(false),
            Self::MultiSelect => Value::Array(Vec::new()),
            Self::Number | Self::Select | Self::Custom => Value::Null,
        }
    }

    /// Whether this kind holds a string value.
    #[must_use]
    pub fn is_text_based(&self) -> bool {
        matches!(self, Self::Text | Self::Textarea)
    }

    /// Whether this kind selects from a declared option list.
    #[must_use]
    pub fn is_selection_based(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL: [FieldKind; 7] = [
        FieldKind::Text,
        FieldKind::Textarea,
        FieldKind::Number,
        FieldKind::Checkbox,
        FieldKind::Select,
        FieldKind::MultiSelect,
        FieldKind::Custom,
    ];

    #[test]
    fn as_str_round_trips_through_serde() {
        for kind in &ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let back: FieldKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }

    #[test]
    fn zero_values_match_value_types() {
        assert_eq!(FieldKind::Text.zero_value(), json!(""));
        assert_eq!(FieldKind::Textarea.zero_value(), json!(""));
        assert_eq!(FieldKind::Checkbox.zero_value(), json!(false));
        assert_eq!(FieldKind::MultiSelect.zero_value(), json!([]));
        assert_eq!(FieldKind::Number.zero_value(), Value::Null);
        assert_eq!(FieldKind::Select.zero_value(), Value::Null);
        assert_eq!(FieldKind::Custom.zero_value(), Value::Null);
    }

    #[test]
    fn classification() {
        assert!(FieldKind::Text.is_text_based());
        assert!(FieldKind::Textarea.is_text_based());
        assert!(!FieldKind::Number.is_text_based());

        assert!(FieldKind::Select.is_selection_based());
        assert!(FieldKind::MultiSelect.is_selection_based());
        assert!(!FieldKind::Checkbox.is_selection_based());
    }
}
