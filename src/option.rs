use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single choice in a select or multi-select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectChoice {
    /// The value written to the model when this choice is selected.
    pub value: Value,

    /// Human-readable display label.
    pub name: String,

    /// Whether this choice is shown but not selectable.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectChoice {
    /// Create an enabled choice.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            value,
            name: name.into(),
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_choice() {
        let choice = SelectChoice::new("US East", json!("us-east-1"));
        assert_eq!(choice.name, "US East");
        assert_eq!(choice.value, json!("us-east-1"));
        assert!(!choice.disabled);
    }

    #[test]
    fn serde_round_trip() {
        let choice = SelectChoice {
            value: json!("beta"),
            name: "Beta Feature".into(),
            disabled: true,
        };

        let json = serde_json::to_string(&choice).unwrap();
        assert!(json.contains("\"disabled\":true"));

        let back: SelectChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(choice, back);
    }

    #[test]
    fn disabled_defaults_to_false() {
        let choice: SelectChoice =
            serde_json::from_value(json!({"name": "JSON", "value": "json"})).unwrap();
        assert!(!choice.disabled);
    }
}
