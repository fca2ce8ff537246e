use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::FieldMetadata;

/// A field whose declared type the engine does not recognize.
///
/// Unknown `type` tags deserialize here instead of failing, keeping the
/// raw tag for round-tripping and for host renderers that understand it.
/// During default building such a field contributes its declared default,
/// or `null`, the documented fallback for an unresolvable type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    /// The raw, unrecognized type tag, if any was declared.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl CustomField {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            metadata: FieldMetadata::new(id),
            default: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_raw_type_tag() {
        let f: CustomField = serde_json::from_value(json!({
            "type": "signature-pad",
            "id": "Signature"
        }))
        .unwrap();

        assert_eq!(f.kind.as_deref(), Some("signature-pad"));
        assert_eq!(f.metadata.id, "Signature");

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["type"], "signature-pad");
    }

    #[test]
    fn tolerates_missing_type_tag() {
        let f: CustomField = serde_json::from_value(json!({"id": "Mystery"})).unwrap();
        assert!(f.kind.is_none());
        assert!(f.default.is_none());
    }
}
