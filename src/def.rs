use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::kind::FieldKind;
use crate::metadata::FieldMetadata;
use crate::option::SelectChoice;
use crate::traits::FormField;
use crate::types::{
    CheckboxField, CustomField, MultiSelectField, NumberField, SelectField, TextField,
    TextareaField,
};

/// A concrete field definition, tagged by type.
///
/// Each variant wraps a specific field-type struct. The `type` key in JSON
/// selects the variant; a missing or unrecognized tag lands in
/// [`FieldDef::Custom`] rather than failing the parse, so a schema can
/// carry host-specific widget types the engine treats generically.
#[derive(Debug, Clone)]
pub enum FieldDef {
    Text(TextField),
    Textarea(TextareaField),
    Number(NumberField),
    Checkbox(CheckboxField),
    Select(SelectField),
    MultiSelect(MultiSelectField),
    Custom(CustomField),
}

macro_rules! for_each_variant {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            Self::Text($f) => $body,
            Self::Textarea($f) => $body,
            Self::Number($f) => $body,
            Self::Checkbox($f) => $body,
            Self::Select($f) => $body,
            Self::MultiSelect($f) => $body,
            Self::Custom($f) => $body,
        }
    };
}

impl FieldDef {
    /// Mutable access to the shared metadata.
    pub fn metadata_mut(&mut self) -> &mut FieldMetadata {
        for_each_variant!(self, f => &mut f.metadata)
    }

    /// Length bounds consulted by the `min_length`/`max_length` validators:
    /// character counts for text-like fields, selection counts for
    /// multi-selects.
    #[must_use]
    pub fn length_bounds(&self) -> (Option<usize>, Option<usize>) {
        match self {
            Self::Text(f) => f
                .options
                .as_ref()
                .map_or((None, None), |o| (o.min_length, o.max_length)),
            Self::Textarea(f) => f
                .options
                .as_ref()
                .map_or((None, None), |o| (o.min_length, o.max_length)),
            Self::MultiSelect(f) => (f.min_selections, f.max_selections),
            _ => (None, None),
        }
    }

    /// Numeric bounds consulted by the `min`/`max` validators.
    #[must_use]
    pub fn numeric_bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Number(f) => f.options.as_ref().map_or((None, None), |o| (o.min, o.max)),
            _ => (None, None),
        }
    }

    /// The regex pattern consulted by the `pattern` validator.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Text(f) => f.options.as_ref()?.pattern.as_deref(),
            _ => None,
        }
    }

    /// The declared choices consulted by the `one_of` validator.
    #[must_use]
    pub fn choices(&self) -> Option<&[SelectChoice]> {
        match self {
            Self::Select(f) => Some(&f.choices),
            Self::MultiSelect(f) => Some(&f.choices),
            _ => None,
        }
    }
}

impl FormField for FieldDef {
    fn metadata(&self) -> &FieldMetadata {
        for_each_variant!(self, f => &f.metadata)
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Textarea(_) => FieldKind::Textarea,
            Self::Number(_) => FieldKind::Number,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::Select(_) => FieldKind::Select,
            Self::MultiSelect(_) => FieldKind::MultiSelect,
            Self::Custom(_) => FieldKind::Custom,
        }
    }

    fn declared_default(&self) -> Option<Value> {
        match self {
            Self::Text(f) => f.default.clone().map(Value::String),
            Self::Textarea(f) => f.default.clone().map(Value::String),
            Self::Number(f) => f.default.map(Value::from),
            Self::Checkbox(f) => f.default.map(Value::Bool),
            Self::Select(f) => f.default.clone(),
            Self::MultiSelect(f) => f.default.clone().map(Value::Array),
            Self::Custom(f) => f.default.clone(),
        }
    }
}

impl Serialize for FieldDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn tagged<S: Serializer, T: Serialize>(
            tag: &str,
            inner: &T,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let mut value = serde_json::to_value(inner).map_err(S::Error::custom)?;
            if let Value::Object(map) = &mut value {
                map.insert("type".to_owned(), Value::String(tag.to_owned()));
            }
            value.serialize(serializer)
        }

        match self {
            Self::Text(f) => tagged("text", f, serializer),
            Self::Textarea(f) => tagged("textarea", f, serializer),
            Self::Number(f) => tagged("number", f, serializer),
            Self::Checkbox(f) => tagged("checkbox", f, serializer),
            Self::Select(f) => tagged("select", f, serializer),
            Self::MultiSelect(f) => tagged("multi_select", f, serializer),
            // Custom carries its raw tag in its own `type` field.
            Self::Custom(f) => f.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let tag = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        fn inner<'de, D: Deserializer<'de>, T: serde::de::DeserializeOwned>(
            raw: Value,
        ) -> Result<T, D::Error> {
            serde_json::from_value(raw).map_err(D::Error::custom)
        }

        Ok(match tag.as_str() {
            "text" => Self::Text(inner::<D, _>(raw)?),
            "textarea" => Self::Textarea(inner::<D, _>(raw)?),
            "number" => Self::Number(inner::<D, _>(raw)?),
            "checkbox" => Self::Checkbox(inner::<D, _>(raw)?),
            "select" => Self::Select(inner::<D, _>(raw)?),
            "multi_select" => Self::MultiSelect(inner::<D, _>(raw)?),
            _ => Self::Custom(inner::<D, _>(raw)?),
        })
    }
}
