use std::borrow::Cow;

use serde_json::Value;

use crate::error::FormError;
use crate::kind::FieldKind;
use crate::metadata::FieldMetadata;
use crate::slug;
use crate::values::FormValues;

/// The capability set every field implementation satisfies.
///
/// The resolver, default builder, merger, and validation engine consume
/// only this contract, so adding a field type means providing the three
/// required hooks, not touching any of those passes. The provided methods
/// cover the shared behavior: key/path derivation, visibility and disabled
/// resolution, default computation, and model access through dotted paths.
pub trait FormField {
    /// The shared metadata block.
    fn metadata(&self) -> &FieldMetadata;

    /// The field's kind, which fixes its zero value.
    fn kind(&self) -> FieldKind;

    /// The literal default declared by the schema, if any, as a JSON value.
    ///
    /// Returns a fresh copy on every call; built default objects never
    /// share structure with the schema or with each other.
    fn declared_default(&self) -> Option<Value>;

    /// The raw human label.
    fn label(&self) -> &str {
        &self.metadata().id
    }

    /// The slugified model key derived from the label.
    fn key(&self) -> String {
        slug::slugify(&self.metadata().id)
    }

    /// The dot-separated model path this field reads and writes: the
    /// `model` override when present, the slugified key otherwise.
    fn path(&self) -> Cow<'_, str> {
        match &self.metadata().model {
            Some(path) => Cow::Borrowed(path.as_str()),
            None => Cow::Owned(self.key()),
        }
    }

    /// Whether the field is visible for the given model state. Absent
    /// conditions mean visible; conditions are re-evaluated every call.
    fn is_visible(&self, values: &FormValues) -> bool {
        self.metadata()
            .visible
            .as_ref()
            .is_none_or(|c| c.resolve(values))
    }

    /// Whether the field is disabled for the given model state.
    fn is_disabled(&self, values: &FormValues) -> bool {
        self.metadata()
            .disabled
            .as_ref()
            .is_some_and(|c| c.resolve(values))
    }

    /// Compute the field's default against the in-progress model:
    /// host-computed default first, then the declared literal, then the
    /// kind's zero value.
    fn default_value(&self, values: &FormValues) -> Value {
        if let Some(producer) = &self.metadata().default_with {
            return producer.call(values, self.metadata());
        }
        if let Some(declared) = self.declared_default() {
            return declared;
        }
        self.kind().zero_value()
    }

    /// Read the field's current value from the model. A missing value is
    /// `null`; a path that descends through a non-object is a hard error.
    fn get_value(&self, values: &FormValues) -> Result<Value, FormError> {
        Ok(values
            .get_path(&self.path())?
            .cloned()
            .unwrap_or(Value::Null))
    }

    /// Write a value into the externally owned model at the field's path,
    /// creating intermediate objects as needed.
    fn set_value(&self, values: &mut FormValues, value: Value) -> Result<(), FormError> {
        values.set_path(&self.path(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::def::FieldDef;
    use crate::metadata::DefaultFn;
    use crate::types::{NumberField, TextField};
    use serde_json::json;

    #[test]
    fn key_is_slugified_label() {
        let field = FieldDef::Text(TextField::new("Full Name"));
        assert_eq!(field.label(), "Full Name");
        assert_eq!(field.key(), "full_name");
        assert_eq!(field.path(), "full_name");
    }

    #[test]
    fn model_override_wins_over_key() {
        let mut field = FieldDef::Text(TextField::new("Street"));
        field.metadata_mut().model = Some("address.street".into());
        assert_eq!(field.path(), "address.street");
    }

    #[test]
    fn visibility_defaults() {
        let field = FieldDef::Text(TextField::new("Name"));
        let values = FormValues::new();
        assert!(field.is_visible(&values));
        assert!(!field.is_disabled(&values));
    }

    #[test]
    fn conditions_are_reevaluated_each_call() {
        let mut field = FieldDef::Text(TextField::new("Company"));
        field.metadata_mut().visible =
            Some(Condition::predicate(|m| m.get_bool("business") == Some(true)));

        let mut values = FormValues::new();
        assert!(!field.is_visible(&values));

        values.set("business", json!(true));
        assert!(field.is_visible(&values));
    }

    #[test]
    fn default_value_precedence() {
        let values = FormValues::new();

        // Kind zero value when nothing is declared.
        let bare = FieldDef::Text(TextField::new("Name"));
        assert_eq!(bare.default_value(&values), json!(""));

        // Declared literal wins over the zero value.
        let declared = FieldDef::Text(TextField::new("Name").with_default("Ada"));
        assert_eq!(declared.default_value(&values), json!("Ada"));

        // Host producer wins over the declared literal.
        let mut computed = FieldDef::Text(TextField::new("Name").with_default("Ada"));
        computed.metadata_mut().default_with =
            Some(DefaultFn::new(|_, meta| json!(format!("<{}>", meta.id))));
        assert_eq!(computed.default_value(&values), json!("<Name>"));
    }

    #[test]
    fn default_producer_sees_in_progress_model() {
        let mut field = FieldDef::Number(NumberField::new("Total"));
        field.metadata_mut().default_with = Some(DefaultFn::new(|m, _| {
            json!(m.get_f64("count").unwrap_or(0.0) * 2.0)
        }));

        let mut values = FormValues::new();
        values.set("count", json!(21.0));
        assert_eq!(field.default_value(&values), json!(42.0));
    }

    #[test]
    fn get_and_set_value_through_path() {
        let mut field = FieldDef::Text(TextField::new("Street"));
        field.metadata_mut().model = Some("address.street".into());

        let mut values = FormValues::new();
        assert_eq!(field.get_value(&values).unwrap(), Value::Null);

        field.set_value(&mut values, json!("Main St")).unwrap();
        assert_eq!(field.get_value(&values).unwrap(), json!("Main St"));
        assert_eq!(
            values.get_path("address.street").unwrap(),
            Some(&json!("Main St"))
        );
    }

    #[test]
    fn get_value_through_scalar_is_hard_error() {
        let mut field = FieldDef::Text(TextField::new("Street"));
        field.metadata_mut().model = Some("address.street".into());

        let mut values = FormValues::new();
        values.set("address", json!("not an object"));
        assert!(matches!(
            field.get_value(&values),
            Err(FormError::MalformedPath { .. })
        ));
    }
}
