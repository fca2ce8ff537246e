//! The default-object builder.
//!
//! Synthesizes a model scaffold from a schema: each applicable field
//! contributes its host-computed default, its declared default (as a fresh
//! deep copy), or its kind's zero value, written through the field's
//! resolved path.

use crate::def::FieldDef;
use crate::error::FormError;
use crate::schema::Schema;
use crate::traits::FormField;
use crate::values::FormValues;

/// Build a fresh default object for the schema.
///
/// Fields are walked in declaration order and visibility conditions are
/// evaluated against the partially built object seen so far (starting
/// empty), so a condition depending on an earlier field's default behaves
/// deterministically. Two calls return structurally equal but fully
/// independent objects; mutating one never affects the other.
pub fn build_default(schema: &Schema) -> Result<FormValues, FormError> {
    let mut values = FormValues::new();
    apply_defaults(schema, &mut values)?;
    Ok(values)
}

/// Fill the missing defaults into an existing model.
///
/// Keys the model already holds (even with `null` values) are left alone;
/// only absent paths receive their default. `build_default` is this
/// operation applied to an empty model.
pub fn apply_defaults(schema: &Schema, values: &mut FormValues) -> Result<(), FormError> {
    for field in &schema.fields {
        apply_field(field, values)?;
    }
    for group in &schema.groups {
        if !group.is_visible(values) {
            continue;
        }
        for field in &group.fields {
            apply_field(field, values)?;
        }
    }
    Ok(())
}

fn apply_field(field: &FieldDef, values: &mut FormValues) -> Result<(), FormError> {
    if !field.is_visible(values) {
        return Ok(());
    }
    let path = field.path().into_owned();
    if values.get_path(&path)?.is_some() {
        return Ok(());
    }
    let default = field.default_value(values);
    values.set_path(&path, default)
}
