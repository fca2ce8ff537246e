//! The field validation engine.
//!
//! Runs a field's validator chain against the current model and aggregates
//! per-field results over a whole schema. Validator-chain failures are
//! collected, never thrown; structural failures (malformed model paths)
//! surface immediately as [`FormError`] because they indicate a
//! schema/model mismatch rather than bad user input.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::chain::ValidatorRef;
use crate::def::FieldDef;
use crate::error::FormError;
use crate::registry;
use crate::resolve::resolve_fields;
use crate::schema::Schema;
use crate::traits::FormField;
use crate::values::FormValues;

/// Validate one field against the model.
///
/// An invisible or disabled field is always valid: the resolution rules
/// are applied to this field in isolation, so the result agrees with what
/// [`resolve_fields`] would keep. The `required` metadata flag prepends the
/// `required` validator unless the chain already names it. Every validator
/// in the chain runs (no short-circuit on first failure) and messages are
/// concatenated in chain order. An unresolvable validator name contributes
/// a diagnostic entry instead of silently passing.
pub fn validate_field(field: &FieldDef, values: &FormValues) -> Result<Vec<String>, FormError> {
    if !field.is_visible(values) || field.is_disabled(values) {
        return Ok(Vec::new());
    }

    let value = field.get_value(values)?;
    let metadata = field.metadata();
    let mut errors = Vec::new();

    if metadata.required && !metadata.validator.has_name("required") {
        run_named("required", &value, field, values, &mut errors);
    }

    for entry in metadata.validator.iter() {
        match entry {
            ValidatorRef::Name(name) => run_named(name, &value, field, values, &mut errors),
            ValidatorRef::Inline(validator) => {
                errors.extend(validator.call(&value, field, values));
            }
        }
    }

    Ok(errors)
}

fn run_named(
    name: &str,
    value: &serde_json::Value,
    field: &FieldDef,
    values: &FormValues,
    errors: &mut Vec<String>,
) {
    match registry::get(name) {
        Ok(validator) => errors.extend(validator.call(value, field, values)),
        // Fail closed: an unresolvable name is a visible diagnostic for
        // this field, and the rest of the chain still runs.
        Err(err) => {
            warn!(validator = name, field = %field.key(), "validator not registered");
            errors.push(err.to_string());
        }
    }
}

/// Per-field validation results for one schema pass, in field order.
///
/// Every resolved field gets an entry, valid ones with an empty message
/// list, so "all valid" is exactly "every entry is empty".
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    entries: IndexMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// The messages recorded for a field key. Missing fields (not resolved
    /// in this pass) report as valid.
    #[must_use]
    pub fn errors_for(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Keys of the fields that failed, in field order.
    #[must_use]
    pub fn invalid_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Iterate `(key, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, errors)| (key.as_str(), errors.as_slice()))
    }

    /// The number of fields covered by this pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pass covered no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, errors: Vec<String>) {
        self.entries.insert(key, errors);
    }
}

/// Validate every applicable field of the schema against the model.
///
/// Runs the resolution pass first, so invisible fields and hidden groups
/// are never validated, then validates each surviving field and records
/// its result under its key.
pub fn validate_schema(
    schema: &Schema,
    values: &FormValues,
) -> Result<ValidationReport, FormError> {
    let mut report = ValidationReport::default();
    for field in resolve_fields(schema, values) {
        let errors = validate_field(field, values)?;
        report.insert(field.key(), errors);
    }
    Ok(report)
}
