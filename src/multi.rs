//! Multi-object editing support.
//!
//! A form can edit several records at once: fields flagged `multi` show a
//! value only when every record agrees on it. This module finds those
//! fields and computes the shared model for a set of records.

use crate::def::FieldDef;
use crate::error::FormError;
use crate::schema::Schema;
use crate::traits::FormField;
use crate::values::FormValues;

/// The fields flagged for multi-object editing, in declaration order.
#[must_use]
pub fn multi_fields(schema: &Schema) -> Vec<&FieldDef> {
    schema
        .all_fields()
        .filter(|f| f.metadata().multi)
        .collect()
}

/// Build the shared model for a set of records.
///
/// For each multi field, the merged model holds the field's value only
/// when every record carries the same value at the field's path; records
/// that disagree, or miss the value, leave the field unset. A malformed
/// path in any record is a hard error, as everywhere else.
pub fn merge_multi_values(
    schema: &Schema,
    records: &[FormValues],
) -> Result<FormValues, FormError> {
    let mut merged = FormValues::new();

    for field in multi_fields(schema) {
        let path = field.path();

        let mut shared = None;
        let mut agreed = !records.is_empty();
        for record in records {
            match record.get_path(&path)? {
                Some(value) => match &shared {
                    None => shared = Some(value.clone()),
                    Some(seen) if seen == value => {}
                    Some(_) => {
                        agreed = false;
                        break;
                    }
                },
                None => {
                    agreed = false;
                    break;
                }
            }
        }

        if agreed {
            if let Some(value) = shared {
                merged.set_path(&path, value)?;
            }
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumberField, TextField};
    use serde_json::json;

    fn multi_text(id: &str) -> FieldDef {
        let mut field = FieldDef::Text(TextField::new(id));
        field.metadata_mut().multi = true;
        field
    }

    fn record(pairs: &[(&str, serde_json::Value)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn finds_flagged_fields_in_order() {
        let schema = Schema::new()
            .with_field(FieldDef::Text(TextField::new("Name")))
            .with_field(multi_text("Status"))
            .with_field(multi_text("Owner"));

        let keys: Vec<String> = multi_fields(&schema).iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["status", "owner"]);
    }

    #[test]
    fn agreeing_values_are_kept() {
        let schema = Schema::new().with_field(multi_text("Status"));
        let records = [
            record(&[("status", json!("open"))]),
            record(&[("status", json!("open"))]),
        ];

        let merged = merge_multi_values(&schema, &records).unwrap();
        assert_eq!(merged.get("status"), Some(&json!("open")));
    }

    #[test]
    fn disagreeing_values_stay_unset() {
        let schema = Schema::new()
            .with_field(multi_text("Status"))
            .with_field(multi_text("Owner"));
        let records = [
            record(&[("status", json!("open")), ("owner", json!("ada"))]),
            record(&[("status", json!("closed")), ("owner", json!("ada"))]),
        ];

        let merged = merge_multi_values(&schema, &records).unwrap();
        assert_eq!(merged.get("status"), None);
        assert_eq!(merged.get("owner"), Some(&json!("ada")));
    }

    #[test]
    fn missing_value_in_any_record_stays_unset() {
        let schema = Schema::new().with_field(multi_text("Status"));
        let records = [
            record(&[("status", json!("open"))]),
            record(&[("other", json!(1))]),
        ];

        let merged = merge_multi_values(&schema, &records).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn no_records_yield_empty_model() {
        let schema = Schema::new().with_field(multi_text("Status"));
        let merged = merge_multi_values(&schema, &[]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn non_multi_fields_are_ignored() {
        let schema = Schema::new().with_field(FieldDef::Number(NumberField::new("Age")));
        let records = [record(&[("age", json!(30))]), record(&[("age", json!(30))])];

        let merged = merge_multi_values(&schema, &records).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn malformed_record_path_is_a_hard_error() {
        let mut field = multi_text("Street");
        field.metadata_mut().model = Some("address.street".into());
        let schema = Schema::new().with_field(field);

        let records = [record(&[("address", json!("scalar"))])];
        assert!(matches!(
            merge_multi_values(&schema, &records),
            Err(FormError::MalformedPath { .. })
        ));
    }
}
