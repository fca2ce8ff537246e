//! The resolution pass: which fields apply to a given model state.
//!
//! This is the single source of truth shared by renderers and the
//! validation engine: a field this pass filters out is never validated
//! and never painted.

use crate::def::FieldDef;
use crate::schema::Schema;
use crate::traits::FormField;
use crate::values::FormValues;

/// Flatten the schema into the ordered list of fields applicable to the
/// given model state.
///
/// Ungrouped fields come first, then each group in declaration order. A
/// group whose own condition resolves false is skipped whole; member
/// conditions are not evaluated. Surviving fields keep their declaration
/// order, so the output is always an order-preserving subsequence of
/// [`Schema::all_fields`].
#[must_use]
pub fn resolve_fields<'a>(schema: &'a Schema, values: &FormValues) -> Vec<&'a FieldDef> {
    let mut resolved = Vec::new();

    for field in &schema.fields {
        if field.is_visible(values) {
            resolved.push(field);
        }
    }

    for group in &schema.groups {
        if !group.is_visible(values) {
            continue;
        }
        for field in &group.fields {
            if field.is_visible(values) {
                resolved.push(field);
            }
        }
    }

    resolved
}
