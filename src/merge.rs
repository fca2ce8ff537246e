//! The schema merger: combine field definitions from multiple fragments.
//!
//! Fragments are walked in argument order. The last fragment to define a
//! field key wins the whole definition (no attribute-wise union), but a
//! replaced field keeps the position of its first introduction. Groups are
//! identified by name: the first fragment to introduce a group owns it,
//! and later fragments with the same group name append their fields to it.

use tracing::debug;

use crate::def::FieldDef;
use crate::group::FieldGroup;
use crate::schema::Schema;
use crate::traits::FormField;

/// Merge schema fragments into one schema, later fragments overriding
/// earlier ones per field key. Input fragments are never mutated.
#[must_use]
pub fn merge<'a, I>(fragments: I) -> Schema
where
    I: IntoIterator<Item = &'a Schema>,
{
    let mut merged = Schema::new();
    let mut fragment_count = 0usize;

    for fragment in fragments {
        fragment_count += 1;
        for field in &fragment.fields {
            place_field(&mut merged, None, field.clone());
        }
        for group in &fragment.groups {
            let slot = match merged.groups.iter().position(|g| g.name == group.name) {
                Some(idx) => idx,
                None => {
                    merged.groups.push(FieldGroup {
                        name: group.name.clone(),
                        visible: group.visible.clone(),
                        fields: Vec::new(),
                    });
                    merged.groups.len() - 1
                }
            };
            for field in &group.fields {
                place_field(&mut merged, Some(slot), field.clone());
            }
        }
    }

    debug!(
        fragments = fragment_count,
        fields = merged.len(),
        groups = merged.groups.len(),
        "merged schema fragments"
    );
    merged
}

/// Replace an existing definition with the same key in place, or append the
/// field to its target (the ungrouped list or a group slot).
fn place_field(merged: &mut Schema, group_slot: Option<usize>, field: FieldDef) {
    let key = field.key();

    if let Some(existing) = merged.fields.iter_mut().find(|f| f.key() == key) {
        *existing = field;
        return;
    }
    for group in &mut merged.groups {
        if let Some(existing) = group.fields.iter_mut().find(|f| f.key() == key) {
            *existing = field;
            return;
        }
    }

    match group_slot {
        Some(idx) => merged.groups[idx].fields.push(field),
        None => merged.fields.push(field),
    }
}
