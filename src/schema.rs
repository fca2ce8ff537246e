use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::def::FieldDef;
use crate::error::FormError;
use crate::group::FieldGroup;
use crate::traits::FormField;

/// A form schema: an optional flat field list plus named field groups.
///
/// The flat `fields` list behaves as one implicit, always-first group with
/// no visibility condition of its own. Within a fully resolved schema every
/// field key (slugified id) must be unique; [`Schema::ensure_unique_keys`]
/// checks the invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Ungrouped fields, rendered before any group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDef>,

    /// Named groups, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ungrouped field (builder-style, consuming).
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a group (builder-style, consuming).
    #[must_use]
    pub fn with_group(mut self, group: FieldGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Iterate every field in declaration order: ungrouped fields first,
    /// then each group's fields. Ignores visibility.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.fields.iter()))
    }

    /// Look up a field by its slugified key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.all_fields().find(|f| f.key() == key)
    }

    /// The total number of fields across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_fields().count()
    }

    /// Whether the schema declares no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_fields().next().is_none()
    }

    /// Verify that every field key is unique after slugification.
    pub fn ensure_unique_keys(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for field in self.all_fields() {
            let key = field.key();
            if !seen.insert(key.clone()) {
                return Err(FormError::DuplicateKey { key });
            }
        }
        Ok(())
    }
}
