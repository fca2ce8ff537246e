use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::def::FieldDef;
use crate::values::FormValues;

/// A named collection of fields with its own visibility condition.
///
/// A hidden group hides every member field; member conditions are not even
/// evaluated in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Group name, also the merge identity across schema fragments.
    #[serde(alias = "legend")]
    pub name: String,

    /// Visibility condition gating the whole group; absent means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Condition>,

    /// The member fields, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDef>,
}

impl FieldGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: None,
            fields: Vec::new(),
        }
    }

    /// Add a member field (builder-style, consuming).
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the group visibility condition (builder-style, consuming).
    #[must_use]
    pub fn with_visible(mut self, condition: impl Into<Condition>) -> Self {
        self.visible = Some(condition.into());
        self
    }

    /// Whether the group is visible for the given model state.
    #[must_use]
    pub fn is_visible(&self, values: &FormValues) -> bool {
        self.visible.as_ref().is_none_or(|c| c.resolve(values))
    }
}
