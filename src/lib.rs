//! Schema-driven dynamic-form engine.
//!
//! Given a declarative schema (typed field descriptors with validation
//! chains, visibility conditions, and grouping), this crate derives default
//! data objects, resolves which fields apply to a model, merges schema
//! fragments, and validates field values through a process-wide validator
//! registry. Rendering and host-UI integration stay outside; the engine
//! only ever reads and writes the host-owned model.
//!
//! ```
//! use formgen::prelude::*;
//!
//! let schema: Schema = serde_json::from_value(serde_json::json!({
//!     "fields": [
//!         {"type": "text", "id": "Name", "validator": "required"}
//!     ]
//! }))?;
//!
//! let mut model = build_default(&schema)?;
//! assert_eq!(model.get("name"), Some(&serde_json::json!("")));
//!
//! let report = validate_schema(&schema, &model)?;
//! assert_eq!(report.errors_for("name"), ["Name is required"]);
//!
//! model.set("name", serde_json::json!("Ada"));
//! assert!(validate_schema(&schema, &model)?.is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chain;
pub mod condition;
pub mod config;
pub mod def;
pub mod defaults;
pub mod error;
pub mod group;
pub mod kind;
pub mod merge;
pub mod metadata;
pub mod multi;
pub mod option;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod slug;
pub mod traits;
pub mod types;
pub mod validate;
pub mod validators;
pub mod values;

pub mod prelude {
    pub use crate::chain::{ValidatorChain, ValidatorFn, ValidatorRef};
    pub use crate::condition::{Condition, PredicateFn, Rule, RuleSet, ValueTest};
    pub use crate::config::EngineConfig;
    pub use crate::def::FieldDef;
    pub use crate::defaults::{apply_defaults, build_default};
    pub use crate::error::FormError;
    pub use crate::group::FieldGroup;
    pub use crate::kind::FieldKind;
    pub use crate::merge::merge;
    pub use crate::metadata::{DefaultFn, FieldMetadata};
    pub use crate::multi::{merge_multi_values, multi_fields};
    pub use crate::option::SelectChoice;
    pub use crate::resolve::resolve_fields;
    pub use crate::schema::Schema;
    pub use crate::slug::{form_id, slugify};
    pub use crate::traits::FormField;
    pub use crate::validate::{validate_field, validate_schema, ValidationReport};
    pub use crate::values::FormValues;

    pub use crate::types::*;
}
