//! Host installation options.
//!
//! The host integrates the engine with a single configuration object whose
//! recognized option is a set of named validators, merged into the
//! process-wide registry at install time. Names that collide with
//! built-ins overwrite them; that is the supported way to replace a
//! built-in message or behavior wholesale.

use serde_json::Value;
use tracing::debug;

use crate::chain::ValidatorFn;
use crate::def::FieldDef;
use crate::registry;
use crate::values::FormValues;

/// Configuration applied once at host startup.
#[derive(Debug, Default)]
pub struct EngineConfig {
    validators: Vec<(String, ValidatorFn)>,
}

impl EngineConfig {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named validator (builder-style, consuming). Later entries with
    /// the same name win, matching registry semantics.
    #[must_use]
    pub fn with_validator(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&Value, &FieldDef, &FormValues) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.validators.push((name.into(), ValidatorFn::new(f)));
        self
    }

    /// Merge this configuration into the validator registry.
    pub fn install(self) {
        debug!(validators = self.validators.len(), "installing engine config");
        for (name, validator) in self.validators {
            registry::register(name, validator);
        }
    }
}
