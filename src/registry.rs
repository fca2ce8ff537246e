//! The process-wide validator registry.
//!
//! A mutable name→function map alive for the hosting process. Hosts extend
//! it at startup (see [`crate::config::EngineConfig`]); re-registering an
//! existing name overwrites it, so built-ins can be replaced wholesale.
//! There is no removal operation; the registry only grows or overwrites.
//!
//! The engine itself is single-threaded, but the map sits behind an
//! `RwLock` so multi-threaded hosts get a safe registry for free;
//! registration is expected to happen once before validation begins.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::chain::ValidatorFn;
use crate::def::FieldDef;
use crate::error::FormError;
use crate::validators;
use crate::values::FormValues;

static REGISTRY: LazyLock<RwLock<HashMap<String, ValidatorFn>>> =
    LazyLock::new(|| RwLock::new(builtins()));

type BuiltinFn = fn(&serde_json::Value, &FieldDef, &FormValues) -> Vec<String>;

const BUILTINS: [(&str, BuiltinFn); 11] = [
    ("required", validators::required),
    ("min_length", validators::min_length),
    ("max_length", validators::max_length),
    ("pattern", validators::pattern),
    ("min", validators::min),
    ("max", validators::max),
    ("number", validators::number),
    ("integer", validators::integer),
    ("email", validators::email),
    ("url", validators::url),
    ("one_of", validators::one_of),
];

fn builtins() -> HashMap<String, ValidatorFn> {
    BUILTINS
        .into_iter()
        .map(|(name, f)| (name.to_owned(), ValidatorFn::new(f)))
        .collect()
}

/// Register a validator under a name, overwriting any previous registration
/// of the same name. Last writer wins.
pub fn register(name: impl Into<String>, validator: ValidatorFn) {
    let name = name.into();
    debug!(validator = %name, "registering validator");
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, validator);
}

/// Look up a validator by name.
///
/// Fails with [`FormError::UnknownValidator`] when the name has never been
/// registered; validation fails closed on unresolvable names.
pub fn get(name: &str) -> Result<ValidatorFn, FormError> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
        .ok_or_else(|| FormError::UnknownValidator {
            name: name.to_owned(),
        })
}

/// The currently registered validator names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}
