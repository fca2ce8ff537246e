use std::fmt;
use std::sync::Arc;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::def::FieldDef;
use crate::values::FormValues;

/// A validator function: `(value, field, model) -> error messages`.
///
/// An empty result means the value passed. This is the extension-point
/// signature hosts implement for custom validators.
#[derive(Clone)]
pub struct ValidatorFn(Arc<dyn Fn(&Value, &FieldDef, &FormValues) -> Vec<String> + Send + Sync>);

impl ValidatorFn {
    /// Wrap a closure as a validator.
    pub fn new(
        f: impl Fn(&Value, &FieldDef, &FormValues) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Run the validator.
    #[must_use]
    pub fn call(&self, value: &Value, field: &FieldDef, values: &FormValues) -> Vec<String> {
        (self.0)(value, field, values)
    }
}

impl fmt::Debug for ValidatorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidatorFn(..)")
    }
}

/// One entry in a validator chain: a registry name, resolved lazily at
/// validation time, or an inline host closure invoked directly.
#[derive(Debug, Clone)]
pub enum ValidatorRef {
    /// A name looked up in the validator registry when the chain runs.
    Name(String),
    /// A host closure. Not serializable.
    Inline(ValidatorFn),
}

/// The ordered validator chain attached to a field.
///
/// Schema JSON may spell the chain as a single name (`"required"`) or an
/// array of names (`["required", "min_length"]`); both normalize into the
/// same canonical sequence here, so the engine never branches on shape.
/// Host code may append inline closures on top.
#[derive(Debug, Clone, Default)]
pub struct ValidatorChain(Vec<ValidatorRef>);

impl ValidatorChain {
    /// An empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain of a single named validator.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(vec![ValidatorRef::Name(name.into())])
    }

    /// Append a named validator (builder-style, consuming).
    #[must_use]
    pub fn then(mut self, name: impl Into<String>) -> Self {
        self.0.push(ValidatorRef::Name(name.into()));
        self
    }

    /// Append an inline validator (builder-style, consuming).
    #[must_use]
    pub fn then_inline(
        mut self,
        f: impl Fn(&Value, &FieldDef, &FormValues) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.0.push(ValidatorRef::Inline(ValidatorFn::new(f)));
        self
    }

    /// Append an entry in place.
    pub fn push(&mut self, entry: ValidatorRef) {
        self.0.push(entry);
    }

    /// Iterate the chain in order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidatorRef> {
        self.0.iter()
    }

    /// Whether the chain holds no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of validators in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain references the given registry name.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.0
            .iter()
            .any(|r| matches!(r, ValidatorRef::Name(n) if n == name))
    }
}

impl From<&str> for ValidatorChain {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl FromIterator<ValidatorRef> for ValidatorChain {
    fn from_iter<I: IntoIterator<Item = ValidatorRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ValidatorChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&str> = self
            .0
            .iter()
            .map(|r| match r {
                ValidatorRef::Name(n) => Ok(n.as_str()),
                ValidatorRef::Inline(_) => Err(S::Error::custom(
                    "inline validators cannot be serialized",
                )),
            })
            .collect::<Result<_, _>>()?;

        // A one-name chain keeps the compact string spelling.
        match names.as_slice() {
            [single] => serializer.serialize_str(single),
            _ => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ValidatorChain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::One(name) => Self::named(name),
            Repr::Many(names) => names.into_iter().map(ValidatorRef::Name).collect(),
        })
    }
}
