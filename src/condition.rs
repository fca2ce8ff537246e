use std::fmt;
use std::sync::Arc;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::values::FormValues;

/// A host-supplied visibility or disabled predicate over the model.
#[derive(Clone)]
pub struct PredicateFn(Arc<dyn Fn(&FormValues) -> bool + Send + Sync>);

impl PredicateFn {
    /// Wrap a closure as a predicate.
    pub fn new(f: impl Fn(&FormValues) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluate the predicate against the current model.
    #[must_use]
    pub fn call(&self, values: &FormValues) -> bool {
        (self.0)(values)
    }
}

impl fmt::Debug for PredicateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredicateFn(..)")
    }
}

/// A boolean condition attached to a field or group.
///
/// Three shapes, resolved through the single [`Condition::resolve`] call
/// site: a literal, a declarative rule tree (serializable, lives in JSON
/// schemas), or a host closure (code-built schemas only).
#[derive(Debug, Clone)]
pub enum Condition {
    /// A fixed boolean.
    Literal(bool),
    /// A declarative rule tree evaluated against the model.
    Rules(RuleSet),
    /// A host closure over the model. Not serializable: attempting to
    /// serialize a schema holding one is a hard error, never a silent drop.
    Predicate(PredicateFn),
}

impl Condition {
    /// Evaluate the condition against the current model.
    ///
    /// Conditions are re-evaluated on every resolution pass; nothing here
    /// is cached.
    #[must_use]
    pub fn resolve(&self, values: &FormValues) -> bool {
        match self {
            Self::Literal(b) => *b,
            Self::Rules(rules) => rules.evaluate(values),
            Self::Predicate(f) => f.call(values),
        }
    }

    /// Build a condition from a host closure.
    pub fn predicate(f: impl Fn(&FormValues) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(PredicateFn::new(f))
    }
}

impl From<bool> for Condition {
    fn from(b: bool) -> Self {
        Self::Literal(b)
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(b) => serializer.serialize_bool(*b),
            Self::Rules(rules) => rules.serialize(serializer),
            Self::Predicate(_) => Err(S::Error::custom(
                "host predicate conditions cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Literal(bool),
            Rules(RuleSet),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Literal(b) => Self::Literal(b),
            Repr::Rules(rules) => Self::Rules(rules),
        })
    }
}

/// A test applied to one model value by a [`Rule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum ValueTest {
    /// Value equals the given value.
    Equals { value: Value },
    /// Value does not equal the given value.
    NotEquals { value: Value },
    /// Value is present and not null.
    IsSet,
    /// Value is null or missing.
    IsNull,
    /// Value is an empty string, an empty array, or missing.
    IsEmpty,
    /// Value is a non-empty string or non-empty array.
    IsNotEmpty,
    /// Value is boolean true.
    IsTrue,
    /// Value is boolean false.
    IsFalse,
    /// Numeric value is strictly greater than the threshold.
    GreaterThan { value: f64 },
    /// Numeric value is strictly less than the threshold.
    LessThan { value: f64 },
    /// Numeric value is within the inclusive range.
    InRange { min: f64, max: f64 },
    /// String contains the given substring, or array contains the value.
    Contains { value: Value },
    /// String value starts with the given prefix.
    StartsWith { prefix: String },
    /// String value ends with the given suffix.
    EndsWith { suffix: String },
    /// Value is one of the given values.
    OneOf { values: Vec<Value> },
}

impl ValueTest {
    /// Apply this test to a concrete value.
    #[must_use]
    pub fn apply(&self, value: &Value) -> bool {
        match self {
            Self::Equals { value: expected } => value == expected,
            Self::NotEquals { value: expected } => value != expected,
            Self::IsSet => !value.is_null(),
            Self::IsNull => value.is_null(),
            Self::IsEmpty => match value {
                Value::String(s) => s.is_empty(),
                Value::Array(a) => a.is_empty(),
                Value::Null => true,
                _ => false,
            },
            Self::IsNotEmpty => match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(a) => !a.is_empty(),
                Value::Null => false,
                _ => true,
            },
            Self::IsTrue => value.as_bool() == Some(true),
            Self::IsFalse => value.as_bool() == Some(false),
            Self::GreaterThan { value: threshold } => {
                value.as_f64().is_some_and(|n| n > *threshold)
            }
            Self::LessThan { value: threshold } => value.as_f64().is_some_and(|n| n < *threshold),
            Self::InRange { min, max } => value.as_f64().is_some_and(|n| n >= *min && n <= *max),
            Self::Contains { value: needle } => match value {
                Value::String(s) => needle.as_str().is_some_and(|n| s.contains(n)),
                Value::Array(items) => items.contains(needle),
                _ => false,
            },
            Self::StartsWith { prefix } => {
                value.as_str().is_some_and(|s| s.starts_with(prefix.as_str()))
            }
            Self::EndsWith { suffix } => {
                value.as_str().is_some_and(|s| s.ends_with(suffix.as_str()))
            }
            Self::OneOf { values } => values.contains(value),
        }
    }
}

/// One declarative rule: test the model value at a dotted path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Dot-separated model path to read.
    pub field: String,
    /// The test applied to that value.
    #[serde(flatten)]
    pub test: ValueTest,
}

impl Rule {
    /// Evaluate against the model. A missing value, or a path that cannot
    /// be traversed, behaves as `null`; visibility rules never hard-fail.
    #[must_use]
    pub fn evaluate(&self, values: &FormValues) -> bool {
        let value = values
            .get_path(&self.field)
            .ok()
            .flatten()
            .cloned()
            .unwrap_or(Value::Null);
        self.test.apply(&value)
    }
}

/// Composable rule logic: combine rules with all/any/not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSet {
    /// A single rule.
    Single(Rule),
    /// All nested rule sets must match.
    All {
        #[serde(rename = "all")]
        rules: Vec<RuleSet>,
    },
    /// At least one nested rule set must match.
    Any {
        #[serde(rename = "any")]
        rules: Vec<RuleSet>,
    },
    /// Negates the nested rule set.
    Not {
        #[serde(rename = "not")]
        rule: Box<RuleSet>,
    },
}

impl RuleSet {
    /// Evaluate the rule set against the model.
    #[must_use]
    pub fn evaluate(&self, values: &FormValues) -> bool {
        match self {
            Self::Single(rule) => rule.evaluate(values),
            Self::All { rules } => rules.iter().all(|r| r.evaluate(values)),
            Self::Any { rules } => rules.iter().any(|r| r.evaluate(values)),
            Self::Not { rule } => !rule.evaluate(values),
        }
    }

    /// Collect the model paths this rule set depends on, sorted and
    /// deduplicated.
    #[must_use]
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps = Vec::new();
        self.collect_dependencies(&mut deps);
        deps.sort();
        deps.dedup();
        deps
    }

    fn collect_dependencies(&self, deps: &mut Vec<String>) {
        match self {
            Self::Single(rule) => deps.push(rule.field.clone()),
            Self::All { rules } | Self::Any { rules } => {
                for r in rules {
                    r.collect_dependencies(deps);
                }
            }
            Self::Not { rule } => rule.collect_dependencies(deps),
        }
    }
}
