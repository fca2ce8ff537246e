use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;

/// The form's data object, keyed by field key.
///
/// The engine never owns the model: the host creates a `FormValues`,
/// hands references to the resolution and validation passes, and keeps
/// control of its lifetime. Nested values are addressed with dot-separated
/// paths (`"address.street"`); intermediate containers are plain JSON
/// objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(flatten)]
    values: serde_json::Map<String, Value>,
}

impl FormValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a top-level value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a top-level value for a key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Look up a value through a dot-separated path.
    ///
    /// Returns `Ok(None)` when any segment is simply absent. Returns
    /// [`FormError::MalformedPath`] when traversal would descend through a
    /// value that exists but is not an object; that is a schema/model
    /// mismatch the caller must fix, not a missing value.
    pub fn get_path(&self, path: &str) -> Result<Option<&Value>, FormError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or(path);

        let Some(mut current) = self.values.get(first) else {
            return Ok(None);
        };

        let mut walked = first.to_owned();
        for segment in segments {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => current = next,
                    None => return Ok(None),
                },
                _ => {
                    return Err(FormError::MalformedPath {
                        path: path.to_owned(),
                        reason: format!("segment `{walked}` is not an object"),
                    });
                }
            }
            walked.push('.');
            walked.push_str(segment);
        }

        Ok(Some(current))
    }

    /// Write a value through a dot-separated path, creating intermediate
    /// objects as needed.
    ///
    /// Fails with [`FormError::MalformedPath`] when an existing
    /// intermediate segment holds a non-object value.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), FormError> {
        let mut segments: Vec<&str> = path.split('.').collect();
        let last = segments.pop().unwrap_or(path);

        if segments.is_empty() {
            self.values.insert(last.to_owned(), value);
            return Ok(());
        }

        let mut walked = String::new();
        let mut current = &mut self.values;
        for segment in segments {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);

            let entry = current
                .entry(segment.to_owned())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            match entry {
                Value::Object(map) => current = map,
                _ => {
                    return Err(FormError::MalformedPath {
                        path: path.to_owned(),
                        reason: format!("segment `{walked}` is not an object"),
                    });
                }
            }
        }

        current.insert(last.to_owned(), value);
        Ok(())
    }

    /// Whether a top-level value exists for the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The number of top-level values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Try to get a top-level value as a string reference.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    /// Try to get a top-level value as f64.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key)?.as_f64()
    }

    /// Try to get a top-level value as bool.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }
}

impl FromIterator<(String, Value)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
