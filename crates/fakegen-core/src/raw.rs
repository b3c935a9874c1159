//! Raw, untyped parameter bag supplied by callers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String-keyed, multi-valued parameter bag.
///
/// Front ends (query strings, template arguments, command lines) assemble
/// one of these per request. Scalar extractors consult only the first value
/// of a field; array extractors consult all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawParams {
    values: HashMap<String, Vec<String>>,
}

impl RawParams {
    /// Create an empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a field.
    pub fn add(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(field.into())
            .or_default()
            .push(value.into());
    }

    /// Append a value to a field, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(field, value);
        self
    }

    /// Replace all values of a field.
    pub fn set(&mut self, field: impl Into<String>, values: Vec<String>) {
        self.values.insert(field.into(), values);
    }

    /// Get all values of a field.
    ///
    /// A field present with no values is reported as absent.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.values
            .get(field)
            .map(Vec::as_slice)
            .filter(|values| !values.is_empty())
    }

    /// Get the first value of a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Check if a field has at least one value.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterate over field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of fields in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the bag holds no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy fields from `base` that this bag does not supply itself.
    pub fn merge_defaults(&mut self, base: &RawParams) {
        for (field, values) in &base.values {
            if !self.contains(field) {
                self.values.insert(field.clone(), values.clone());
            }
        }
    }
}

impl From<HashMap<String, Vec<String>>> for RawParams {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RawParams::new();
        for (field, value) in iter {
            params.add(field, value);
        }
        params
    }
}
