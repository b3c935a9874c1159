//! Typed arguments resolved from a raw parameter bag.

use crate::error::LookupError;
use crate::param::{ParamType, ParamValue};
use std::collections::HashMap;

/// Parameters of one invocation after coercion against the declared schema.
///
/// Holds exactly the declared parameters of a generator. Reading a field the
/// generator did not declare, or reading it as another type, is an error
/// rather than a silent default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParams {
    values: HashMap<String, ParamValue>,
}

impl ResolvedParams {
    /// Create an empty set of resolved parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolved value.
    pub fn insert(&mut self, field: impl Into<String>, value: ParamValue) {
        self.values.insert(field.into(), value);
    }

    /// Get a resolved value by field name.
    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.values.get(field)
    }

    /// Number of resolved parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no parameters were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a declared `int` parameter.
    pub fn int(&self, field: &str) -> Result<i64, LookupError> {
        match self.typed(field, ParamType::Int)? {
            ParamValue::Int(v) => Ok(*v),
            other => Err(mismatch(field, other, ParamType::Int)),
        }
    }

    /// Read a declared `uint` parameter.
    pub fn uint(&self, field: &str) -> Result<u64, LookupError> {
        match self.typed(field, ParamType::Uint)? {
            ParamValue::Uint(v) => Ok(*v),
            other => Err(mismatch(field, other, ParamType::Uint)),
        }
    }

    /// Read a declared `float32` parameter.
    pub fn float32(&self, field: &str) -> Result<f32, LookupError> {
        match self.typed(field, ParamType::Float32)? {
            ParamValue::Float32(v) => Ok(*v),
            other => Err(mismatch(field, other, ParamType::Float32)),
        }
    }

    /// Read a declared `float64` parameter.
    pub fn float64(&self, field: &str) -> Result<f64, LookupError> {
        match self.typed(field, ParamType::Float64)? {
            ParamValue::Float64(v) => Ok(*v),
            other => Err(mismatch(field, other, ParamType::Float64)),
        }
    }

    /// Read a declared `[]int` parameter.
    pub fn int_array(&self, field: &str) -> Result<&[i64], LookupError> {
        match self.typed(field, ParamType::IntArray)? {
            ParamValue::IntArray(v) => Ok(v.as_slice()),
            other => Err(mismatch(field, other, ParamType::IntArray)),
        }
    }

    fn typed(&self, field: &str, requested: ParamType) -> Result<&ParamValue, LookupError> {
        let value = self
            .values
            .get(field)
            .ok_or_else(|| LookupError::UndeclaredParameter {
                field: field.to_string(),
            })?;
        if value.param_type() != requested {
            return Err(mismatch(field, value, requested));
        }
        Ok(value)
    }
}

fn mismatch(field: &str, value: &ParamValue, requested: ParamType) -> LookupError {
    LookupError::ParameterTypeMismatch {
        field: field.to_string(),
        declared: value.param_type(),
        requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> ResolvedParams {
        let mut params = ResolvedParams::new();
        params.insert("min", ParamValue::Int(-3));
        params.insert("ratio", ParamValue::Float64(0.5));
        params.insert("ints", ParamValue::IntArray(vec![1, 2]));
        params
    }

    #[test]
    fn test_typed_reads() {
        let params = resolved();
        assert_eq!(params.int("min").unwrap(), -3);
        assert_eq!(params.float64("ratio").unwrap(), 0.5);
        assert_eq!(params.int_array("ints").unwrap(), &[1, 2]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_undeclared_read() {
        let err = resolved().int("max").unwrap_err();
        assert_eq!(
            err,
            LookupError::UndeclaredParameter {
                field: "max".to_string()
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = resolved().float32("min").unwrap_err();
        assert_eq!(
            err,
            LookupError::ParameterTypeMismatch {
                field: "min".to_string(),
                declared: ParamType::Int,
                requested: ParamType::Float32,
            }
        );
    }
}
