//! Parameter schema and string-to-type coercion.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical type tag of a generator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    /// Signed 64-bit integer
    #[serde(rename = "int")]
    Int,

    /// Unsigned 64-bit integer
    #[serde(rename = "uint")]
    Uint,

    /// 32-bit float
    #[serde(rename = "float32")]
    Float32,

    /// 64-bit float
    #[serde(rename = "float64")]
    Float64,

    /// Comma-delimited list of signed integers
    #[serde(rename = "[]int")]
    IntArray,
}

impl ParamType {
    /// The tag used in introspection output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Uint => "uint",
            ParamType::Float32 => "float32",
            ParamType::Float64 => "float64",
            ParamType::IntArray => "[]int",
        }
    }

    /// Parse raw string values into a typed value of this type.
    ///
    /// Scalar types consult only the first value. `IntArray` consults
    /// every value and splits each on `,`.
    pub fn parse(self, field: &str, values: &[&str]) -> Result<ParamValue, LookupError> {
        match self {
            ParamType::Int => parse_scalar(field, values, self).map(ParamValue::Int),
            ParamType::Uint => parse_scalar(field, values, self).map(ParamValue::Uint),
            ParamType::Float32 => parse_scalar(field, values, self).map(ParamValue::Float32),
            ParamType::Float64 => parse_scalar(field, values, self).map(ParamValue::Float64),
            ParamType::IntArray => parse_int_array(field, values).map(ParamValue::IntArray),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value after coercion from its raw string form.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    IntArray(Vec<i64>),
}

impl ParamValue {
    /// The type tag this value was parsed as.
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Int(_) => ParamType::Int,
            ParamValue::Uint(_) => ParamType::Uint,
            ParamValue::Float32(_) => ParamType::Float32,
            ParamValue::Float64(_) => ParamType::Float64,
            ParamValue::IntArray(_) => ParamType::IntArray,
        }
    }
}

/// Declared input of a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name, unique within a descriptor
    pub field: String,

    /// Logical type of the parameter
    #[serde(rename = "type")]
    pub param_type: ParamType,

    /// String-encoded default applied when the parameter is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Human readable description
    pub description: String,
}

impl Param {
    /// Create a required parameter (no default).
    pub fn new(
        field: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            param_type,
            default: None,
            description: description.into(),
        }
    }

    /// Set the string-encoded default.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether a value must be supplied by the caller.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

pub(crate) fn parse_scalar<T: FromStr>(
    field: &str,
    values: &[&str],
    expected: ParamType,
) -> Result<T, LookupError> {
    let raw = values.first().ok_or_else(|| LookupError::missing(field))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| LookupError::malformed(field, raw, expected))
}

pub(crate) fn parse_int_array(field: &str, values: &[&str]) -> Result<Vec<i64>, LookupError> {
    if values.is_empty() {
        return Err(LookupError::missing(field));
    }

    let mut ints = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        for item in trimmed.split(',') {
            let parsed = item
                .trim()
                .parse::<i64>()
                .map_err(|_| LookupError::malformed(field, value, ParamType::IntArray))?;
            ints.push(parsed);
        }
    }
    Ok(ints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        let value = ParamType::Int.parse("min", &[" -42 "]).unwrap();
        assert_eq!(value, ParamValue::Int(-42));
    }

    #[test]
    fn test_parse_only_first_scalar_value() {
        let value = ParamType::Uint.parse("max", &["7", "not-a-number"]).unwrap();
        assert_eq!(value, ParamValue::Uint(7));
    }

    #[test]
    fn test_parse_malformed_int() {
        let err = ParamType::Int.parse("min", &["abc"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedParameter {
                field: "min".to_string(),
                value: "abc".to_string(),
                expected: ParamType::Int,
            }
        );
    }

    #[test]
    fn test_parse_negative_uint_is_malformed() {
        let err = ParamType::Uint.parse("min", &["-1"]).unwrap_err();
        assert!(matches!(err, LookupError::MalformedParameter { .. }));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(
            ParamType::Float32.parse("min", &["1.5"]).unwrap(),
            ParamValue::Float32(1.5)
        );
        assert_eq!(
            ParamType::Float64.parse("min", &["-2.25"]).unwrap(),
            ParamValue::Float64(-2.25)
        );
        assert!(ParamType::Float64.parse("min", &["1.2.3"]).is_err());
    }

    #[test]
    fn test_parse_int_array() {
        let value = ParamType::IntArray.parse("ints", &["1, 2,3", "4"]).unwrap();
        assert_eq!(value, ParamValue::IntArray(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_empty_int_array() {
        let value = ParamType::IntArray.parse("ints", &[""]).unwrap();
        assert_eq!(value, ParamValue::IntArray(vec![]));
    }

    #[test]
    fn test_parse_int_array_with_gap_is_malformed() {
        let err = ParamType::IntArray.parse("ints", &["1,,2"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedParameter {
                field: "ints".to_string(),
                value: "1,,2".to_string(),
                expected: ParamType::IntArray,
            }
        );
    }

    #[test]
    fn test_parse_without_values_is_missing() {
        let err = ParamType::Int.parse("min", &[]).unwrap_err();
        assert_eq!(
            err,
            LookupError::MissingParameter {
                field: "min".to_string()
            }
        );
    }

    #[test]
    fn test_param_type_tags() {
        assert_eq!(ParamType::IntArray.to_string(), "[]int");
        let json = serde_json::to_string(&ParamType::Float32).unwrap();
        assert_eq!(json, "\"float32\"");
    }

    #[test]
    fn test_param_builder() {
        let param = Param::new("min", ParamType::Int, "Minimum").with_default("5");
        assert_eq!(param.default.as_deref(), Some("5"));
        assert!(!param.is_required());
        assert!(Param::new("ints", ParamType::IntArray, "Ints").is_required());
    }
}
