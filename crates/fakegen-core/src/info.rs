//! Generator descriptors and the parameter extraction layer.

use crate::error::{LookupError, RegistryError};
use crate::param::{parse_int_array, parse_scalar, Param, ParamType};
use crate::raw::RawParams;
use crate::resolved::ResolvedParams;
use crate::value::LookupValue;
use rand::RngCore;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Invocation function of a generator.
///
/// Receives the declared parameters already resolved and the caller's
/// random source.
pub type CallFn = Box<
    dyn Fn(&ResolvedParams, &mut dyn RngCore) -> Result<LookupValue, LookupError> + Send + Sync,
>;

/// Descriptor of one named generator.
///
/// Serializes to its metadata only; the invocation closure is skipped.
#[derive(Serialize)]
pub struct Info {
    category: String,
    description: String,
    example: String,
    params: Vec<Param>,
    #[serde(skip)]
    call_fn: CallFn,
}

impl Info {
    /// Create a descriptor without parameters.
    pub fn new<F>(
        category: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
        call: F,
    ) -> Self
    where
        F: Fn(&ResolvedParams, &mut dyn RngCore) -> Result<LookupValue, LookupError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            category: category.into(),
            description: description.into(),
            example: example.into(),
            params: Vec::new(),
            call_fn: Box::new(call),
        }
    }

    /// Declare a parameter. Declaration order is kept for documentation.
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Grouping label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Literal sample output.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Declared parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Get a declared parameter by name.
    pub fn param(&self, field: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.field == field)
    }

    /// Extract a signed integer parameter.
    pub fn get_int(&self, params: &RawParams, field: &str) -> Result<i64, LookupError> {
        self.extract(params, field, |field, values| {
            parse_scalar(field, values, ParamType::Int)
        })
    }

    /// Extract an unsigned integer parameter.
    pub fn get_uint(&self, params: &RawParams, field: &str) -> Result<u64, LookupError> {
        self.extract(params, field, |field, values| {
            parse_scalar(field, values, ParamType::Uint)
        })
    }

    /// Extract a 32-bit float parameter.
    pub fn get_float32(&self, params: &RawParams, field: &str) -> Result<f32, LookupError> {
        self.extract(params, field, |field, values| {
            parse_scalar(field, values, ParamType::Float32)
        })
    }

    /// Extract a 64-bit float parameter.
    pub fn get_float64(&self, params: &RawParams, field: &str) -> Result<f64, LookupError> {
        self.extract(params, field, |field, values| {
            parse_scalar(field, values, ParamType::Float64)
        })
    }

    /// Extract a comma-delimited integer array parameter.
    pub fn get_int_array(&self, params: &RawParams, field: &str) -> Result<Vec<i64>, LookupError> {
        self.extract(params, field, parse_int_array)
    }

    /// Resolve every declared parameter against the bag, in declaration order.
    ///
    /// Stops at the first parameter that is missing or malformed.
    pub fn resolve(&self, params: &RawParams) -> Result<ResolvedParams, LookupError> {
        let mut resolved = ResolvedParams::new();
        for param in &self.params {
            let value = self.extract(params, &param.field, |field, values| {
                param.param_type.parse(field, values)
            })?;
            resolved.insert(param.field.clone(), value);
        }
        Ok(resolved)
    }

    /// Resolve the declared parameters and invoke the generator.
    pub fn call(
        &self,
        params: &RawParams,
        rng: &mut dyn RngCore,
    ) -> Result<LookupValue, LookupError> {
        let resolved = self.resolve(params)?;
        (self.call_fn)(&resolved, rng)
    }

    /// Check the declared schema before registration.
    pub(crate) fn validate(&self, name: &str) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for param in &self.params {
            if !seen.insert(param.field.as_str()) {
                return Err(RegistryError::DuplicateParam {
                    generator: name.to_string(),
                    field: param.field.clone(),
                });
            }
            if let Some(default) = &param.default {
                param
                    .param_type
                    .parse(&param.field, &[default.as_str()])
                    .map_err(|source| RegistryError::InvalidDefault {
                        generator: name.to_string(),
                        field: param.field.clone(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    /// Apply the bag value, else the declared default, else fail as missing.
    fn extract<T, F>(&self, params: &RawParams, field: &str, parse: F) -> Result<T, LookupError>
    where
        F: FnOnce(&str, &[&str]) -> Result<T, LookupError>,
    {
        if let Some(values) = params.get(field) {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            return parse(field, &values);
        }

        match self.param(field).and_then(|p| p.default.as_deref()) {
            Some(default) => parse(field, &[default]),
            None => Err(LookupError::missing(field)),
        }
    }
}

impl fmt::Debug for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Info")
            .field("category", &self.category)
            .field("description", &self.description)
            .field("example", &self.example)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
