//! YAML configuration for the generator facade.
//!
//! ```yaml
//! seed: 42
//! overrides:
//!   number:
//!     min: 1
//!     max: 100
//!   shuffleints:
//!     ints: [1, 2, 3]
//! ```

use fakegen_core::{RawParams, Registry, RegistryError};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Override names a generator that is not registered
    #[error("Override for unknown generator: {0}")]
    UnknownGenerator(String),

    /// Override value is unusable for its parameter
    #[error("Invalid override '{field}' for generator '{generator}': {reason}")]
    InvalidOverride {
        generator: String,
        field: String,
        reason: String,
    },

    /// Building the registry failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Facade configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FakerConfig {
    /// RNG seed; entropy is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Per-generator parameter defaults, applied beneath request parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, BTreeMap<String, YamlValue>>,
}

impl FakerConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Set the seed, replacing any configured one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convert the overrides into parameter bags, checked against `registry`.
    ///
    /// Every override must name a registered generator and one of its
    /// declared parameters, and its value must parse as that parameter's type.
    pub fn override_params(
        &self,
        registry: &Registry,
    ) -> Result<HashMap<String, RawParams>, ConfigError> {
        let mut bags = HashMap::new();

        for (generator, fields) in &self.overrides {
            let info = registry
                .lookup(generator)
                .ok_or_else(|| ConfigError::UnknownGenerator(generator.clone()))?;

            let mut bag = RawParams::new();
            for (field, value) in fields {
                let invalid = |reason: String| ConfigError::InvalidOverride {
                    generator: generator.clone(),
                    field: field.clone(),
                    reason,
                };

                let param = info
                    .param(field)
                    .ok_or_else(|| invalid("parameter is not declared".to_string()))?;
                let values = yaml_to_param_values(value).map_err(invalid)?;
                let refs: Vec<&str> = values.iter().map(String::as_str).collect();
                param
                    .param_type
                    .parse(field, &refs)
                    .map_err(|e| invalid(e.to_string()))?;

                bag.set(field.clone(), values);
            }
            bags.insert(generator.clone(), bag);
        }

        Ok(bags)
    }
}

/// Convert a YAML override value into raw string parameter values.
fn yaml_to_param_values(yaml: &YamlValue) -> Result<Vec<String>, String> {
    match yaml {
        YamlValue::Sequence(items) => items.iter().map(yaml_scalar_to_string).collect(),
        other => yaml_scalar_to_string(other).map(|value| vec![value]),
    }
}

fn yaml_scalar_to_string(yaml: &YamlValue) -> Result<String, String> {
    match yaml {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
        YamlValue::Null => Err("null is not a parameter value".to_string()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err("expected a scalar or a list of scalars".to_string())
        }
    }
}
