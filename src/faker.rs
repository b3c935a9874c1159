//! Seeded handle over the shared generator registry.

use crate::config::{ConfigError, FakerConfig};
use fakegen_core::{LookupError, LookupValue, RawParams, Registry, RegistryError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Build a registry holding every built-in generator category.
pub fn default_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    fakegen_number::add_number_lookup(&mut registry)?;
    debug!(generators = registry.len(), "Built default registry");
    Ok(registry)
}

/// Generator handle pairing a shared registry with its own random source.
///
/// The registry and configured overrides are shared between handles; the
/// RNG is not. Use [`Faker::fork`] to give each worker its own handle.
pub struct Faker {
    /// Read-only registry shared across handles
    registry: Arc<Registry>,
    /// Random source owned by this handle
    rng: StdRng,
    /// Configured parameter defaults per generator name
    overrides: Arc<HashMap<String, RawParams>>,
}

impl Faker {
    /// Create a handle over the default registry with a fixed seed.
    pub fn new(seed: u64) -> Result<Self, RegistryError> {
        Ok(Self::with_registry(
            Arc::new(default_registry()?),
            StdRng::seed_from_u64(seed),
        ))
    }

    /// Create a handle over the default registry seeded from OS entropy.
    pub fn from_entropy() -> Result<Self, RegistryError> {
        Ok(Self::with_registry(
            Arc::new(default_registry()?),
            StdRng::from_entropy(),
        ))
    }

    /// Create a handle over an existing registry.
    pub fn with_registry(registry: Arc<Registry>, rng: StdRng) -> Self {
        Self {
            registry,
            rng,
            overrides: Arc::new(HashMap::new()),
        }
    }

    /// Create a handle over the default registry from configuration.
    pub fn from_config(config: &FakerConfig) -> Result<Self, ConfigError> {
        let registry = default_registry()?;
        let overrides = config.override_params(&registry)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            seed = ?config.seed,
            overrides = overrides.len(),
            "Initialized faker from config"
        );
        Ok(Self {
            registry: Arc::new(registry),
            rng,
            overrides: Arc::new(overrides),
        })
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Get a shared handle to the registry.
    pub fn shared_registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Invoke the generator registered under `name`.
    ///
    /// Configured overrides for `name` fill in fields that `params` does
    /// not supply.
    pub fn lookup(&mut self, name: &str, params: &RawParams) -> Result<LookupValue, LookupError> {
        match self.overrides.get(name) {
            Some(base) => {
                let mut merged = params.clone();
                merged.merge_defaults(base);
                self.registry.call(name, &merged, &mut self.rng)
            }
            None => self.registry.call(name, params, &mut self.rng),
        }
    }

    /// Create a handle sharing this handle's registry and overrides with a
    /// new, independently seeded RNG.
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            rng: StdRng::seed_from_u64(seed),
            overrides: Arc::clone(&self.overrides),
        }
    }
}
