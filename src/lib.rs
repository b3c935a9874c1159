//! fakegen Library
//!
//! Random values of primitive numeric types, requested by generator name with
//! string-encoded parameters.
//!
//! # Features
//!
//! - Name-indexed registry of generators with declared, typed parameters
//! - Untyped parameter bags coerced and validated against each schema
//! - Tagged results that render as text or JSON
//! - Seeded, reproducible output with per-worker random sources
//! - YAML configuration for the seed and per-generator parameter defaults
//!
//! # Example
//!
//! ```rust
//! use fakegen::{Faker, LookupValue, RawParams};
//!
//! let mut faker = Faker::new(42).unwrap();
//! let params = RawParams::new().with("ints", "1,2,3,4");
//! let shuffled = faker.lookup("shuffleints", &params).unwrap();
//! assert_eq!(shuffled.as_int_array().map(<[i64]>::len), Some(4));
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! fakegen list
//! fakegen info number
//! fakegen --seed 42 lookup number -p min=1 -p max=6 -n 3
//! ```

pub mod cli;
pub mod config;
pub mod faker;

pub use config::{ConfigError, FakerConfig};
pub use faker::{default_registry, Faker};

// Re-export the core and number crates for convenience
pub use fakegen_core::{
    CatalogEntry, Info, LookupError, LookupValue, Param, ParamType, RawParams, Registry,
    RegistryError,
};
pub use fakegen_number as number;
