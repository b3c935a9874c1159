//! Core types for the fakegen generator registry.
//!
//! This crate provides the dynamic-dispatch layer that lets callers request a
//! typed random value knowing only a generator name and a bag of string
//! parameters:
//!
//! - [`Param`] / [`ParamType`] - Declared parameter schema of a generator
//! - [`RawParams`] - String-keyed, multi-valued parameter bag supplied per request
//! - [`Info`] - Generator descriptor with metadata, params and invocation closure
//! - [`ResolvedParams`] - Typed arguments resolved from a bag against the schema
//! - [`Registry`] - Name-indexed table of descriptors, built once at startup
//! - [`LookupValue`] - Tagged union of generator results
//!
//! # Architecture
//!
//! ```text
//! fakegen-core (this crate)
//!    │
//!    ├─── fakegen-number   (registers the `number` category)
//!    │
//!    └─── fakegen          (facade, configuration, CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakegen_core::{Info, LookupValue, Param, ParamType, RawParams, Registry};
//! use rand::rngs::StdRng;
//! use rand::{Rng, SeedableRng};
//!
//! let mut registry = Registry::new();
//! registry
//!     .add_lookup_data(
//!         "dice",
//!         Info::new("number", "Roll an n-sided die", "4", |args, rng| {
//!             let sides = args.int("sides")?;
//!             Ok(LookupValue::Int64(rng.gen_range(1..=sides)))
//!         })
//!         .with_param(Param::new("sides", ParamType::Int, "Number of sides").with_default("6")),
//!     )
//!     .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let value = registry.call("dice", &RawParams::new(), &mut rng).unwrap();
//! assert!((1..=6).contains(&value.as_i64().unwrap()));
//! ```

pub mod error;
pub mod info;
pub mod param;
pub mod raw;
pub mod registry;
pub mod resolved;
pub mod value;

// Re-exports for convenience
pub use error::{LookupError, RegistryError};
pub use info::{CallFn, Info};
pub use param::{Param, ParamType, ParamValue};
pub use raw::RawParams;
pub use registry::{CatalogEntry, Registry};
pub use resolved::ResolvedParams;
pub use value::LookupValue;
