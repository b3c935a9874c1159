//! Random number generators for fakegen.
//!
//! This crate provides the numeric generator functions and registers them
//! into a [`fakegen_core::Registry`] under the `number` category.
//!
//! # Example
//!
//! ```rust
//! use fakegen_core::{RawParams, Registry};
//! use fakegen_number::add_number_lookup;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut registry = Registry::new();
//! add_number_lookup(&mut registry).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let params = RawParams::new().with("min", "1").with("max", "6");
//! let roll = registry.call("number", &params, &mut rng).unwrap();
//! assert!((1..=6).contains(&roll.as_i64().unwrap()));
//! ```
//!
//! # Generators
//!
//! - `number` - Integer in `[min, max]` (defaults to the int32 domain)
//! - `intrange` / `uintrange` - Integer in `[min, max]` over the 64-bit domains
//! - `int8` .. `int64`, `uint8` .. `uint64` - Full-domain fixed width integers
//! - `float32` / `float64` - Positive float up to the type's maximum
//! - `float32range` / `float64range` - Float in `[min, max]`
//! - `shuffleints` - Random permutation of an int list
//! - `randomint` - Random element of an int list

pub mod lookup;
pub mod numeric;

// Re-exports for convenience
pub use lookup::{add_number_lookup, CATEGORY};
