//! Name-indexed table of generator descriptors.

use crate::error::{LookupError, RegistryError};
use crate::info::Info;
use crate::raw::RawParams;
use crate::value::LookupValue;
use rand::RngCore;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, trace};

/// Registry of named generators.
///
/// Built once during initialization and read-only afterwards. The registry
/// holds no random state, so a single instance can be shared across threads
/// (e.g. behind an `Arc`) while each worker supplies its own random source.
#[derive(Default)]
pub struct Registry {
    lookups: BTreeMap<String, Info>,
}

/// Introspection entry pairing a generator name with its descriptor.
#[derive(Debug, Serialize)]
pub struct CatalogEntry<'a> {
    /// Registered generator name
    pub name: &'a str,

    /// Descriptor metadata
    #[serde(flatten)]
    pub info: &'a Info,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under `name`.
    ///
    /// Fails if the name is empty or already taken, if the descriptor
    /// declares a parameter twice, or if a declared default does not parse
    /// as its parameter type. On failure the registry is left unchanged.
    pub fn add_lookup_data(
        &mut self,
        name: impl Into<String>,
        info: Info,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.lookups.contains_key(&name) {
            return Err(RegistryError::DuplicateGenerator(name));
        }
        info.validate(&name)?;

        debug!(
            generator = %name,
            category = info.category(),
            params = info.params().len(),
            "Registered generator"
        );
        self.lookups.insert(name, info);
        Ok(())
    }

    /// Get the descriptor registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&Info> {
        self.lookups.get(name)
    }

    /// Invoke the generator registered under `name`.
    pub fn call(
        &self,
        name: &str,
        params: &RawParams,
        rng: &mut dyn RngCore,
    ) -> Result<LookupValue, LookupError> {
        let info = self
            .lookup(name)
            .ok_or_else(|| LookupError::UnknownGenerator(name.to_string()))?;

        trace!(generator = name, "Invoking generator");
        info.call(params, rng).map_err(|e| {
            debug!(generator = name, error = %e, "Generator invocation failed");
            e
        })
    }

    /// Check if a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.lookups.contains_key(name)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    /// Check if no generators are registered.
    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lookups.keys().map(String::as_str)
    }

    /// Registered generators in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Info)> {
        self.lookups.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Distinct categories of the registered generators.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.lookups.values().map(Info::category).collect()
    }

    /// Registered generators belonging to `category`.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Info)> + 'a {
        self.iter().filter(move |(_, info)| info.category() == category)
    }

    /// Serializable listing of every generator, sorted by name.
    pub fn catalog(&self) -> Vec<CatalogEntry<'_>> {
        self.iter()
            .map(|(name, info)| CatalogEntry { name, info })
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("lookups", &self.lookups.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{Param, ParamType};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn test_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_lookup_data(
                "digit",
                Info::new("number", "Random digit", "7", |_, rng| {
                    Ok(LookupValue::Uint8(rng.gen_range(0..=9)))
                }),
            )
            .unwrap();
        registry
            .add_lookup_data(
                "between",
                Info::new("number", "Random integer in range", "3", |args, rng| {
                    let min = args.int("min")?;
                    let max = args.int("max")?;
                    if min > max {
                        return Err(LookupError::validation("max must not be less than min"));
                    }
                    Ok(LookupValue::Int64(rng.gen_range(min..=max)))
                })
                .with_param(Param::new("min", ParamType::Int, "Minimum").with_default("0"))
                .with_param(Param::new("max", ParamType::Int, "Maximum").with_default("5")),
            )
            .unwrap();
        registry
            .add_lookup_data(
                "word_count",
                Info::new("text", "Random word count", "12", |_, rng| {
                    Ok(LookupValue::Uint16(rng.gen_range(1..=100)))
                }),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_lookup_registered() {
        let registry = test_registry();
        let info = registry.lookup("digit").unwrap();
        assert_eq!(info.category(), "number");
        assert_eq!(info.example(), "7");
        assert!(registry.contains("between"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = test_registry();
        assert!(registry.lookup("nonexistent").is_none());

        let mut rng = StdRng::seed_from_u64(42);
        let err = registry
            .call("nonexistent", &RawParams::new(), &mut rng)
            .unwrap_err();
        assert_eq!(err, LookupError::UnknownGenerator("nonexistent".to_string()));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = test_registry();
        let result = registry.add_lookup_data(
            "digit",
            Info::new("other", "Replacement", "0", |_, _| Ok(LookupValue::Int8(0))),
        );

        assert!(matches!(result, Err(RegistryError::DuplicateGenerator(ref n)) if n == "digit"));
        assert_eq!(registry.lookup("digit").unwrap().category(), "number");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = Registry::new();
        let result = registry.add_lookup_data(
            " ",
            Info::new("number", "Nameless", "0", |_, _| Ok(LookupValue::Int8(0))),
        );
        assert!(matches!(result, Err(RegistryError::EmptyName)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_call_with_defaults_and_overrides() {
        let registry = test_registry();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = registry.call("between", &RawParams::new(), &mut rng).unwrap();
            assert!((0..=5).contains(&value.as_i64().unwrap()));
        }

        let params = RawParams::new().with("min", "100").with("max", "100");
        let value = registry.call("between", &params, &mut rng).unwrap();
        assert_eq!(value, LookupValue::Int64(100));
    }

    #[test]
    fn test_call_validation_failure() {
        let registry = test_registry();
        let mut rng = StdRng::seed_from_u64(42);
        let params = RawParams::new().with("min", "10").with("max", "5");

        let err = registry.call("between", &params, &mut rng).unwrap_err();
        assert!(matches!(err, LookupError::Validation(_)));
    }

    #[test]
    fn test_categories_and_filter() {
        let registry = test_registry();
        let categories: Vec<_> = registry.categories().into_iter().collect();
        assert_eq!(categories, vec!["number", "text"]);

        let names: Vec<_> = registry.in_category("number").map(|(n, _)| n).collect();
        assert_eq!(names, vec!["between", "digit"]);
    }

    #[test]
    fn test_catalog_serialization() {
        let registry = test_registry();
        let json = serde_json::to_value(registry.catalog()).unwrap();
        let entries = json.as_array().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["name"], "between");
        assert_eq!(entries[0]["category"], "number");
        assert_eq!(entries[0]["params"][1]["field"], "max");
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
