//! End-to-end lookups through the default registry.

use fakegen::{Faker, LookupError, LookupValue, ParamType, RawParams};
use std::collections::HashSet;

fn faker() -> Faker {
    Faker::new(42).unwrap()
}

#[test]
fn test_number_stays_within_bounds() {
    let mut faker = faker();
    let params = RawParams::new().with("min", "-3").with("max", "3");
    let mut seen = HashSet::new();

    for _ in 0..2000 {
        let value = faker.lookup("number", &params).unwrap();
        let v = value.as_i64().unwrap();
        assert!((-3..=3).contains(&v));
        seen.insert(v);
    }

    // Both boundaries are reachable
    assert!(seen.contains(&-3));
    assert!(seen.contains(&3));
}

#[test]
fn test_number_rejects_inverted_range() {
    let mut faker = faker();
    let params = RawParams::new().with("min", "10").with("max", "5");

    let err = faker.lookup("number", &params).unwrap_err();
    assert!(matches!(err, LookupError::Validation(_)));
}

#[test]
fn test_number_default_round_trip() {
    let mut faker = faker();

    // Only min supplied: max falls back to its declared default
    let params = RawParams::new().with("min", "2147483647");
    assert_eq!(
        faker.lookup("number", &params).unwrap(),
        LookupValue::Int64(2147483647)
    );

    // Explicit max overrides the default
    let params = RawParams::new().with("min", "5").with("max", "5");
    assert_eq!(faker.lookup("number", &params).unwrap(), LookupValue::Int64(5));
}

#[test]
fn test_number_malformed_min() {
    let mut faker = faker();
    let params = RawParams::new().with("min", "abc");

    let err = faker.lookup("number", &params).unwrap_err();
    assert_eq!(
        err,
        LookupError::MalformedParameter {
            field: "min".to_string(),
            value: "abc".to_string(),
            expected: ParamType::Int,
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter 'min' value 'abc' could not be parsed as int"
    );
}

#[test]
fn test_unknown_generator_is_distinguishable() {
    let mut faker = faker();
    let err = faker.lookup("not_registered", &RawParams::new()).unwrap_err();

    assert_eq!(
        err,
        LookupError::UnknownGenerator("not_registered".to_string())
    );
    assert!(faker.registry().lookup("not_registered").is_none());
}

#[test]
fn test_fixed_width_domains() {
    let mut faker = faker();
    let params = RawParams::new();

    for _ in 0..10_000 {
        match faker.lookup("int8", &params).unwrap() {
            LookupValue::Int8(_) => {}
            other => panic!("Expected Int8, got {other:?}"),
        }
        match faker.lookup("uint16", &params).unwrap() {
            LookupValue::Uint16(_) => {}
            other => panic!("Expected Uint16, got {other:?}"),
        }
    }
}

#[test]
fn test_shuffleints_is_a_permutation() {
    let mut faker = faker();

    for input in ["1,2,3,4", "7", "", "5,5,1"] {
        let params = RawParams::new().with("ints", input);
        let value = faker.lookup("shuffleints", &params).unwrap();

        let mut expected: Vec<i64> = input
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        let mut actual = value.into_int_array().unwrap();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected, "input {input:?}");
    }
}

#[test]
fn test_shuffleints_multi_valued_param() {
    let mut faker = faker();
    let params = RawParams::new().with("ints", "1,2").with("ints", "3");

    let mut ints = faker
        .lookup("shuffleints", &params)
        .unwrap()
        .into_int_array()
        .unwrap();
    ints.sort_unstable();
    assert_eq!(ints, vec![1, 2, 3]);
}

#[test]
fn test_results_render_as_text_and_json() {
    let mut faker = faker();
    let params = RawParams::new().with("ints", "4");

    let value = faker.lookup("shuffleints", &params).unwrap();
    assert_eq!(value.to_string(), "4");
    assert_eq!(serde_json::to_string(&value).unwrap(), "[4]");
}

#[test]
fn test_catalog_describes_every_generator() {
    let faker = faker();
    let catalog = serde_json::to_value(faker.registry().catalog()).unwrap();
    let entries = catalog.as_array().unwrap();

    assert_eq!(entries.len(), faker.registry().len());
    for entry in entries {
        assert_eq!(entry["category"], "number");
        assert!(entry["description"].as_str().is_some_and(|d| !d.is_empty()));
        assert!(entry["example"].is_string());
    }

    let number = entries.iter().find(|e| e["name"] == "number").unwrap();
    assert_eq!(number["params"][0]["field"], "min");
    assert_eq!(number["params"][0]["default"], "-2147483648");
}

#[test]
fn test_forked_workers_share_registry() {
    let faker = faker();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let mut worker_faker = faker.fork(worker);
            std::thread::spawn(move || {
                let params = RawParams::new().with("min", "0").with("max", "9");
                (0..100)
                    .map(|_| worker_faker.lookup("number", &params).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let values = handle.join().unwrap();
        assert_eq!(values.len(), 100);
        assert!(values
            .iter()
            .all(|v| (0..=9).contains(&v.as_i64().unwrap())));
    }
}
