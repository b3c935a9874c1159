//! Command-line argument helpers.

use anyhow::Context;
use fakegen_core::RawParams;

/// Parse a `key=value` parameter argument.
///
/// The value may be empty (`ints=`) and may itself contain `=`.
pub fn parse_param_pair(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("Invalid parameter '{s}': expected KEY=VALUE"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Invalid parameter '{s}': empty key");
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collect parsed `key=value` pairs into a parameter bag.
///
/// Repeated keys become multiple values of the same field.
pub fn params_from_pairs(pairs: &[(String, String)]) -> RawParams {
    pairs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}
