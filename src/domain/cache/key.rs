//! Cache key construction

use std::collections::BTreeMap;

/// Separator between the namespace and the serialized parameter set
const PARAM_SEPARATOR: &str = "::";

/// Ordered parameter set for cache key construction
///
/// Backed by a BTreeMap so two parameter sets with the same logical content
/// always serialize identically regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheParams {
    components: BTreeMap<String, String>,
}

impl CacheParams {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Serializes the parameters as `k=v` pairs in sorted key order
    fn serialize(&self) -> String {
        self.components
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builds the cache key for a namespace and parameter set
///
/// An empty parameter set yields exactly the namespace, so parameterless
/// lookups (e.g. the full categories list) use the bare namespace as key.
pub fn build_key(namespace: &str, params: &CacheParams) -> String {
    if params.is_empty() {
        namespace.to_string()
    } else {
        format!("{}{}{}", namespace, PARAM_SEPARATOR, params.serialize())
    }
}
