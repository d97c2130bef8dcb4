//! Imputed Cost Configuration
//!
//! Serializable description of all cost namespaces, as handed over by the
//! configuration loader. Nothing is validated beyond parsing: out-of-range
//! rates are capped at evaluation time, and a repeated namespace name or
//! directed pair resolves to its last entry.
//!
//! # Example
//!
//! ```rust
//! use imputed_cost_core_rs::config::ImputedCostConfig;
//! use imputed_cost_core_rs::costs::ImputedCostManager;
//!
//! let json = format!(
//!     r#"{{
//!         "namespaces": [{{
//!             "name": "untrusted-peers",
//!             "default_params": {{ "cost_rate_ppm": 1000, "cost_base_msat": 100 }},
//!             "pairs": [{{
//!                 "from": "{a}",
//!                 "to": "{b}",
//!                 "cost_rate_ppm": 2000,
//!                 "cost_base_msat": 200
//!             }}]
//!         }}]
//!     }}"#,
//!     a = "02".repeat(33),
//!     b = "03".repeat(33),
//! );
//!
//! let config = ImputedCostConfig::from_json(&json).unwrap();
//! let manager = ImputedCostManager::from_config(config).unwrap();
//! assert!(manager.contains_namespace("untrusted-peers"));
//! ```

use crate::costs::namespace::CostNamespace;
use crate::costs::params::CostParameters;
use crate::models::vertex::{DirectedNodePair, Vertex};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while loading or hashing a configuration
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Config serialization failed: {0}")]
    Serialization(String),
}

/// Pair-specific override within a namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairConfig {
    pub from: Vertex,
    pub to: Vertex,

    #[serde(flatten)]
    pub params: CostParameters,
}

/// One named namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    pub name: String,

    #[serde(default)]
    pub default_params: CostParameters,

    #[serde(default)]
    pub pairs: Vec<PairConfig>,
}

impl NamespaceConfig {
    fn to_namespace(&self) -> CostNamespace {
        let mut ns = CostNamespace::new(self.default_params);
        for pair in &self.pairs {
            ns.insert_pair(pair.from, pair.to, pair.params);
        }
        ns
    }
}

/// Complete imputed cost configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImputedCostConfig {
    #[serde(default)]
    pub namespaces: Vec<NamespaceConfig>,
}

impl ImputedCostConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Build the namespaces described by this config
    ///
    /// Later entries win: a repeated pair overrides the earlier one within
    /// its namespace, and a repeated name is left for the caller to resolve
    /// (collecting into a map keeps the last).
    pub fn into_namespaces(self) -> Vec<(String, CostNamespace)> {
        self.namespaces
            .into_iter()
            .map(|ns| {
                let namespace = ns.to_namespace();
                (ns.name, namespace)
            })
            .collect()
    }

    /// SHA256 of the canonical JSON form
    ///
    /// Namespaces are ordered by name and pairs by direction before hashing,
    /// so two configs describing the same namespaces hash equal regardless
    /// of listing order.
    pub fn config_hash(&self) -> Result<String, ConfigError> {
        let mut canonical = self.clone();
        canonical.namespaces.sort_by(|a, b| a.name.cmp(&b.name));
        for ns in &mut canonical.namespaces {
            ns.pairs.sort_by_key(|p| DirectedNodePair::new(p.from, p.to));
        }

        // serde_json::Value objects keep keys sorted
        let value = serde_json::to_value(&canonical)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        let json = serde_json::to_string(&value)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
