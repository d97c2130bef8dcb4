//! Imputed Cost Manager
//!
//! Thread-safe registry of cost namespaces by name and the sole factory for
//! models and controls bound to a namespace.
//!
//! # Concurrency
//!
//! Lookups take a read lock for the duration of one map access, so any
//! number of pathfinding workers can resolve namespaces concurrently.
//! Registration and config reloads take the write lock. Registered
//! namespaces are frozen behind an `Arc`; models keep the snapshot they were
//! created with even if the name is later re-registered.

use super::control::ImputedCostControl;
use super::error::ImputedCostError;
use super::model::LinearCostModel;
use super::namespace::CostNamespace;
use crate::config::{ConfigError, ImputedCostConfig};
use crate::models::amount::MilliSatoshi;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

#[derive(Debug, Default)]
struct Registry {
    namespaces: HashMap<String, Arc<CostNamespace>>,

    /// SHA256 of the last config applied via `apply_config`; cleared by
    /// `insert_namespace`
    config_hash: Option<String>,
}

/// Registry of imputed cost namespaces
///
/// Meant to be created once at routing-engine startup and passed to the
/// pathfinder explicitly; there is no global instance.
///
/// # Example
/// ```
/// use imputed_cost_core_rs::costs::{CostNamespace, CostParameters, ImputedCostManager};
/// use imputed_cost_core_rs::{ImputedCostError, MilliSatoshi};
///
/// let manager = ImputedCostManager::new();
/// manager.insert_namespace("trust", CostNamespace::new(CostParameters::new(1000, 100, 0, 0)));
///
/// let control = manager
///     .get_namespaced_control("trust", Some(MilliSatoshi::new(10_000)), None)
///     .unwrap();
/// assert_eq!(control.cost_limit(), Some(MilliSatoshi::new(10_000)));
///
/// assert_eq!(
///     manager.get_namespaced_model("").unwrap_err(),
///     ImputedCostError::NamespaceNotFound(String::new())
/// );
/// ```
#[derive(Debug, Default)]
pub struct ImputedCostManager {
    registry: RwLock<Registry>,
}

impl ImputedCostManager {
    /// Create a manager with no namespaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager populated from a configuration
    pub fn from_config(config: ImputedCostConfig) -> Result<Self, ConfigError> {
        let manager = Self::new();
        manager.apply_config(config)?;
        Ok(manager)
    }

    // A panicking writer cannot leave the map half-updated (every write is
    // a single insert or swap), so poisoned locks are recovered.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `ns` under `name`, replacing and returning any previous entry
    pub fn insert_namespace(
        &self,
        name: impl Into<String>,
        ns: CostNamespace,
    ) -> Option<Arc<CostNamespace>> {
        let name = name.into();
        let pair_count = ns.pair_count();
        let previous = {
            let mut registry = self.write();
            // The registry no longer matches any applied config
            registry.config_hash = None;
            registry.namespaces.insert(name.clone(), Arc::new(ns))
        };

        info!(
            namespace = %name,
            pair_count,
            replaced = previous.is_some(),
            "registered imputed cost namespace"
        );
        previous
    }

    /// Replace the whole registry with the namespaces in `config`
    ///
    /// The namespaces are built before the write lock is taken; readers
    /// observe either the old registry or the new one, never a mix. A name
    /// listed twice keeps its last entry.
    pub fn apply_config(&self, config: ImputedCostConfig) -> Result<(), ConfigError> {
        let hash = config.config_hash()?;
        let namespaces: HashMap<String, Arc<CostNamespace>> = config
            .into_namespaces()
            .into_iter()
            .map(|(name, ns)| (name, Arc::new(ns)))
            .collect();
        let count = namespaces.len();

        {
            let mut registry = self.write();
            registry.namespaces = namespaces;
            registry.config_hash = Some(hash.clone());
        }

        info!(namespaces = count, config_hash = %hash, "applied imputed cost config");
        Ok(())
    }

    /// Hash of the applied config, or `None` if the registry has been
    /// changed by `insert_namespace` since (or no config was ever applied)
    pub fn config_hash(&self) -> Option<String> {
        self.read().config_hash.clone()
    }

    pub fn contains_namespace(&self, name: &str) -> bool {
        self.read().namespaces.contains_key(name)
    }

    /// Registered namespace names in sorted order
    pub fn namespace_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().namespaces.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().namespaces.is_empty()
    }

    /// Linear cost model bound to the namespace `name`
    ///
    /// # Errors
    /// `NamespaceNotFound` if no namespace is registered under `name`. The
    /// empty string is not special and fails the same way.
    pub fn get_namespaced_model(&self, name: &str) -> Result<LinearCostModel, ImputedCostError> {
        self.read()
            .namespaces
            .get(name)
            .map(|ns| LinearCostModel::new(Arc::clone(ns)))
            .ok_or_else(|| ImputedCostError::NamespaceNotFound(name.to_string()))
    }

    /// Fresh per-attempt control bound to the namespace `name`
    ///
    /// # Arguments
    /// * `cost_limit` - Ceiling on real fee plus imputed cost; `None` = unlimited
    /// * `attempt_cost_limit` - Ceiling on attempt cost; `None` = unlimited
    pub fn get_namespaced_control(
        &self,
        name: &str,
        cost_limit: Option<MilliSatoshi>,
        attempt_cost_limit: Option<MilliSatoshi>,
    ) -> Result<ImputedCostControl, ImputedCostError> {
        let model = self.get_namespaced_model(name)?;
        Ok(ImputedCostControl::new(model, cost_limit, attempt_cost_limit))
    }
}
