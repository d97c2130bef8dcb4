//! Cost Namespaces
//!
//! A namespace bundles one policy configuration: default parameters plus
//! pair-specific overrides. Namespaces are built up front and become
//! immutable once registered with the manager (which wraps them in an `Arc`).

use super::params::CostParameters;
use crate::models::vertex::{DirectedNodePair, Vertex};
use std::collections::HashMap;

/// Default and pair-specific imputed cost parameters
///
/// # Example
/// ```
/// use imputed_cost_core_rs::costs::{CostNamespace, CostParameters};
/// use imputed_cost_core_rs::Vertex;
///
/// let a = Vertex::new([1; 33]);
/// let b = Vertex::new([2; 33]);
///
/// let ns = CostNamespace::new(CostParameters::new(1000, 100, 0, 0))
///     .with_pair(a, b, CostParameters::new(2000, 200, 0, 0));
///
/// assert_eq!(ns.get_node_pair_params(&a, &b).cost_rate_ppm, 2000);
/// // No fallback to the reverse direction
/// assert_eq!(ns.get_node_pair_params(&b, &a).cost_rate_ppm, 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostNamespace {
    /// Applied to every pair without an explicit entry
    default_params: CostParameters,

    /// Directed pair overrides
    pair_params: HashMap<DirectedNodePair, CostParameters>,
}

impl CostNamespace {
    pub fn new(default_params: CostParameters) -> Self {
        Self {
            default_params,
            pair_params: HashMap::new(),
        }
    }

    /// Builder form of `insert_pair`
    pub fn with_pair(mut self, from: Vertex, to: Vertex, params: CostParameters) -> Self {
        self.insert_pair(from, to, params);
        self
    }

    /// Set the parameters for `from → to`, returning any previous entry
    pub fn insert_pair(
        &mut self,
        from: Vertex,
        to: Vertex,
        params: CostParameters,
    ) -> Option<CostParameters> {
        self.pair_params
            .insert(DirectedNodePair::new(from, to), params)
    }

    /// Resolve the parameters for `from → to`
    ///
    /// Returns the pair-specific entry if present, otherwise the namespace
    /// default. Never falls back to the `to → from` entry.
    pub fn get_node_pair_params(&self, from: &Vertex, to: &Vertex) -> CostParameters {
        let pair = DirectedNodePair::new(*from, *to);
        self.pair_params
            .get(&pair)
            .copied()
            .unwrap_or(self.default_params)
    }

    pub fn default_params(&self) -> CostParameters {
        self.default_params
    }

    pub fn pair_count(&self) -> usize {
        self.pair_params.len()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&DirectedNodePair, &CostParameters)> {
        self.pair_params.iter()
    }
}
