//! Imputed Cost Models
//!
//! A model answers "what is the imputed cost of sending `amount` over
//! `from → to`". The linear model is the only implementation; the trait is
//! the seam through which `ImputedCostControl` consumes it.

use super::namespace::CostNamespace;
use crate::models::amount::MilliSatoshi;
use crate::models::vertex::Vertex;
use std::sync::Arc;

/// Imputed cost calculation for directed node pairs
///
/// Two kinds of cost are supported: cost that only applies when the payment
/// succeeds, and attempt cost that applies regardless of the outcome.
/// Implementations must be total over the vertex-pair domain.
pub trait ImputedCostModel: Send + Sync {
    /// Imputed cost incurred only if a payment over `from → to` succeeds
    fn get_cost(&self, from: &Vertex, to: &Vertex, amount: MilliSatoshi) -> MilliSatoshi;

    /// Imputed cost incurred whether or not the payment succeeds
    fn get_attempt_cost(&self, from: &Vertex, to: &Vertex, amount: MilliSatoshi)
        -> MilliSatoshi;
}

/// Linear model: `min(rate, MAX_RATE_PPM) * amount / 1e6 + base`, floored at 0
///
/// Holds a shared reference to a registered namespace; cloning the model is
/// a reference-count bump, not a copy of the parameters.
#[derive(Debug, Clone)]
pub struct LinearCostModel {
    ns: Arc<CostNamespace>,
}

impl LinearCostModel {
    pub fn new(ns: Arc<CostNamespace>) -> Self {
        Self { ns }
    }

    pub fn namespace(&self) -> &CostNamespace {
        &self.ns
    }
}

impl ImputedCostModel for LinearCostModel {
    fn get_cost(&self, from: &Vertex, to: &Vertex, amount: MilliSatoshi) -> MilliSatoshi {
        self.ns.get_node_pair_params(from, to).cost(amount)
    }

    fn get_attempt_cost(
        &self,
        from: &Vertex,
        to: &Vertex,
        amount: MilliSatoshi,
    ) -> MilliSatoshi {
        self.ns.get_node_pair_params(from, to).attempt_cost(amount)
    }
}
