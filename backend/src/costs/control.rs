//! Per-Attempt Imputed Cost Control
//!
//! One `ImputedCostControl` is created per payment attempt. While the
//! pathfinder walks candidate edges it calls `process_pair` once per hop,
//! adding the edge's imputed cost to caller-owned running totals and
//! rejecting the edge once a configured ceiling would be exceeded.
//!
//! # Critical Invariants
//!
//! 1. **Atomicity**: a failing `process_pair` leaves the accumulator
//!    bit-identical to its pre-call value
//! 2. **Check Order**: the cost limit is checked before the attempt cost is
//!    even computed; if both would be violated only `InsufficientCostLimit`
//!    is reported
//! 3. **Caller-Owned State**: running totals live in the caller's
//!    `ImputedCostAccumulator`, never inside the control

use super::error::ImputedCostError;
use super::model::{ImputedCostModel, LinearCostModel};
use crate::models::amount::MilliSatoshi;
use crate::models::vertex::Vertex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Running imputed totals for one candidate route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImputedCostAccumulator {
    /// Sum of success-only imputed cost over processed hops
    pub cost: MilliSatoshi,

    /// Sum of attempt cost over processed hops
    pub attempt_cost: MilliSatoshi,
}

impl ImputedCostAccumulator {
    pub fn new(cost: MilliSatoshi, attempt_cost: MilliSatoshi) -> Self {
        Self { cost, attempt_cost }
    }
}

/// Imputed cost limiter bound to one model and one payment attempt
///
/// A limit of `None` means unlimited, not zero.
#[derive(Debug, Clone)]
pub struct ImputedCostControl<M: ImputedCostModel = LinearCostModel> {
    model: M,
    cost_limit: Option<MilliSatoshi>,
    attempt_cost_limit: Option<MilliSatoshi>,
    attempt_id: Uuid,
}

impl<M: ImputedCostModel> ImputedCostControl<M> {
    pub fn new(
        model: M,
        cost_limit: Option<MilliSatoshi>,
        attempt_cost_limit: Option<MilliSatoshi>,
    ) -> Self {
        Self {
            model,
            cost_limit,
            attempt_cost_limit,
            attempt_id: Uuid::new_v4(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn cost_limit(&self) -> Option<MilliSatoshi> {
        self.cost_limit
    }

    pub fn attempt_cost_limit(&self) -> Option<MilliSatoshi> {
        self.attempt_cost_limit
    }

    /// Identifier of the payment attempt this control belongs to
    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    /// Account for one hop `from → to` carrying `amount`
    ///
    /// # Arguments
    /// * `total_fee` - Real routing fee of the route so far; shares the cost
    ///   ceiling with imputed cost. May be negative (inbound discounts).
    /// * `absolute_attempt_cost` - Route-level attempt cost computed by the
    ///   pathfinder; shares the attempt cost ceiling. Pathfinders that derive
    ///   it as a float must truncate toward zero (`value as i64`) before
    ///   calling, matching an integer msat conversion.
    /// * `acc` - Running imputed totals, updated only on success
    ///
    /// # Returns
    /// * `Ok(())` - Both ceilings hold; `acc` has been advanced
    /// * `Err(InsufficientCostLimit)` - Cost ceiling exceeded; `acc` unchanged
    /// * `Err(InsufficientAttemptCostLimit)` - Attempt cost ceiling
    ///   exceeded; `acc` unchanged
    ///
    /// Limit sums are evaluated as signed 128-bit integers. A negative total
    /// (e.g. an inbound discount larger than the imputed cost) therefore
    /// compares as negative and passes any limit; it never wraps around.
    ///
    /// Calls sharing the same accumulator must be serialized by the caller.
    pub fn process_pair(
        &self,
        from: &Vertex,
        to: &Vertex,
        amount: MilliSatoshi,
        total_fee: i64,
        absolute_attempt_cost: i64,
        acc: &mut ImputedCostAccumulator,
    ) -> Result<(), ImputedCostError> {
        let cost_pair = self.model.get_cost(from, to, amount);

        if let Some(limit) = self.cost_limit {
            let required = cost_pair.to_i128() + total_fee as i128 + acc.cost.to_i128();
            if required > limit.to_i128() {
                debug!(
                    attempt_id = %self.attempt_id,
                    %from,
                    %to,
                    %required,
                    %limit,
                    "imputed cost limit exceeded"
                );
                return Err(ImputedCostError::InsufficientCostLimit { required, limit });
            }
        }

        let attempt_cost_pair = self.model.get_attempt_cost(from, to, amount);

        if let Some(limit) = self.attempt_cost_limit {
            let required = attempt_cost_pair.to_i128()
                + absolute_attempt_cost as i128
                + acc.attempt_cost.to_i128();
            if required > limit.to_i128() {
                debug!(
                    attempt_id = %self.attempt_id,
                    %from,
                    %to,
                    %required,
                    %limit,
                    "imputed attempt cost limit exceeded"
                );
                return Err(ImputedCostError::InsufficientAttemptCostLimit { required, limit });
            }
        }

        acc.cost += cost_pair;
        acc.attempt_cost += attempt_cost_pair;
        Ok(())
    }
}
