//! Imputed Costs
//!
//! Synthetic, operator-defined costs attached to directed node pairs to bias
//! path selection. This module provides:
//! - Cost coefficients and the linear cost formula (`params`)
//! - Namespaces of default and pair-specific coefficients (`namespace`)
//! - The cost model seam and its linear implementation (`model`)
//! - Per-attempt accumulation and limiting (`control`)
//! - The thread-safe namespace registry (`manager`)
//!
//! Data flow: manager → (namespace lookup) → model → control, with the
//! pathfinder calling `process_pair` once per candidate hop.

pub mod control;
pub mod error;
pub mod manager;
pub mod model;
pub mod namespace;
pub mod params;

// Re-exports
pub use control::{ImputedCostAccumulator, ImputedCostControl};
pub use error::ImputedCostError;
pub use manager::ImputedCostManager;
pub use model::{ImputedCostModel, LinearCostModel};
pub use namespace::CostNamespace;
pub use params::{calc_cost, CostParameters, MAX_RATE_PPM, MIN_COST, RATE_PARTS};
