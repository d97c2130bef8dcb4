//! Imputed cost errors

use crate::models::amount::MilliSatoshi;
use thiserror::Error;

/// Errors surfaced by the manager and by per-attempt cost control
///
/// Limit errors are not faults: they tell the pathfinder to drop the
/// candidate edge. Accumulators are untouched when they are returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ImputedCostError {
    #[error("Imputed cost namespace not found: '{0}'")]
    NamespaceNotFound(String),

    #[error("Imputed cost exceeds limit: required {required}, limit {limit}")]
    InsufficientCostLimit { required: i128, limit: MilliSatoshi },

    #[error("Imputed attempt cost exceeds limit: required {required}, limit {limit}")]
    InsufficientAttemptCostLimit { required: i128, limit: MilliSatoshi },
}

impl ImputedCostError {
    /// True for the two limit violations
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(
            self,
            ImputedCostError::InsufficientCostLimit { .. }
                | ImputedCostError::InsufficientAttemptCostLimit { .. }
        )
    }
}
