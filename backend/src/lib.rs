//! Imputed Cost Core - Routing Cost Accounting
//!
//! Operator-defined "soft" costs for payment routing. Imputed costs are not
//! real fees; they are penalties (or discounts) attached to directed node
//! pairs that bias which paths the pathfinder prefers.
//!
//! # Architecture
//!
//! - **models**: Domain types (Vertex, DirectedNodePair, MilliSatoshi)
//! - **costs**: Cost parameters, namespaces, linear model, per-attempt
//!   control and the namespace manager
//! - **config**: Serializable namespace configuration and its hash
//!
//! # Critical Invariants
//!
//! 1. All money values are integer millisatoshis (never float)
//! 2. Computed costs are never negative and never overflow
//! 3. A rejected hop never mutates the caller's running totals
//! 4. No global state: the manager is an explicit dependency
//!
//! # Example
//!
//! ```rust
//! use imputed_cost_core_rs::{
//!     CostNamespace, CostParameters, ImputedCostAccumulator, ImputedCostError,
//!     ImputedCostManager, MilliSatoshi, Vertex,
//! };
//!
//! let a = Vertex::new([2; 33]);
//! let b = Vertex::new([3; 33]);
//!
//! let manager = ImputedCostManager::new();
//! manager.insert_namespace(
//!     "default",
//!     CostNamespace::new(CostParameters::new(1000, 100, 500, 50)),
//! );
//!
//! let control = manager
//!     .get_namespaced_control("default", Some(MilliSatoshi::new(1_000)), None)
//!     .unwrap();
//!
//! let mut acc = ImputedCostAccumulator::default();
//! control
//!     .process_pair(&a, &b, MilliSatoshi::new(100_000), 500, 0, &mut acc)
//!     .unwrap();
//! assert_eq!(acc.cost, MilliSatoshi::new(200));
//! assert_eq!(acc.attempt_cost, MilliSatoshi::new(100));
//!
//! // 200 + 700 + 200 > 1000: rejected, totals untouched
//! let err = control
//!     .process_pair(&b, &a, MilliSatoshi::new(100_000), 700, 0, &mut acc)
//!     .unwrap_err();
//! assert!(matches!(err, ImputedCostError::InsufficientCostLimit { .. }));
//! assert_eq!(acc.cost, MilliSatoshi::new(200));
//! ```

// Module declarations
pub mod config;
pub mod costs;
pub mod models;

// Re-exports for convenience
pub use config::{ConfigError, ImputedCostConfig, NamespaceConfig, PairConfig};
pub use costs::{
    CostNamespace, CostParameters, ImputedCostAccumulator, ImputedCostControl, ImputedCostError,
    ImputedCostManager, ImputedCostModel, LinearCostModel,
};
pub use models::{DirectedNodePair, MilliSatoshi, Vertex, VertexParseError};
