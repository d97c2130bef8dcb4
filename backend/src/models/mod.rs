//! Domain types shared by the imputed cost subsystem

pub mod amount;
pub mod vertex;

// Re-exports
pub use amount::{MilliSatoshi, NegativeAmountError};
pub use vertex::{DirectedNodePair, Vertex, VertexParseError, VERTEX_SIZE};
