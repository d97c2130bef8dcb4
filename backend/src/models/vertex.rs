//! Node identities and directed node pairs
//!
//! A `Vertex` is the 33-byte compressed public key of a routing node. The
//! imputed cost subsystem never interprets the bytes; it only compares and
//! hashes them. A `DirectedNodePair` is one direction of a channel edge and
//! is the key under which pair-specific cost parameters are stored.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a compressed secp256k1 public key
pub const VERTEX_SIZE: usize = 33;

/// Errors that can occur when parsing a vertex from its hex form
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum VertexParseError {
    #[error("Invalid vertex length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid vertex hex: {0}")]
    InvalidHex(String),
}

/// Opaque node identity
///
/// # Example
/// ```
/// use imputed_cost_core_rs::Vertex;
///
/// let hex = format!("02{}", "ab".repeat(32));
/// let vertex: Vertex = hex.parse().unwrap();
/// assert_eq!(vertex.to_string(), hex);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex([u8; VERTEX_SIZE]);

impl Vertex {
    pub const fn new(bytes: [u8; VERTEX_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a vertex from a byte slice of exactly `VERTEX_SIZE` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, VertexParseError> {
        let array: [u8; VERTEX_SIZE] =
            bytes.try_into().map_err(|_| VertexParseError::InvalidLength {
                expected: VERTEX_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; VERTEX_SIZE] {
        &self.0
    }
}

impl From<[u8; VERTEX_SIZE]> for Vertex {
    fn from(bytes: [u8; VERTEX_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Vertex {
    type Err = VertexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| VertexParseError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self)
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Vertex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One direction of an edge between two nodes
///
/// Equality and hashing are order-sensitive: `A→B` and `B→A` are distinct
/// keys, so each direction of a channel can carry its own cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectedNodePair {
    pub from: Vertex,
    pub to: Vertex,
}

impl DirectedNodePair {
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }

    /// The same edge traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for DirectedNodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn vertex(first: u8) -> Vertex {
        let mut bytes = [0u8; VERTEX_SIZE];
        bytes[0] = first;
        Vertex::new(bytes)
    }

    #[test]
    fn test_vertex_hex_roundtrip() {
        let v = vertex(0x02);
        let parsed: Vertex = v.to_string().parse().unwrap();
        assert_eq!(parsed, v);
        assert_eq!(v.to_string().len(), VERTEX_SIZE * 2);
    }

    #[test]
    fn test_vertex_rejects_wrong_length() {
        let err = "0203".parse::<Vertex>().unwrap_err();
        assert_eq!(
            err,
            VertexParseError::InvalidLength {
                expected: VERTEX_SIZE,
                actual: 2
            }
        );
    }

    #[test]
    fn test_vertex_rejects_invalid_hex() {
        let bad = "zz".repeat(VERTEX_SIZE);
        assert!(matches!(
            bad.parse::<Vertex>(),
            Err(VertexParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_vertex_serde_uses_hex_string() {
        let v = vertex(3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", v));
        let back: Vertex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_directed_pair_is_order_sensitive() {
        let ab = DirectedNodePair::new(vertex(1), vertex(2));
        let ba = DirectedNodePair::new(vertex(2), vertex(1));

        assert_ne!(ab, ba);
        assert_eq!(ab.reversed(), ba);
        assert_eq!(ab.reversed().reversed(), ab);

        let set: HashSet<_> = [ab, ba].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
