//! Graph-store error type.

use thiserror::Error;

use tl_core::{CoreError, JunctionId};

/// Errors produced by `tl-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("graph is full: capacity of {capacity} junctions exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("junction {0} not found in graph")]
    JunctionNotFound(JunctionId),

    #[error("invalid junction index {0}")]
    InvalidIndex(i64),

    #[error("invalid road weight {0}: must be between 0 and {max}", max = u32::MAX)]
    InvalidWeight(i64),

    #[error("road from junction {0} to itself")]
    SelfLoop(JunctionId),

    #[error("invalid junction name {0:?}: expected 1-19 characters without whitespace")]
    InvalidName(String),

    #[error("invalid position {lat}, {lon}: coordinates must be finite")]
    InvalidPosition { lat: f64, lon: f64 },

    #[error("invalid signal phase: {0}")]
    Phase(#[from] CoreError),

    #[error("snapshot parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
