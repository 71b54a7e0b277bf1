//! Routing error type.

use thiserror::Error;

use tl_core::JunctionId;

/// Errors produced by `tl-routing`.
///
/// Only precondition failures live here; an unreachable destination is
/// reported as [`crate::RouteOutcome::Unreachable`].
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("junction {0} not found in graph")]
    JunctionNotFound(JunctionId),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
