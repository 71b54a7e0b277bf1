//! `tl-core` — foundational types for the traffic-light routing workspace.
//!
//! This crate is a dependency of every other `tl-*` crate.  It has no `tl-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `JunctionId`                                          |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`signal`]      | `SignalPhase`, `waiting_time`, `Cost`                 |
//! | [`config`]      | `CityConfig`                                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod signal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CityConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::JunctionId;
pub use signal::{waiting_time, Cost, SignalPhase, INFINITE_COST};
