//! Session configuration.

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

/// Junction capacity used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 50;

/// Top-level configuration for one routing session.
///
/// Typically loaded from a TOML file by the application crate (missing keys
/// fall back to [`Default`]) and then overridden by command-line flags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityConfig {
    /// Maximum number of junctions the graph store accepts.
    pub capacity: usize,

    /// City snapshot read at startup and written on save.
    pub snapshot_path: PathBuf,

    /// GraphViz description written alongside the snapshot.
    pub dot_path: PathBuf,

    /// Interactive HTML map written after each route query.
    pub map_path: PathBuf,

    /// Per-leg CSV itinerary of the last found route.
    pub itinerary_path: PathBuf,
}

impl CityConfig {
    /// Reject settings no session can run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.capacity == 0 {
            return Err(CoreError::Config("capacity must be at least 1".into()));
        }
        if self.capacity > u32::MAX as usize {
            return Err(CoreError::Config(format!(
                "capacity {} exceeds the junction id range",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            capacity:       DEFAULT_CAPACITY,
            snapshot_path:  PathBuf::from("city_data.txt"),
            dot_path:       PathBuf::from("graphviz.dot"),
            map_path:       PathBuf::from("map_india.html"),
            itinerary_path: PathBuf::from("route_itinerary.csv"),
        }
    }
}
