//! `tl-routing` — least-time routing through signalised junctions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`heap`]    | `IndexedMinHeap` with O(log n) `decrease_key`               |
//! | [`engine`]  | `search`, `SearchState` (time-dependent relaxation)         |
//! | [`router`]  | `Router` trait, `SignalAwareDijkstra`, `Route`, `Leg`       |
//! | [`batch`]   | `travel_time_table`, `travel_times_from`                    |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds travel-time table rows on Rayon worker threads.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on route types.         |

pub mod batch;
pub mod engine;
pub mod error;
pub mod heap;
pub mod router;

#[cfg(test)]
mod tests;

pub use batch::{travel_time_table, travel_times_from, TravelTimeTable};
pub use engine::{search, ParentLink, SearchState};
pub use error::{RoutingError, RoutingResult};
pub use heap::{HeapEntry, IndexedMinHeap};
pub use router::{Leg, Route, RouteOutcome, Router, SignalAwareDijkstra};
