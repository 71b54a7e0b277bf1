//! `tl-network` — junction/road graph store, snapshot persistence, and
//! nearest-junction lookup.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `Graph`, `Junction`, `Road`, `UndirectedRoad`             |
//! | [`snapshot`]  | `load_snapshot`, `save_snapshot` and reader/writer forms  |
//! | [`locate`]    | `JunctionLocator` (R-tree over junction coordinates)      |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod locate;
pub mod snapshot;


pub use error::{NetworkError, NetworkResult};
pub use graph::{AdjacencyListing, Graph, Junction, Road, UndirectedRoad, MAX_NAME_LEN};
pub use locate::JunctionLocator;
pub use snapshot::{load_snapshot, read_snapshot, save_snapshot, write_snapshot};
