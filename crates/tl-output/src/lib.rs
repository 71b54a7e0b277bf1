//! `tl-output` — exports of a city and its routes.
//!
//! | Module    | Output                     | Default file            |
//! |-----------|----------------------------|-------------------------|
//! | [`dot`]   | GraphViz undirected graph  | `graphviz.dot`          |
//! | [`map`]   | Leaflet HTML page          | `map_india.html`        |
//! | [`csv`]   | Route itinerary            | `route_itinerary.csv`   |
//!
//! Every exporter has a writer form generic over `std::io::Write` and a
//! `save_*` form that creates the file and logs its path at `info`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tl_output::{save_dot, save_map};
//!
//! save_dot(&graph, Path::new("graphviz.dot"))?;
//! save_map(&graph, outcome.path(), Path::new("map_india.html"))?;
//! ```

pub mod csv;
pub mod dot;
pub mod error;
pub mod map;
pub mod row;


pub use csv::{save_itinerary, ItineraryWriter};
pub use dot::{render_dot, save_dot, write_dot};
pub use error::{OutputError, OutputResult};
pub use map::{render_map_html, save_map, write_map_html};
pub use row::ItineraryRow;
