//! Built-in sample city.
//!
//! Eight junctions on the Delhi–Agra–Jaipur triangle and its neighbours,
//! with road weights in minutes and assorted signal cycles.

use tl_core::{GeoPoint, SignalPhase};
use tl_network::{Graph, NetworkResult};

/// Build the sample city in a graph of the given capacity.
pub fn sample_city(capacity: usize) -> NetworkResult<Graph> {
    let mut g = Graph::with_capacity(capacity);
    let phase = |red, green, yellow| SignalPhase { red, green, yellow };

    let delhi      = g.add_junction("Delhi",      phase(30, 20, 5), GeoPoint::new(28.6139, 77.2090))?;
    let agra       = g.add_junction("Agra",       phase(20, 15, 5), GeoPoint::new(27.1767, 78.0081))?;
    let jaipur     = g.add_junction("Jaipur",     phase(25, 20, 5), GeoPoint::new(26.9124, 75.7873))?;
    let gwalior    = g.add_junction("Gwalior",    phase(15, 10, 3), GeoPoint::new(26.2183, 78.1828))?;
    let ajmer      = g.add_junction("Ajmer",      phase(10, 10, 2), GeoPoint::new(26.4499, 74.6399))?;
    let lucknow    = g.add_junction("Lucknow",    phase(30, 25, 5), GeoPoint::new(26.8467, 80.9462))?;
    let kanpur     = g.add_junction("Kanpur",     phase(20, 10, 5), GeoPoint::new(26.4499, 80.3319))?;
    let chandigarh = g.add_junction("Chandigarh", phase(15, 15, 3), GeoPoint::new(30.7333, 76.7794))?;

    g.add_road(delhi,      agra,       233)?;
    g.add_road(delhi,      jaipur,     281)?;
    g.add_road(delhi,      chandigarh, 244)?;
    g.add_road(delhi,      lucknow,    555)?;
    g.add_road(agra,       jaipur,     240)?;
    g.add_road(agra,       gwalior,    120)?;
    g.add_road(agra,       kanpur,     285)?;
    g.add_road(jaipur,     ajmer,      135)?;
    g.add_road(kanpur,     lucknow,     90)?;
    g.add_road(gwalior,    kanpur,     262)?;

    Ok(g)
}
