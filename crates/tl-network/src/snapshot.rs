//! Plain-text city snapshot.
//!
//! # Format
//!
//! ```text
//! 3                              ← junction count V
//! Delhi 10 5 2 28.6139 77.209
//! Agra 10 5 2 27.1767 78.0081
//! Jaipur 8 6 2 26.9124 75.7873
//! 2                              ← road count E
//! 0 1 233                        ← u v weight, written with u < v
//! 0 2 281
//! ```
//!
//! Junction lines may also use the older four-field form `name red green
//! yellow`; their coordinates default to `(0, 0)`.  Coordinates are written
//! in shortest round-trip form, so a saved city reloads bit for bit.
//!
//! # Recovery
//!
//! Loading is best-effort.  A junction line that cannot be parsed becomes
//! `J{i}` with [`SignalPhase::FALLBACK`] at the origin, unreadable or
//! non-finite coordinates become the origin, and a bad road line is skipped;
//! all are logged at `warn`.  Only a junction count above the
//! graph capacity aborts the load.  A missing file is an empty city.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::{info, warn};

use tl_core::{GeoPoint, SignalPhase};

use crate::graph::MAX_NAME_LEN;
use crate::{Graph, NetworkError, NetworkResult};

// ── Load ──────────────────────────────────────────────────────────────────────

/// Load a city snapshot from `path` into a graph of the given capacity.
///
/// A missing file yields an empty graph.
pub fn load_snapshot(path: &Path, capacity: usize) -> NetworkResult<Graph> {
    match File::open(path) {
        Ok(file) => {
            let graph = read_snapshot(file, capacity)?;
            info!(
                "loaded {} junctions and {} roads from {}",
                graph.junction_count(),
                graph.road_count(),
                path.display()
            );
            Ok(graph)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found; starting with an empty city", path.display());
            Ok(Graph::with_capacity(capacity))
        }
        Err(e) => Err(NetworkError::Io(e)),
    }
}

/// Like [`load_snapshot`] but accepts any `Read` source.
pub fn read_snapshot<R: Read>(mut reader: R, capacity: usize) -> NetworkResult<Graph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_snapshot(&text, capacity)
}

fn parse_snapshot(text: &str, capacity: usize) -> NetworkResult<Graph> {
    let mut graph = Graph::with_capacity(capacity);
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    // ── Junctions ─────────────────────────────────────────────────────────
    let Some(header) = lines.next() else {
        return Ok(graph);
    };
    let Some(junction_count) = parse_count(header) else {
        warn!("snapshot header {header:?} is not a junction count; starting empty");
        return Ok(graph);
    };
    if junction_count > capacity {
        return Err(NetworkError::CapacityExceeded { capacity });
    }

    for i in 0..junction_count {
        let record = lines.next().and_then(parse_junction);
        let (name, phase, pos) = record.unwrap_or_else(|| {
            warn!("junction line {i} is malformed; using defaults");
            (format!("J{i}"), SignalPhase::FALLBACK, GeoPoint::ORIGIN)
        });
        graph.add_junction(&name, phase, pos)?;
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    let road_count = match lines.next() {
        None => 0,
        Some(line) => parse_count(line).unwrap_or_else(|| {
            warn!("road count {line:?} is malformed; loading no roads");
            0
        }),
    };

    for i in 0..road_count {
        let Some(line) = lines.next() else {
            warn!("snapshot ends after {i} of {road_count} roads");
            break;
        };
        if let Err(e) = parse_road(&mut graph, line) {
            warn!("skipping road line {line:?}: {e}");
        }
    }

    Ok(graph)
}

fn parse_count(line: &str) -> Option<usize> {
    line.split_whitespace().next()?.parse().ok()
}

/// `name red green yellow [lat lon]` → junction fields.
fn parse_junction(line: &str) -> Option<(String, SignalPhase, GeoPoint)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }
    let name: String = fields[0].chars().take(MAX_NAME_LEN).collect();

    let duration = |s: &str| s.parse::<i64>().ok();
    let phase = SignalPhase::new(
        duration(fields[1])?,
        duration(fields[2])?,
        duration(fields[3])?,
    )
    .ok()?;

    let pos = match (fields.get(4), fields.get(5)) {
        (Some(lat), Some(lon)) => match (lat.parse(), lon.parse()) {
            (Ok(lat), Ok(lon)) if GeoPoint::new(lat, lon).is_finite() => GeoPoint::new(lat, lon),
            _ => {
                warn!("junction {name} has unreadable coordinates; using (0, 0)");
                GeoPoint::ORIGIN
            }
        },
        _ => GeoPoint::ORIGIN,
    };

    Some((name, phase, pos))
}

fn parse_road(graph: &mut Graph, line: &str) -> NetworkResult<()> {
    let fields: Vec<i64> = line
        .split_whitespace()
        .take(3)
        .map(str::parse::<i64>)
        .collect::<Result<_, _>>()
        .map_err(|e: std::num::ParseIntError| NetworkError::Parse(e.to_string()))?;
    let &[u, v, w] = &fields[..] else {
        return Err(NetworkError::Parse("expected `u v weight`".into()));
    };
    let u = graph.resolve(u)?;
    let v = graph.resolve(v)?;
    graph.add_road(u, v, w)
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Write `graph` to `path`, replacing any existing file.
pub fn save_snapshot(graph: &Graph, path: &Path) -> NetworkResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_snapshot(graph, &mut out)?;
    out.flush()?;
    info!(
        "saved {} junctions and {} roads to {}",
        graph.junction_count(),
        graph.road_count(),
        path.display()
    );
    Ok(())
}

/// Like [`save_snapshot`] but writes to any `Write` sink.
pub fn write_snapshot<W: Write>(graph: &Graph, out: &mut W) -> NetworkResult<()> {
    writeln!(out, "{}", graph.junction_count())?;
    for junction in graph.junctions() {
        let SignalPhase { red, green, yellow } = junction.phase;
        writeln!(
            out,
            "{} {} {} {} {} {}",
            junction.name, red, green, yellow, junction.pos.lat, junction.pos.lon
        )?;
    }

    writeln!(out, "{}", graph.road_count())?;
    for road in graph.roads() {
        writeln!(out, "{} {} {}", road.a, road.b, road.weight)?;
    }
    Ok(())
}
