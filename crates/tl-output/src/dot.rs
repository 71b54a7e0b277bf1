//! GraphViz export.
//!
//! ```text
//! graph City {
//!   overlap=false;
//!   splines=true;
//!   n0 [label="Delhi\nR:10 G:5 Y:2"];
//!   n1 [label="Agra\nR:10 G:5 Y:2"];
//!   n0 -- n1 [label="233"];
//! }
//! ```
//!
//! Each undirected road appears once, from its lower junction id.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use tl_network::Graph;

use crate::OutputResult;

pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> OutputResult<()> {
    writeln!(out, "graph City {{")?;
    writeln!(out, "  overlap=false;")?;
    writeln!(out, "  splines=true;")?;
    for (id, junction) in graph.iter() {
        let p = junction.phase;
        writeln!(
            out,
            "  n{id} [label=\"{}\\nR:{} G:{} Y:{}\"];",
            escape_label(&junction.name),
            p.red,
            p.green,
            p.yellow
        )?;
    }
    for road in graph.roads() {
        writeln!(out, "  n{} -- n{} [label=\"{}\"];", road.a, road.b, road.weight)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// [`write_dot`] into a `String`.
pub fn render_dot(graph: &Graph) -> OutputResult<String> {
    let mut buf = Vec::new();
    write_dot(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn save_dot(graph: &Graph, path: &Path) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(graph, &mut out)?;
    out.flush()?;
    info!("GraphViz file written to {}", path.display());
    Ok(())
}

fn escape_label(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
