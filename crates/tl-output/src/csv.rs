//! Route itinerary as CSV.
//!
//! ```text
//! step,from,to,weight,arrival,wait,depart
//! 1,Delhi,Agra,4,4,0,4
//! 2,Agra,Jaipur,4,8,9,17
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use log::info;

use tl_network::Graph;
use tl_routing::Route;

use crate::{ItineraryRow, OutputResult};

/// Writes itinerary rows under a single header.
pub struct ItineraryWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl ItineraryWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> ItineraryWriter<W> {
    pub fn new(out: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(out);
        inner.write_record(ItineraryRow::HEADER)?;
        Ok(Self { inner, finished: false })
    }

    pub fn write_rows(&mut self, rows: &[ItineraryRow]) -> OutputResult<()> {
        for row in rows {
            self.inner.write_record(row.record())?;
        }
        Ok(())
    }

    /// Write one row per leg of `route`.
    pub fn write_route(&mut self, graph: &Graph, route: &Route) -> OutputResult<()> {
        self.write_rows(&ItineraryRow::from_route(graph, route))
    }

    /// Flush the underlying writer.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

/// Write the itinerary of `route` to `path`.
pub fn save_itinerary(graph: &Graph, route: &Route, path: &Path) -> OutputResult<()> {
    let mut w = ItineraryWriter::create(path)?;
    w.write_route(graph, route)?;
    w.finish()?;
    info!("itinerary with {} legs written to {}", route.legs.len(), path.display());
    Ok(())
}
