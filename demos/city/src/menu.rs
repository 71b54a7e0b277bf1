//! Interactive menu session.
//!
//! The session owns the current [`Graph`] and replaces it wholesale on
//! rebuild, so a rebuild abandoned half-way (bad input or end of input)
//! leaves the previous city untouched.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{info, warn};

use tl_core::{CityConfig, GeoPoint, JunctionId, SignalPhase};
use tl_network::{save_snapshot, Graph, JunctionLocator, MAX_NAME_LEN};
use tl_output::{save_dot, save_itinerary, save_map};
use tl_routing::{travel_times_from, RouteOutcome, Router, SignalAwareDijkstra};

use crate::input::{InputError, Tokens};

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Exit {
    /// Option 4: the city was saved.
    Saved,
    /// Option 0: quit without saving.
    Quit,
    /// Input ran out; nothing was saved.
    EndOfInput,
}

pub struct Session<R, W> {
    config:  CityConfig,
    graph:   Graph,
    locator: JunctionLocator,
    router:  SignalAwareDijkstra,
    /// Outcome of the latest path query on the current city; `None` until
    /// one runs, and again after a rebuild.
    last:    Option<RouteOutcome>,
    input:   Tokens<R>,
    out:     W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: CityConfig, graph: Graph, input: R, out: W) -> Self {
        let locator = JunctionLocator::build(&graph);
        Self {
            config,
            graph,
            locator,
            router: SignalAwareDijkstra,
            last: None,
            input: Tokens::new(input),
            out,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn last_outcome(&self) -> Option<&RouteOutcome> {
        self.last.as_ref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Show the menu and dispatch choices until the user exits or input ends.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            self.print_menu()?;
            let choice = match self.input.parse::<i64>("a menu choice") {
                Ok(choice) => choice,
                Err(InputError::Eof) => return Ok(Exit::EndOfInput),
                Err(InputError::Invalid { .. }) => {
                    self.input.discard_line();
                    writeln!(self.out, "Invalid choice. Try again.")?;
                    continue;
                }
                Err(InputError::Io(e)) => return Err(e.into()),
            };

            let step = match choice {
                0 => return Ok(Exit::Quit),
                1 => self.rebuild(),
                2 => self.display(),
                3 => self.find_path(),
                4 => match self.save() {
                    Ok(()) => {
                        writeln!(self.out, "Exiting...")?;
                        return Ok(Exit::Saved);
                    }
                    Err(e) => Err(e),
                },
                5 => self.export_map(),
                6 => self.nearest(),
                7 => self.travel_times(),
                _ => {
                    writeln!(self.out, "Invalid choice. Try again.")?;
                    Ok(())
                }
            };

            if let Err(err) = step {
                match err.downcast_ref::<InputError>() {
                    Some(InputError::Eof) => return Ok(Exit::EndOfInput),
                    Some(InputError::Invalid { .. }) => {
                        self.input.discard_line();
                        writeln!(self.out, "Invalid input: {err}")?;
                    }
                    Some(InputError::Io(_)) => return Err(err),
                    None => {
                        self.input.discard_line();
                        warn!("menu option {choice} failed: {err:#}");
                        writeln!(self.out, "Error: {err:#}")?;
                    }
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\nMenu:")?;
        writeln!(self.out, "1. Add Junctions & Roads")?;
        writeln!(self.out, "2. Display City Map (Adjacency List)")?;
        writeln!(self.out, "3. Find Shortest Path")?;
        writeln!(self.out, "4. Save & Exit")?;
        writeln!(self.out, "5. Export Interactive Map (India)")?;
        writeln!(self.out, "6. Find Nearest Junction")?;
        writeln!(self.out, "7. Travel Times From a Junction")?;
        writeln!(self.out, "0. Quit Without Saving")?;
        self.prompt("Enter your choice: ")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    // ── 1. Rebuild ────────────────────────────────────────────────────────

    fn rebuild(&mut self) -> Result<()> {
        let capacity = self.graph.capacity();
        self.prompt(&format!("Enter number of junctions (max {capacity}): "))?;
        let count: i64 = self.input.parse("a junction count")?;
        if count < 1 || count > capacity as i64 {
            writeln!(self.out, "Invalid number; must be 1..{capacity}")?;
            return Ok(());
        }

        let mut city = Graph::with_capacity(capacity);
        for i in 0..count {
            self.prompt(&format!("\nJunction {i} name: "))?;
            let raw = self.input.token()?;
            let name: String = raw.chars().take(MAX_NAME_LEN).collect();

            self.prompt(&format!("Enter traffic light timings (Red Green Yellow) for {name}: "))?;
            let red = self.input.parse("a red duration")?;
            let green = self.input.parse("a green duration")?;
            let yellow = self.input.parse("a yellow duration")?;
            let phase = SignalPhase::new(red, green, yellow)?;

            self.prompt(&format!(
                "Enter latitude and longitude for {name} (e.g., 28.6139 77.2090): "
            ))?;
            let lat = self.input.coordinate("a latitude")?;
            let lon = self.input.coordinate("a longitude")?;

            city.add_junction(&name, phase, GeoPoint::new(lat, lon))?;
        }

        self.prompt("Enter number of roads: ")?;
        let roads: i64 = self.input.parse("a road count")?;
        if roads > 0 {
            writeln!(self.out, "Enter roads (u v distance) each in a new line:")?;
        }
        for _ in 0..roads.max(0) {
            let u: i64 = self.input.parse("a junction index")?;
            let v: i64 = self.input.parse("a junction index")?;
            let w: i64 = self.input.parse("a road weight")?;
            let added = city
                .resolve(u)
                .and_then(|a| Ok((a, city.resolve(v)?)))
                .and_then(|(a, b)| city.add_road(a, b, w));
            if let Err(e) = added {
                writeln!(self.out, "Skipping road {u} {v} {w}: {e}")?;
            }
        }

        info!(
            "city rebuilt with {} junctions and {} roads",
            city.junction_count(),
            city.road_count()
        );
        self.replace_graph(city);
        writeln!(
            self.out,
            "City rebuilt with {} junctions and {} roads.",
            self.graph.junction_count(),
            self.graph.road_count()
        )?;
        Ok(())
    }

    fn replace_graph(&mut self, graph: Graph) {
        self.locator = JunctionLocator::build(&graph);
        self.graph = graph;
        self.last = None;
    }

    // ── 2. Display ────────────────────────────────────────────────────────

    fn display(&mut self) -> Result<()> {
        if self.graph.is_empty() {
            writeln!(self.out, "The city is empty.")?;
            return Ok(());
        }
        writeln!(self.out, "\nCity Map (Adjacency List):")?;
        write!(self.out, "{}", self.graph.adjacency_listing())?;
        Ok(())
    }

    // ── 3. Find path ──────────────────────────────────────────────────────

    fn find_path(&mut self) -> Result<()> {
        self.prompt("Enter source and destination index: ")?;
        let s: i64 = self.input.parse("a source index")?;
        let d: i64 = self.input.parse("a destination index")?;
        let (Ok(src), Ok(dst)) = (self.graph.resolve(s), self.graph.resolve(d)) else {
            writeln!(self.out, "Invalid source/destination indices.")?;
            return Ok(());
        };

        let outcome = self.router.route(&self.graph, src, dst)?;
        let outcome = &*self.last.insert(outcome);
        match outcome {
            RouteOutcome::Found(route) => {
                writeln!(
                    self.out,
                    "\nShortest Time from {} to {} = {} units",
                    name_of(&self.graph, src),
                    name_of(&self.graph, dst),
                    route.total
                )?;
                writeln!(self.out, "\nPath Travel Summary:")?;
                let names: Vec<&str> = route.path.iter().map(|&id| name_of(&self.graph, id)).collect();
                writeln!(self.out, "{}", names.join(" -> "))?;
                writeln!(self.out, "\nTotal Time Taken: {} units", route.total)?;
                let waited = route.total_wait();
                if waited > 0 {
                    writeln!(self.out, "Time spent waiting at signals: {waited} units")?;
                }
            }
            RouteOutcome::Unreachable => {
                writeln!(
                    self.out,
                    "\nNo path found from {} to {}",
                    name_of(&self.graph, src),
                    name_of(&self.graph, dst)
                )?;
            }
        }

        save_map(&self.graph, outcome.path(), &self.config.map_path)?;
        writeln!(
            self.out,
            "Open {} to see the route highlighted.",
            self.config.map_path.display()
        )?;

        // The map is already on disk; a failed itinerary only gets reported.
        if let Some(route) = outcome.route() {
            let path = &self.config.itinerary_path;
            if let Err(e) = save_itinerary(&self.graph, route, path) {
                warn!("could not write itinerary {}: {e}", path.display());
                writeln!(self.out, "Could not write {}: {e}", path.display())?;
            }
        }
        Ok(())
    }

    // ── 4. Save ───────────────────────────────────────────────────────────

    fn save(&mut self) -> Result<()> {
        save_snapshot(&self.graph, &self.config.snapshot_path)?;
        save_dot(&self.graph, &self.config.dot_path)?;
        writeln!(
            self.out,
            "Saved {} and {}.",
            self.config.snapshot_path.display(),
            self.config.dot_path.display()
        )?;
        Ok(())
    }

    // ── 5. Export map ─────────────────────────────────────────────────────

    fn export_map(&mut self) -> Result<()> {
        save_map(&self.graph, &[], &self.config.map_path)?;
        writeln!(
            self.out,
            "Open {} to view the current city network.",
            self.config.map_path.display()
        )?;
        Ok(())
    }

    // ── 6. Nearest junction ───────────────────────────────────────────────

    fn nearest(&mut self) -> Result<()> {
        self.prompt("Enter latitude and longitude: ")?;
        let lat = self.input.coordinate("a latitude")?;
        let lon = self.input.coordinate("a longitude")?;
        let pos = GeoPoint::new(lat, lon);

        let Some(id) = self.locator.nearest(pos) else {
            writeln!(self.out, "The city is empty.")?;
            return Ok(());
        };
        let junction_pos = self.graph.junction(id).map_or(GeoPoint::ORIGIN, |j| j.pos);
        writeln!(
            self.out,
            "Nearest junction: {id} ({}) at {junction_pos}, {:.1} km away",
            name_of(&self.graph, id),
            pos.distance_m(junction_pos) / 1000.0
        )?;
        Ok(())
    }

    // ── 7. Travel times ───────────────────────────────────────────────────

    fn travel_times(&mut self) -> Result<()> {
        self.prompt("Enter source index: ")?;
        let s: i64 = self.input.parse("a source index")?;
        let Ok(src) = self.graph.resolve(s) else {
            writeln!(self.out, "Invalid source index.")?;
            return Ok(());
        };

        let times = travel_times_from(&self.graph, src)?;
        writeln!(self.out, "\nTravel times from {}:", name_of(&self.graph, src))?;
        for (i, time) in times.iter().enumerate() {
            let name = name_of(&self.graph, JunctionId(i as u32));
            match time {
                Some(t) => writeln!(self.out, "{i:>4}  {name:<w$}  {t} units", w = MAX_NAME_LEN)?,
                None => writeln!(self.out, "{i:>4}  {name:<w$}  unreachable", w = MAX_NAME_LEN)?,
            }
        }
        Ok(())
    }
}

fn name_of(graph: &Graph, id: JunctionId) -> &str {
    graph.junction(id).map_or("?", |j| j.name.as_str())
}
