//! Interactive Leaflet map.
//!
//! The page is self-contained apart from the Leaflet and
//! polyline-decorator scripts it loads from public CDNs.  City data is
//! embedded as three JSON arrays:
//!
//! ```text
//! var nodes = [{"id":0,"lat":28.6139,"lon":77.209,"name":"Delhi"}, ...];
//! var edges = [{"u":0,"v":1,"w":233}, ...];
//! var sp = [0,1];
//! ```
//!
//! `sp` is the highlighted route.  With two or more junctions it is drawn in
//! red with arrowheads and the view fits the route; otherwise the view fits
//! every junction.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde_json::{json, Value};

use tl_core::JunctionId;
use tl_network::Graph;

use crate::OutputResult;

const HEAD: &str = "<!doctype html><html><head><meta charset='utf-8'>\
<meta name='viewport' content='width=device-width, initial-scale=1'>\
<title>City Map - India</title>\
<link rel='stylesheet' href='https://unpkg.com/leaflet@1.9.4/dist/leaflet.css'/>\
<style>html,body,#map{height:100%;margin:0;} .edge-label{background:transparent;border:none;font-weight:600;}</style>\
</head><body><div id='map'></div>\
<script src='https://unpkg.com/leaflet@1.9.4/dist/leaflet.js'></script>\
<script src='https://cdnjs.cloudflare.com/ajax/libs/leaflet.polylinedecorator/1.7.0/leaflet.polylineDecorator.min.js'></script>\
<script>
var map = L.map('map').setView([22.5937, 78.9629], 5);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {maxZoom: 18, attribution: '&copy; OpenStreetMap contributors'}).addTo(map);
";

const DRAW: &str = r#"function pt(id){ var n = nodes.find(function(x){ return x.id === id; }); return [n.lat, n.lon]; }
function esc(s){ return String(s).replace(/[&<>"']/g, function(c){ return '&#' + c.charCodeAt(0) + ';'; }); }
nodes.forEach(function(n){
  L.marker([n.lat, n.lon]).addTo(map).bindPopup('<b>' + esc(n.name) + '</b>');
});
edges.forEach(function(e){
  var a = pt(e.u), b = pt(e.v);
  L.polyline([a, b], {weight: 3, opacity: 0.6}).addTo(map);
  var mid = [(a[0] + b[0]) / 2, (a[1] + b[1]) / 2];
  L.marker(mid, {opacity: 0}).addTo(map)
    .bindTooltip(String(e.w), {permanent: true, direction: 'center', className: 'edge-label'});
});
if (sp.length > 1) {
  var coords = sp.map(pt);
  var spLine = L.polyline(coords, {color: 'red', weight: 6, opacity: 0.9}).addTo(map);
  spLine.bindPopup('Shortest Path');
  try {
    L.polylineDecorator(spLine, {patterns: [
      {offset: '5%', repeat: '15%', symbol: L.Symbol.arrowHead({pixelSize: 10, polygon: false, pathOptions: {stroke: true, color: 'red'}})}
    ]}).addTo(map);
  } catch (e) { console.warn('PolylineDecorator not available', e); }
  map.fitBounds(coords, {padding: [40, 40]});
} else {
  var all = nodes.map(function(n){ return [n.lat, n.lon]; });
  if (all.length > 0) map.fitBounds(all, {padding: [40, 40]});
}
</script></body></html>
"#;

/// Write the map page for `graph` with `path` highlighted.
///
/// `path` may be empty (no route) or a single junction; both draw the city
/// only.  Ids in `path` must belong to `graph`.
pub fn write_map_html<W: Write>(graph: &Graph, path: &[JunctionId], out: &mut W) -> OutputResult<()> {
    let nodes: Vec<Value> = graph
        .iter()
        .map(|(id, j)| json!({ "id": id.0, "name": j.name, "lat": j.pos.lat, "lon": j.pos.lon }))
        .collect();
    let edges: Vec<Value> = graph
        .roads()
        .map(|r| json!({ "u": r.a.0, "v": r.b.0, "w": r.weight }))
        .collect();
    let sp: Vec<u32> = path.iter().map(|id| id.0).collect();

    out.write_all(HEAD.as_bytes())?;
    write_array(out, "nodes", Value::from(nodes))?;
    write_array(out, "edges", Value::from(edges))?;
    write_array(out, "sp", Value::from(sp))?;
    out.write_all(DRAW.as_bytes())?;
    Ok(())
}

/// [`write_map_html`] into a `String`.
pub fn render_map_html(graph: &Graph, path: &[JunctionId]) -> OutputResult<String> {
    let mut buf = Vec::new();
    write_map_html(graph, path, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn save_map(graph: &Graph, path: &[JunctionId], file: &Path) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(file)?);
    write_map_html(graph, path, &mut out)?;
    out.flush()?;
    info!(
        "map with {} junctions and a {}-junction route written to {}",
        graph.junction_count(),
        path.len(),
        file.display()
    );
    Ok(())
}

/// `var name = [...];`, with `</` escaped so a junction name cannot close
/// the script element.
fn write_array<W: Write>(out: &mut W, name: &str, items: Value) -> OutputResult<()> {
    let encoded = serde_json::to_string(&items)?.replace("</", "<\\/");
    writeln!(out, "var {name} = {encoded};")?;
    Ok(())
}
