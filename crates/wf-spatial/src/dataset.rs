//! JSON venue dataset loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "pois":  [{"id":"poi-banos-1","type":"banos","name_es":"…","name_en":"…",
//!              "lat":25.6705,"lon":-100.249,"accessible":true}],
//!   "signs": [{"code":"PLACA-A12","name_es":"…","name_en":"…",
//!              "lat":25.67,"lon":-100.25,"zone":"Toboganes"}],
//!   "graph": {
//!     "nodes": [{"id":"n1","lat":25.67,"lon":-100.25}],
//!     "edges": [{"a":"n1","b":"n2","dist":120,"accessible":true}]
//!   }
//! }
//! ```
//!
//! Unknown fields (theme settings, FAQ text, translations) are ignored, so the
//! full application document can be fed in unchanged.  `pois` and `signs` may
//! be omitted; a POI without `accessible` is treated as not accessible, and
//! an unrecognised POI `type` is kept as [`PoiKind::Unknown`].

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use wf_core::{Coordinate, LocalizedName, PoiKind, PointOfInterest, Sign};

use crate::network::{VenueGraph, VenueGraphBuilder};
use crate::{SpatialError, SpatialResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DatasetRecord {
    #[serde(default)]
    pois:  Vec<PoiRecord>,
    #[serde(default)]
    signs: Vec<SignRecord>,
    graph: GraphRecord,
}

#[derive(Deserialize)]
struct GraphRecord {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize)]
struct NodeRecord {
    id:  String,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    a:          String,
    b:          String,
    dist:       f64,
    accessible: bool,
}

#[derive(Deserialize)]
struct PoiRecord {
    id:         String,
    #[serde(rename = "type")]
    kind:       PoiKind,
    name_es:    String,
    name_en:    String,
    lat:        f64,
    lon:        f64,
    #[serde(default)]
    accessible: bool,
}

#[derive(Deserialize)]
struct SignRecord {
    code:    String,
    name_es: String,
    name_en: String,
    lat:     f64,
    lon:     f64,
    #[serde(default)]
    zone:    String,
}

// ── Venue ─────────────────────────────────────────────────────────────────────

/// Everything routing needs from the dataset, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Venue {
    pub graph: Arc<VenueGraph>,
    pub pois:  Vec<PointOfInterest>,
    pub signs: Vec<Sign>,
}

impl Venue {
    pub fn poi(&self, id: &str) -> Option<&PointOfInterest> {
        self.pois.iter().find(|p| p.id == id)
    }

    /// Look up an NFC plate by its printed code.
    pub fn sign(&self, code: &str) -> Option<&Sign> {
        self.signs.iter().find(|s| s.code == code)
    }

    pub fn pois_of_kind<'a>(&'a self, kind: &'a PoiKind) -> impl Iterator<Item = &'a PointOfInterest> + 'a {
        self.pois.iter().filter(move |p| &p.kind == kind)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a venue from a JSON file.
pub fn load_venue_json(path: &Path) -> SpatialResult<Venue> {
    let file = std::fs::File::open(path)?;
    load_venue_reader(std::io::BufReader::new(file))
}

/// Like [`load_venue_json`] but accepts any `Read` source.
pub fn load_venue_reader<R: Read>(reader: R) -> SpatialResult<Venue> {
    let record: DatasetRecord = serde_json::from_reader(reader)?;
    build_venue(record)
}

/// Like [`load_venue_json`] but parses an in-memory document.
pub fn load_venue_str(json: &str) -> SpatialResult<Venue> {
    let record: DatasetRecord = serde_json::from_str(json)?;
    build_venue(record)
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn build_venue(record: DatasetRecord) -> SpatialResult<Venue> {
    let DatasetRecord { pois, signs, graph } = record;

    let mut builder = VenueGraphBuilder::with_capacity(graph.nodes.len(), graph.edges.len());
    for n in graph.nodes {
        builder.add_node(n.id, Coordinate::new(n.lat, n.lon))?;
    }
    for e in &graph.edges {
        if !(e.dist.is_finite() && e.dist > 0.0) {
            return Err(SpatialError::InvalidEdgeLength {
                a:        e.a.clone(),
                b:        e.b.clone(),
                length_m: e.dist,
            });
        }
        builder.add_path_by_key(&e.a, &e.b, e.dist, e.accessible)?;
    }
    let graph = builder.build()?;

    let pois = pois
        .into_iter()
        .map(|p| {
            let location = Coordinate::new(p.lat, p.lon);
            if !location.is_finite() {
                return Err(SpatialError::InvalidCoordinate(p.id));
            }
            Ok(PointOfInterest {
                id: p.id,
                kind: p.kind,
                name: LocalizedName::new(p.name_es, p.name_en),
                location,
                accessible: p.accessible,
            })
        })
        .collect::<SpatialResult<Vec<_>>>()?;

    let signs = signs
        .into_iter()
        .map(|s| {
            let location = Coordinate::new(s.lat, s.lon);
            if !location.is_finite() {
                return Err(SpatialError::InvalidCoordinate(s.code));
            }
            Ok(Sign {
                code: s.code,
                name: LocalizedName::new(s.name_es, s.name_en),
                location,
                zone: s.zone,
            })
        })
        .collect::<SpatialResult<Vec<_>>>()?;

    let unknown = pois.iter().filter(|p| !p.kind.is_known()).count();
    if unknown > 0 {
        tracing::warn!(unknown, "dataset contains POIs with unrecognised types");
    }
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        step_free_edges = graph.edge_accessible.iter().filter(|&&a| a).count(),
        pois = pois.len(),
        signs = signs.len(),
        "loaded venue dataset"
    );

    Ok(Venue { graph: Arc::new(graph), pois, signs })
}
