use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::facility::Facility;
use crate::graph::{Edge, Graph, Node, NodeId};

/// Position of a node in the graph document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Edge as written in the graph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub dist: f64,
    pub access: bool,
}

/// The external graph representation.
///
/// ```json
/// {
///   "nodes": { "entry": { "x": 90, "y": 500 }, ... },
///   "edges": [ { "from": "entry", "to": "ramp", "dist": 95, "access": true }, ... ],
///   "facilities": { "restroom": "toilet" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: BTreeMap<String, Point>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facilities: BTreeMap<Facility, String>,
}

impl GraphDocument {
    /// Validate the document and build the read-only graph.
    pub fn into_graph(self) -> Result<Graph, LoadError> {
        // BTreeMap iteration is lexicographic, which fixes NodeId order.
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut index: HashMap<&str, NodeId> = HashMap::with_capacity(self.nodes.len());
        for (i, (id, p)) in self.nodes.iter().enumerate() {
            if id.is_empty() {
                return Err(LoadError::EmptyNodeId);
            }
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(LoadError::InvalidCoordinate {
                    id: id.clone(),
                    x: p.x,
                    y: p.y,
                });
            }
            index.insert(id.as_str(), i as NodeId);
            nodes.push(Node {
                id: id.clone(),
                x: p.x,
                y: p.y,
            });
        }

        let resolve = |index_no: usize, endpoint: &str| {
            index
                .get(endpoint)
                .copied()
                .ok_or_else(|| LoadError::DanglingEdge {
                    index: index_no,
                    endpoint: endpoint.to_string(),
                })
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        for (i, rec) in self.edges.iter().enumerate() {
            let from = resolve(i, &rec.from)?;
            let to = resolve(i, &rec.to)?;
            if !rec.dist.is_finite() || rec.dist < 0.0 {
                return Err(LoadError::InvalidCost {
                    index: i,
                    from: rec.from.clone(),
                    to: rec.to.clone(),
                    cost: rec.dist,
                });
            }
            edges.push(Edge {
                from,
                to,
                cost: rec.dist,
                accessible: rec.access,
            });
        }

        // Any path costs at most the sum of all edges, so a finite sum keeps
        // every search distance finite.
        let total: f64 = edges.iter().map(|e| e.cost).sum();
        if !total.is_finite() {
            return Err(LoadError::CostOverflow { total });
        }

        let mut facilities = HashMap::with_capacity(self.facilities.len());
        for (&kind, node) in &self.facilities {
            let id = index
                .get(node.as_str())
                .copied()
                .ok_or_else(|| LoadError::DanglingFacility {
                    facility: kind,
                    node: node.clone(),
                })?;
            facilities.insert(kind, id);
        }

        let graph = Graph::from_parts(nodes, edges, facilities);
        debug!(
            "loaded graph: {} nodes, {} edges ({} step-free), {} facilities",
            graph.node_count(),
            graph.edge_count(),
            graph.accessible_edge_count(),
            graph.facilities().len()
        );
        Ok(graph)
    }
}

impl Graph {
    /// Parse and validate a graph document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let doc: GraphDocument = serde_json::from_str(json)?;
        doc.into_graph()
    }

    /// Parse and validate a graph document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let doc: GraphDocument = serde_json::from_reader(reader)?;
        doc.into_graph()
    }
}

/// Load a graph document from disk.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    debug!("loading graph from {}", path.display());
    let file = File::open(path)?;
    Graph::from_reader(BufReader::new(file))
}
