use thiserror::Error;

use crate::facility::Facility;

/// Failure to turn a graph document into a [`Graph`](crate::Graph).
///
/// Any of these leaves the caller without a graph; none are recoverable at
/// query time.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read graph source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error("node '{id}' has a non-finite coordinate ({x}, {y})")]
    InvalidCoordinate { id: String, x: f64, y: f64 },

    #[error("edge #{index} references undeclared node '{endpoint}'")]
    DanglingEdge { index: usize, endpoint: String },

    #[error("edge #{index} ({from} -> {to}) has invalid cost {cost}")]
    InvalidCost {
        index: usize,
        from: String,
        to: String,
        cost: f64,
    },

    #[error("edge costs sum to {total}, which is not a finite distance")]
    CostOverflow { total: f64 },

    #[error("facility '{facility}' points at undeclared node '{node}'")]
    DanglingFacility { facility: Facility, node: String },
}

/// A node id passed to a lookup or query is not part of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node '{id}' not found")]
pub struct NodeNotFound {
    pub id: String,
}

impl NodeNotFound {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The graph document declares no node for this facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no node is mapped to facility '{0}'")]
pub struct FacilityNotMapped(pub Facility);
