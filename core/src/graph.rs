use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FacilityNotMapped, NodeNotFound};
use crate::facility::Facility;

/// Interned node index.
///
/// Indices are handed out in lexicographic order of the string ids, so
/// `a < b` on `NodeId`s agrees with `a < b` on the ids they stand for.
pub type NodeId = u32;

/// A named location with its position on the virtual canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// A stored connection, in document order.
///
/// Storage is directional but traversal is not: every edge can be walked
/// from `to` back to `from` at the same cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
    /// Usable in step-free mode.
    pub accessible: bool,
}

/// One entry in a node's neighbor list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub cost: f64,
    pub accessible: bool,
}

/// A resolved neighbor, as returned by [`Graph::neighbors_of`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborEntry<'a> {
    pub node: &'a Node,
    pub cost: f64,
    pub accessible: bool,
}

/// Read-only wayfinding graph.
///
/// Built once by [`Graph::from_parts`] (normally via the loaders in
/// `load.rs`) and never mutated afterwards, so a single instance can be
/// shared across threads by reference.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbor>>,
    facilities: HashMap<Facility, NodeId>,
}

impl Graph {
    /// Assemble a graph from already validated parts.
    ///
    /// `nodes` must be sorted by id and unique, and every edge / facility
    /// must reference an index inside `nodes`. The loader guarantees both.
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        facilities: HashMap<Facility, NodeId>,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i as NodeId))
            .collect();

        let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            adjacency[edge.from as usize].push(Neighbor {
                node: edge.to,
                cost: edge.cost,
                accessible: edge.accessible,
            });
            // A self-loop is one connection, not two.
            if edge.from != edge.to {
                adjacency[edge.to as usize].push(Neighbor {
                    node: edge.from,
                    cost: edge.cost,
                    accessible: edge.accessible,
                });
            }
        }

        Self {
            nodes,
            index,
            edges,
            adjacency,
            facilities,
        }
    }

    /// Resolve a string id to its interned index.
    pub fn resolve(&self, id: &str) -> Result<NodeId, NodeNotFound> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| NodeNotFound::new(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Result<&Node, NodeNotFound> {
        self.resolve(id).map(|i| &self.nodes[i as usize])
    }

    /// Look up a node by interned index.
    ///
    /// Panics if `id` did not come from this graph.
    pub fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// All nodes, in lexicographic id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All stored edges, in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every node one edge away from `id`, in either stored direction.
    ///
    /// A self-loop on `id` yields a single entry pointing back at `id`.
    /// Entries follow document edge order; callers must not rely on it.
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.adjacency
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// String-id form of [`Graph::neighbors`].
    pub fn neighbors_of(&self, id: &str) -> Result<Vec<NeighborEntry<'_>>, NodeNotFound> {
        let id = self.resolve(id)?;
        Ok(self
            .neighbors(id)
            .iter()
            .map(|n| NeighborEntry {
                node: self.node_at(n.node),
                cost: n.cost,
                accessible: n.accessible,
            })
            .collect())
    }

    /// The node pinned to a facility category, if the document maps one.
    pub fn facility(&self, kind: Facility) -> Result<&Node, FacilityNotMapped> {
        self.facilities
            .get(&kind)
            .map(|&i| self.node_at(i))
            .ok_or(FacilityNotMapped(kind))
    }

    /// Facility categories this graph maps, sorted.
    pub fn facilities(&self) -> Vec<(Facility, &Node)> {
        let mut out: Vec<_> = self
            .facilities
            .iter()
            .map(|(&kind, &i)| (kind, self.node_at(i)))
            .collect();
        out.sort_by_key(|(kind, _)| *kind);
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn accessible_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.accessible).count()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let nodes_mem: usize = self
            .nodes
            .iter()
            .map(|n| size_of::<Node>() + n.id.len())
            .sum();
        let index_mem = self.index.len() * (size_of::<String>() + size_of::<NodeId>() + 16);
        let edges_mem = self.edges.len() * size_of::<Edge>();
        let adj_mem: usize = self
            .adjacency
            .iter()
            .map(|v| size_of::<Vec<Neighbor>>() + v.len() * size_of::<Neighbor>())
            .sum();

        nodes_mem + index_mem + edges_mem + adj_mem
    }
}
