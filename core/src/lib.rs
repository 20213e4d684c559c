//! wayfind-core: indoor wayfinding route engine.
//!
//! A small read-only graph of named locations (entrances, checkpoints,
//! platforms, lifts, ramps, bridges, facilities) and a Dijkstra search over
//! it. Edges are stored once but walked in both directions; a step-free
//! query drops every edge not flagged accessible.
//!
//! The graph is loaded once from a JSON document and shared by reference.
//! Every query builds its own working state, so concurrent queries against
//! one `Graph` need no locking.

mod error;
mod facility;
mod graph;
mod load;
mod traversal;

pub use error::{FacilityNotMapped, LoadError, NodeNotFound};
pub use facility::Facility;
pub use graph::{Edge, Graph, Neighbor, NeighborEntry, Node, NodeId};
pub use load::{load_graph, EdgeRecord, GraphDocument, Point};
pub use traversal::{reachable_from, shortest_path, AccessMode, Reachable, Route, RouteStep};
