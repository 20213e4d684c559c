use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::Serialize;

use crate::error::NodeNotFound;
use crate::graph::{Graph, Neighbor, NodeId};

/// Which edges a query may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Every edge.
    #[default]
    All,
    /// Only edges flagged accessible. Other edges are removed from the
    /// search, not penalised.
    StepFree,
}

impl AccessMode {
    #[inline]
    fn permits(self, neighbor: &Neighbor) -> bool {
        match self {
            AccessMode::All => true,
            AccessMode::StepFree => neighbor.accessible,
        }
    }

    pub fn is_step_free(self) -> bool {
        self == AccessMode::StepFree
    }
}

impl From<bool> for AccessMode {
    fn from(step_free: bool) -> Self {
        if step_free {
            AccessMode::StepFree
        } else {
            AccessMode::All
        }
    }
}

/// A single stop on a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Cost of the edge used to reach this step. None for the first step.
    pub leg_cost: Option<f64>,
    /// Accessibility of that edge. None for the first step.
    pub leg_accessible: Option<bool>,
}

/// Result of a successful shortest path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<RouteStep>,
    pub total_cost: f64,
    pub mode: AccessMode,
}

impl Route {
    /// True when start and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.steps.len() < 2
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.id.as_str())
    }

    pub fn first(&self) -> Option<&RouteStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&RouteStep> {
        self.steps.last()
    }
}

/// A node reachable from a query origin, with its minimum cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reachable {
    pub id: String,
    pub cost: f64,
    /// Edges on one cheapest path from the origin.
    pub hops: u32,
}

/// Heap entry. Ordered so `BinaryHeap` pops the smallest distance first and,
/// among equal distances, the smallest `NodeId` (lexicographic id).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    dist: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query working state. Allocated fresh for every call.
struct Search {
    dist: Vec<f64>,
    /// node → (predecessor, leg) on the cheapest known path.
    pred: Vec<Option<(NodeId, Neighbor)>>,
    settled: Vec<bool>,
}

impl Search {
    fn new(node_count: usize, start: NodeId) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[start as usize] = 0.0;
        Self {
            dist,
            pred: vec![None; node_count],
            settled: vec![false; node_count],
        }
    }

    /// Dijkstra from `start`. Stops once `target` is settled, or when
    /// nothing reachable is left.
    fn run(&mut self, graph: &Graph, start: NodeId, target: Option<NodeId>, mode: AccessMode) {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            dist: 0.0,
            node: start,
        });

        while let Some(Frontier { dist, node }) = heap.pop() {
            let i = node as usize;
            // Stale entry: a cheaper one for this node was already settled.
            if self.settled[i] || dist > self.dist[i] {
                continue;
            }
            self.settled[i] = true;
            trace!("settled {} at {}", graph.node_at(node).id, dist);

            if Some(node) == target {
                return;
            }

            for nb in graph.neighbors(node) {
                if !mode.permits(nb) {
                    continue;
                }
                let j = nb.node as usize;
                if self.settled[j] {
                    continue;
                }
                let candidate = dist + nb.cost;
                if candidate < self.dist[j] {
                    self.dist[j] = candidate;
                    self.pred[j] = Some((node, *nb));
                    heap.push(Frontier {
                        dist: candidate,
                        node: nb.node,
                    });
                }
            }
        }
    }

    /// Leg costs on the recorded path from `start` to `node`.
    fn legs(&self, start: NodeId, node: NodeId) -> Vec<f64> {
        let mut legs = Vec::new();
        let mut current = node;
        while current != start {
            match self.pred[current as usize] {
                Some((parent, nb)) => {
                    legs.push(nb.cost);
                    current = parent;
                }
                None => break,
            }
        }
        legs
    }
}

/// Sum leg costs smallest first, so a path and its reverse report the same
/// total regardless of the direction they were accumulated in.
fn path_cost(mut legs: Vec<f64>) -> f64 {
    legs.sort_by(|a, b| a.total_cmp(b));
    legs.iter().sum()
}

/// Minimum-cost route from `start` to `target`.
///
/// Edges are walked in both stored directions. With
/// [`AccessMode::StepFree`] non-accessible edges are excluded outright.
///
/// Returns `Ok(None)` when the destination cannot be reached under `mode`.
/// `start == target` yields a single-step route of cost 0. Unknown ids fail
/// with [`NodeNotFound`] before any search work is done.
///
/// Ties between equal-distance frontier nodes are broken by lexicographic
/// id, so repeated calls return identical routes.
pub fn shortest_path(
    graph: &Graph,
    start: &str,
    target: &str,
    mode: AccessMode,
) -> Result<Option<Route>, NodeNotFound> {
    let s = graph.resolve(start)?;
    let t = graph.resolve(target)?;

    let mut search = Search::new(graph.node_count(), s);
    search.run(graph, s, Some(t), mode);

    if s != t && search.pred[t as usize].is_none() {
        debug!("no route {} -> {} ({:?})", start, target, mode);
        return Ok(None);
    }

    let route = reconstruct_route(graph, &search, s, t, mode);
    debug!(
        "route {} -> {} ({:?}): {} steps, cost {}",
        start,
        target,
        mode,
        route.steps.len(),
        route.total_cost
    );
    Ok(Some(route))
}

/// Walk predecessor links from `target` back to `start`.
fn reconstruct_route(
    graph: &Graph,
    search: &Search,
    start: NodeId,
    target: NodeId,
    mode: AccessMode,
) -> Route {
    let mut steps = Vec::new();
    let mut current = target;

    loop {
        let node = graph.node_at(current);
        let leg = if current == start {
            None
        } else {
            search.pred[current as usize]
        };

        steps.push(RouteStep {
            id: node.id.clone(),
            x: node.x,
            y: node.y,
            leg_cost: leg.map(|(_, nb)| nb.cost),
            leg_accessible: leg.map(|(_, nb)| nb.accessible),
        });

        match leg {
            Some((parent, _)) => current = parent,
            None => break,
        }
    }

    steps.reverse();
    Route {
        total_cost: path_cost(search.legs(start, target)),
        steps,
        mode,
    }
}

/// Every node reachable from `start` under `mode`, cheapest first.
///
/// Sorted by (cost, id). The start node itself is not included.
pub fn reachable_from(
    graph: &Graph,
    start: &str,
    mode: AccessMode,
) -> Result<Vec<Reachable>, NodeNotFound> {
    let s = graph.resolve(start)?;

    let mut search = Search::new(graph.node_count(), s);
    search.run(graph, s, None, mode);

    // NodeId order is lexicographic, so a stable sort on cost keeps ids ordered.
    let mut out: Vec<Reachable> = search
        .dist
        .iter()
        .enumerate()
        .filter(|&(i, d)| i as NodeId != s && d.is_finite())
        .map(|(i, _)| {
            let legs = search.legs(s, i as NodeId);
            Reachable {
                id: graph.node_at(i as NodeId).id.clone(),
                hops: legs.len() as u32,
                cost: path_cost(legs),
            }
        })
        .collect();
    out.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    Ok(out)
}
