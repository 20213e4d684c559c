use std::fmt::Write as _;

use anyhow::Result;
use wayfind_core::Graph;

use crate::settings::Settings;

/// Summary of the loaded graph.
pub fn run(graph: &Graph, settings: &Settings) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "source:        {}", settings.source)?;
    writeln!(out, "status:        loaded")?;
    writeln!(out, "nodes:         {}", graph.node_count())?;
    writeln!(
        out,
        "edges:         {} ({} step-free)",
        graph.edge_count(),
        graph.accessible_edge_count()
    )?;
    writeln!(out, "facilities:    {}", graph.facilities().len())?;
    writeln!(out, "memory_bytes:  {}", graph.memory_usage())?;
    writeln!(
        out,
        "canvas:        {} x {}",
        settings.canvas.width, settings.canvas.height
    )?;
    Ok(out)
}

/// Locations with their coordinates and the facilities pinned to them.
pub fn nodes(graph: &Graph) -> Result<String> {
    let mut out = String::new();
    for node in graph.nodes() {
        let degree = graph.neighbors(graph.resolve(&node.id)?).len();
        writeln!(
            out,
            "{:<12} ({:>4}, {:>4})  {} connections",
            node.id, node.x, node.y, degree
        )?;
    }
    let facilities = graph.facilities();
    if !facilities.is_empty() {
        writeln!(out)?;
        for (kind, node) in facilities {
            writeln!(out, "{:<12} -> {}", kind.to_string(), node.id)?;
        }
    }
    Ok(out)
}
