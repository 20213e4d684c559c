use anyhow::Result;
use wayfind_core::{reachable_from, AccessMode, Graph};

use crate::util::mode_label;

/// Every location reachable from `from`, cheapest first.
pub fn run(graph: &Graph, from: &str, mode: AccessMode, limit: Option<usize>) -> Result<String> {
    let reachable = reachable_from(graph, from, mode)?;
    let total = reachable.len();

    let mut out = format!(
        "{} of {} locations reachable from {} ({})\n",
        total,
        graph.node_count().saturating_sub(1),
        from,
        mode_label(mode)
    );
    out.push_str(&format!("{:<12} {:>8} {:>5}\n", "location", "cost", "hops"));
    out.push_str(&format!("{:-<12} {:->8} {:->5}\n", "", "", ""));
    for r in reachable.iter().take(limit.unwrap_or(total)) {
        out.push_str(&format!("{:<12} {:>8} {:>5}\n", r.id, r.cost, r.hops));
    }
    Ok(out)
}
