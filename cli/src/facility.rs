use anyhow::Result;
use wayfind_core::Graph;

use crate::cli::OutputFormat;
use crate::present;
use crate::settings::Canvas;
use crate::util::parse_facility;

/// Locate a facility and mark it. No route search is involved.
pub fn run(graph: &Graph, kind: &str, format: OutputFormat, canvas: Canvas) -> Result<String> {
    let kind = parse_facility(kind)?;
    let node = graph.facility(kind)?;
    let h = present::highlight(node, canvas);

    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&h)? + "\n",
        OutputFormat::Svg => present::highlight_svg(&h, canvas),
        OutputFormat::Text => format!(
            "{}: {} ({}, {})\npin: {:.1}% left, {:.1}% top\n",
            kind, h.id, h.x, h.y, h.pin.left, h.pin.top
        ),
    };
    Ok(out)
}
