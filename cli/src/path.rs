use anyhow::{bail, Result};
use serde::Serialize;
use wayfind_core::{shortest_path, AccessMode, Graph};

use crate::cli::OutputFormat;
use crate::present;
use crate::settings::Canvas;
use crate::util::mode_label;

#[derive(Serialize)]
struct RouteOutput<'a> {
    from: &'a str,
    to: &'a str,
    mode: AccessMode,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<present::Overlay>,
}

pub fn run(
    graph: &Graph,
    from: &str,
    to: &str,
    mode: AccessMode,
    format: OutputFormat,
    canvas: Canvas,
) -> Result<String> {
    // Same-node queries are answered here; the engine would return [from].
    if from == to {
        graph.node(from)?;
        bail!("you are already at the destination ({from})");
    }

    let route = shortest_path(graph, from, to, mode)?;
    let overlay = route.as_ref().and_then(|r| present::overlay(r, canvas));

    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&RouteOutput {
            from,
            to,
            mode,
            found: overlay.is_some(),
            overlay,
        })? + "\n",
        OutputFormat::Svg => match (&route, &overlay) {
            (Some(r), Some(o)) => {
                let end = r.last().map(|s| (s.x, s.y)).unwrap_or_default();
                present::overlay_svg(o, end, canvas)
            }
            _ => no_route_message(from, to, mode),
        },
        OutputFormat::Text => match (&route, &overlay) {
            (Some(r), Some(o)) => {
                let mut s = format!(
                    "{} -> {} ({}): cost {}, {} stops\n",
                    from,
                    to,
                    mode_label(mode),
                    o.cost,
                    o.stops.len()
                );
                for (i, step) in r.steps.iter().enumerate() {
                    let leg = match (step.leg_cost, step.leg_accessible) {
                        (Some(c), Some(true)) => format!("+{c} step-free"),
                        (Some(c), _) => format!("+{c}"),
                        _ => "start".to_string(),
                    };
                    s.push_str(&format!(
                        "{:>3}  {:<12} ({}, {})  {}\n",
                        i, step.id, step.x, step.y, leg
                    ));
                }
                s.push_str(&format!(
                    "polyline: {}\nclass: {}\npin: {:.1}% left, {:.1}% top\n",
                    o.points, o.class, o.pin.left, o.pin.top
                ));
                s
            }
            _ => no_route_message(from, to, mode),
        },
    };
    Ok(out)
}

fn no_route_message(from: &str, to: &str, mode: AccessMode) -> String {
    format!("no {} route from {} to {}\n", mode_label(mode), from, to)
}
