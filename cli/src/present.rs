//! Turns engine output into something a map can draw: a polyline through
//! the route's nodes, a style class, and a marker position in percent of
//! the canvas.

use serde::Serialize;
use wayfind_core::{AccessMode, Node, Route};

use crate::settings::Canvas;

/// Marker position as percentages of the canvas extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pin {
    pub left: f64,
    pub top: f64,
}

impl Pin {
    pub fn at(x: f64, y: f64, canvas: Canvas) -> Self {
        Self {
            left: x / canvas.width * 100.0,
            top: y / canvas.height * 100.0,
        }
    }
}

/// A drawable route overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// SVG `points` attribute: `"x,y x,y ..."`.
    pub points: String,
    pub class: &'static str,
    pub pin: Pin,
    pub cost: f64,
    pub stops: Vec<String>,
}

/// A single highlighted location, no path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub pin: Pin,
}

pub fn style_class(mode: AccessMode) -> &'static str {
    match mode {
        AccessMode::All => "route-normal",
        AccessMode::StepFree => "route-access",
    }
}

/// Build the overlay for a found route. A single-node route has nothing to
/// draw and yields None.
pub fn overlay(route: &Route, canvas: Canvas) -> Option<Overlay> {
    if route.is_trivial() {
        return None;
    }
    let end = route.last()?;

    let points = route
        .steps
        .iter()
        .map(|s| format!("{},{}", s.x, s.y))
        .collect::<Vec<_>>()
        .join(" ");

    Some(Overlay {
        points,
        class: style_class(route.mode),
        pin: Pin::at(end.x, end.y, canvas),
        cost: route.total_cost,
        stops: route.ids().map(str::to_string).collect(),
    })
}

pub fn highlight(node: &Node, canvas: Canvas) -> Highlight {
    Highlight {
        id: node.id.clone(),
        x: node.x,
        y: node.y,
        pin: Pin::at(node.x, node.y, canvas),
    }
}

/// Standalone SVG document sized to the canvas, with the route polyline and
/// a circle marking the destination.
pub fn overlay_svg(overlay: &Overlay, end: (f64, f64), canvas: Canvas) -> String {
    let mut svg = svg_open(canvas);
    svg.push_str(&format!(
        "  <polyline points=\"{}\" class=\"route-line {}\" fill=\"none\"/>\n",
        overlay.points, overlay.class
    ));
    svg.push_str(&marker(end.0, end.1));
    svg.push_str("</svg>\n");
    svg
}

pub fn highlight_svg(highlight: &Highlight, canvas: Canvas) -> String {
    let mut svg = svg_open(canvas);
    svg.push_str(&marker(highlight.x, highlight.y));
    svg.push_str("</svg>\n");
    svg
}

fn svg_open(canvas: Canvas) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        canvas.width, canvas.height
    )
}

fn marker(x: f64, y: f64) -> String {
    format!("  <circle cx=\"{x}\" cy=\"{y}\" r=\"8\" class=\"pin\"/>\n")
}
