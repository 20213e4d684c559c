use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::debug;
use wayfind_core::{load_graph, Graph};

use crate::cli::SettingsArgs;

/// Station graph shipped with the binary.
const BUNDLED_STATION: &str = include_str!("../../data/station.json");

/// Where the graph document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    Bundled,
    File(PathBuf),
}

impl std::fmt::Display for GraphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphSource::Bundled => f.write_str("bundled station"),
            GraphSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Extent of the virtual canvas node coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

/// Resolved, validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: GraphSource,
    pub canvas: Canvas,
}

impl Settings {
    pub fn from_args(args: &SettingsArgs) -> Result<Self> {
        check_positive(args.canvas_width, "canvas-width")?;
        check_positive(args.canvas_height, "canvas-height")?;

        let source = match &args.graph {
            Some(path) => GraphSource::File(path.clone()),
            None => GraphSource::Bundled,
        };

        Ok(Self {
            source,
            canvas: Canvas {
                width: args.canvas_width,
                height: args.canvas_height,
            },
        })
    }

    /// Load and validate the configured graph. Called once per process.
    pub fn load_graph(&self) -> Result<Graph> {
        let graph = match &self.source {
            GraphSource::Bundled => {
                Graph::from_json(BUNDLED_STATION).context("bundled station graph is invalid")?
            }
            GraphSource::File(path) => load_graph(path)
                .with_context(|| format!("failed to load graph from {}", path.display()))?,
        };
        debug!(
            "graph ready from {}: {} nodes, {} edges",
            self.source,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn check_positive(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{} must be a positive number, got {}", name, value);
    }
    Ok(())
}
