use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(author, version, about)]
#[command(long_about = "Station wayfinding on a fixed location graph.\n\n\
    Computes the cheapest route between two locations, optionally using\n\
    step-free connections only, and renders it as a map overlay.\n\n\
    Examples:\n  \
    wayfind route entry p1_top               Fastest route\n  \
    wayfind route entry p1_top --step-free   Ramps and lifts only\n  \
    wayfind facility restroom                Locate a facility\n  \
    wayfind route entry p2_top -f svg        SVG overlay on stdout")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Layered settings: flag > environment > default.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Graph document to load (defaults to the bundled station graph)
    #[arg(long, env = "WAYFIND_GRAPH", global = true)]
    pub graph: Option<PathBuf>,

    /// Width of the virtual canvas the coordinates live in
    #[arg(long, env = "WAYFIND_CANVAS_WIDTH", default_value_t = 1000.0, global = true)]
    pub canvas_width: f64,

    /// Height of the virtual canvas the coordinates live in
    #[arg(long, env = "WAYFIND_CANVAS_HEIGHT", default_value_t = 600.0, global = true)]
    pub canvas_height: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the cheapest route between two locations
    Route {
        /// Starting location id
        from: String,

        /// Destination location id
        to: String,

        #[command(flatten)]
        access: AccessArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Mark a facility on the map without routing
    Facility {
        /// Facility category (restroom, lift, dining, medical)
        kind: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every location reachable from a starting point, cheapest first
    Reach {
        /// Starting location id
        from: String,

        #[command(flatten)]
        access: AccessArgs,

        /// Only show the first N results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List locations and mapped facilities
    Nodes,

    /// Validate the graph and print its size
    Status,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct AccessArgs {
    /// Only use step-free connections (ramps, lifts, level walkways)
    #[arg(long, env = "WAYFIND_STEP_FREE")]
    pub step_free: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// Structured JSON
    Json,
    /// Standalone SVG overlay
    Svg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::sync::Mutex;

    // Parsing reads the process environment; tests that depend on it run
    // one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "WAYFIND_GRAPH",
        "WAYFIND_CANVAS_WIDTH",
        "WAYFIND_CANVAS_HEIGHT",
        "WAYFIND_STEP_FREE",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn step_free(cli: &Cli) -> bool {
        match &cli.command {
            Commands::Route { access, .. } => access.step_free,
            _ => panic!("expected route subcommand"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_route_args() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let cli = Cli::try_parse_from([
            "wayfind",
            "route",
            "entry",
            "p1_top",
            "--step-free",
            "-f",
            "json",
            "--canvas-width",
            "800",
        ])
        .unwrap();
        match cli.command {
            Commands::Route {
                from,
                to,
                access,
                format,
            } => {
                assert_eq!(from, "entry");
                assert_eq!(to, "p1_top");
                assert!(access.step_free);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected route subcommand"),
        }
        assert_eq!(cli.settings.canvas_width, 800.0);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["wayfind", "-vv", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_settings_precedence_flag_over_env_over_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let cli = Cli::try_parse_from(["wayfind", "route", "a", "b"]).unwrap();
        assert_eq!(cli.settings.canvas_width, 1000.0);
        assert_eq!(cli.settings.canvas_height, 600.0);
        assert!(cli.settings.graph.is_none());
        assert!(!step_free(&cli));

        std::env::set_var("WAYFIND_GRAPH", "/srv/wayfind/station.json");
        std::env::set_var("WAYFIND_CANVAS_WIDTH", "640");
        std::env::set_var("WAYFIND_CANVAS_HEIGHT", "480");
        std::env::set_var("WAYFIND_STEP_FREE", "true");

        let cli = Cli::try_parse_from(["wayfind", "route", "a", "b"]).unwrap();
        assert_eq!(
            cli.settings.graph.as_deref(),
            Some(std::path::Path::new("/srv/wayfind/station.json"))
        );
        assert_eq!(cli.settings.canvas_width, 640.0);
        assert_eq!(cli.settings.canvas_height, 480.0);
        assert!(step_free(&cli));

        let cli = Cli::try_parse_from([
            "wayfind",
            "route",
            "a",
            "b",
            "--canvas-width",
            "800",
            "--graph",
            "other.json",
        ])
        .unwrap();
        assert_eq!(cli.settings.canvas_width, 800.0);
        assert_eq!(cli.settings.canvas_height, 480.0);
        assert_eq!(
            cli.settings.graph.as_deref(),
            Some(std::path::Path::new("other.json"))
        );

        clear_env();
        let cli = Cli::try_parse_from(["wayfind", "route", "a", "b"]).unwrap();
        assert_eq!(cli.settings.canvas_width, 1000.0);
        assert!(!step_free(&cli));
    }
}
