//! wayfind: command-line front end for wayfind-core.
//!
//! Loads the station graph once, answers one query, prints the result as
//! text, JSON, or an SVG overlay.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, LevelFilter};

mod cli;
mod facility;
mod path;
mod present;
mod reach;
mod settings;
mod status;
mod util;

use cli::{Cli, Commands};
use settings::Settings;
use wayfind_core::AccessMode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(out) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()) {
                error!("failed to write output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wayfind: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let settings = Settings::from_args(&cli.settings)?;
    let graph = settings.load_graph()?;
    debug!("settings: {:?}", settings);

    match cli.command {
        Commands::Route {
            from,
            to,
            access,
            format,
        } => path::run(
            &graph,
            &from,
            &to,
            AccessMode::from(access.step_free),
            format,
            settings.canvas,
        ),
        Commands::Facility { kind, format } => {
            facility::run(&graph, &kind, format, settings.canvas)
        }
        Commands::Reach {
            from,
            access,
            limit,
        } => reach::run(&graph, &from, AccessMode::from(access.step_free), limit),
        Commands::Nodes => status::nodes(&graph),
        Commands::Status => status::run(&graph, &settings),
    }
}
