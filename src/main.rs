//! # Wayfarer Main Entry Point
//!
//! Parses the command line, loads the map and runs the game loop on the
//! terminal.

use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;
use wayfarer::{
    config, load_map, AdventureError, AdventureResult, GameSession, InputHandler, TextDisplay,
};

/// Command line arguments for the interpreter.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(about = "A text-adventure interpreter for JSON maps")]
#[command(version)]
struct Args {
    /// Path to the map file
    map: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{}", AdventureError::Usage(config::USAGE.to_string()));
            return ExitCode::FAILURE;
        }
    };

    initialize_logging();
    info!("Starting Wayfarer v{}", wayfarer::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Fatal error: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging backend. Logs go to stderr so they never mix
/// with game output.
fn initialize_logging() {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
        )
        .target(env_logger::Target::Stderr)
        .init();
    }
}

/// Loads the map and plays it on stdin/stdout.
fn run(args: &Args) -> AdventureResult<()> {
    let map = load_map(&args.map)?;

    let mut session = GameSession::new(map, InputHandler::stdin(), TextDisplay::stdout());
    let outcome = session.run()?;
    info!("Exiting with outcome {:?}", outcome);
    Ok(())
}
