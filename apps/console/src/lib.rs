//! # Shopfront Console Library
//!
//! JSON-lines front end for the shopfront state engine.
//!
//! ## Module Organization
//! ```text
//! shopfront_console/
//! ├── lib.rs          ◄─── You are here (startup & stdin loop)
//! ├── commands.rs     ◄─── Console: line ─► Command ─► Response
//! ├── config.rs       ◄─── ConsoleConfig (file + env)
//! └── error.rs        ◄─── ApiError returned in failed responses
//! ```
//!
//! ## Streams
//! - stdin: one JSON command per line
//! - stdout: one JSON response per non-blank, non-comment line
//! - stderr: tracing output

pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::Console;
use config::ConsoleConfig;

/// Runs the console until stdin closes.
///
/// ## Startup Sequence
/// 1. Load configuration (file + env), falling back to defaults
/// 2. Initialize tracing on stderr
/// 3. Build the stores and the coordinator
/// 4. Process stdin line by line
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Logging is not up yet, so a load failure is reported after init
    let (config, load_error) = match ConsoleConfig::load(None) {
        Ok(config) => (config, None),
        Err(err) => (ConsoleConfig::default(), Some(err)),
    };

    init_tracing(&config.log_filter);

    if let Some(err) = load_error {
        warn!("Failed to load console config: {}. Using defaults.", err);
    }

    info!(
        seed_catalog = config.seed_catalog,
        echo_commands = config.echo_commands,
        "Starting shopfront console"
    );

    let mut console = Console::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = console.handle_line(&line)? {
            writeln!(stdout, "{}", response)?;
            stdout.flush()?;
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise the config's `log_filter` (default `info,shopfront=debug`)
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
