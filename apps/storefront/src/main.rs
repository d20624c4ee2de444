//! # ReadNest Storefront Entry Point
//!
//! The terminal storefront for the ReadNest bookstore.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: WARN so the storefront stays readable;                   │
//! │       RUST_LOG=readnest=debug shows domain operations                   │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • Defaults + READNEST_* environment overrides                       │
//! │                                                                         │
//! │  3. Seed Catalog ─────────────────────────────────────────────────────► │
//! │     • The hard-coded book list, validated on the way in                 │
//! │                                                                         │
//! │  4. Create Session ───────────────────────────────────────────────────► │
//! │     • One User with an empty Cart, SharedCatalog, Welcome screen        │
//! │                                                                         │
//! │  5. Run Shell ────────────────────────────────────────────────────────► │
//! │     • Read-eval loop over stdin/stdout until quit or EOF                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod seed;
mod shell;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use readnest_core::{SharedCatalog, User};

use crate::config::StoreConfig;
use crate::error::ShellResult;
use crate::shell::Shell;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("readnest: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ShellResult<()> {
    let config = StoreConfig::from_env();
    info!(store = %config.store_name, user = %config.user_name, "starting storefront");

    let catalog = SharedCatalog::new(seed::seed_catalog()?);
    let user = User::new(config.user_name.clone())?;

    let mut shell = Shell::new(catalog, user, config);
    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=readnest_core=trace` - Trace the core only
/// - Default: WARN, so log lines don't interleave with the storefront text
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
