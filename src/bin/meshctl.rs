//! meshctl CLI Binary
//!
//! Command-line interface for reporting the mesh daemon's connectivity state.

use clap::Parser;
use meshctl::cli::{map_error, Cli, RunContext};
use meshctl::config::{ConfigLoader, MeshctlConfig};
use meshctl::logging::init_logging;
use std::io::Write;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => apply_cli_overrides(config, &cli),
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    debug!("meshctl starting");

    let context = match RunContext::new(config, cli.daemon_addr.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            debug!("Command completed successfully");
            let mut stdout = std::io::stdout().lock();
            if stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()).is_err() {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Apply logging flags over the loaded config. Flags win over files and env.
fn apply_cli_overrides(mut config: MeshctlConfig, cli: &Cli) -> MeshctlConfig {
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    config
}
