//! provdocs CLI - provider reference tables for documentation builds
//!
//! This is the main entry point for the provdocs command-line interface.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use provdocs_core::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let global = &cli.global;
    match cli.command {
        Commands::OperatorsAndHooks(args) => {
            commands::render::run(Directive::OperatorsHooksRef, &args.tags, &args.render, global)
        }
        Commands::Transfers(args) => {
            commands::render::run(Directive::TransfersRef, &args.tags, &args.render, global)
        }
        Commands::Logging(args) => commands::render::run(Directive::Logging, &[], &args, global),
        Commands::AuthBackends(args) => {
            commands::render::run(Directive::AuthBackends, &[], &args, global)
        }
        Commands::SecretBackends(args) => {
            commands::render::run(Directive::SecretsBackends, &[], &args, global)
        }
        Commands::Connections(args) => {
            commands::render::run(Directive::Connections, &[], &args, global)
        }
        Commands::ExtraLinks(args) => {
            commands::render::run(Directive::ExtraLinks, &[], &args, global)
        }
        Commands::Directive(args) => commands::directive::run(args, global),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity. Logs go to stderr so
/// rendered tables on stdout stay clean.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
