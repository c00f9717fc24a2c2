mod agents;
mod cli;
mod error;
mod pubspec;
mod registry;
mod repository;
mod utils;
mod workflow;

use agents::ResolutionConfig;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use registry::RegistryEndpoints;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = ResolutionConfig {
        use_beta: cli.beta,
        check_flutter: cli.flutter,
        include: cli.include_packages(),
        exclude: cli.exclude_packages(),
        write_changes: cli.write,
    };
    let endpoints = RegistryEndpoints::default().with_timeout(Duration::from_secs(cli.timeout));

    if let Err(e) = workflow::execute_check(&cli.path, config, endpoints) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "puby=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
