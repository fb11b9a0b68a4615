//! dotjson - read and edit JSON documents addressed by dotted paths.

use std::process::ExitCode;

use clap::Parser;
use dotjson_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only document output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match dotjson_cli::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dotjson: {err:#}");
            ExitCode::FAILURE
        }
    }
}
