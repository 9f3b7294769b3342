use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

mod api;
mod config;
mod dispatch;
mod envelope;
mod error;
mod input;
mod model;

use api::{ApiClient, HttpTransport};
use config::Config;
use dispatch::{BindMode, Dispatcher};
use envelope::Envelope;
use error::DispatchError;
use input::Request;

/// sdk-driver - single-shot operation dispatcher for the cloud SDK test harness
///
/// Reads one request document from stdin:
///   {"operation": "<name>", "params": [{"name": "...", "value": ...}, ...]}
/// resolves the operation against the client library, coerces the supplied
/// parameters into the types the call requires, performs it, and prints one
/// {httpResponse, result, error} envelope on stdout. Failure is encoded in
/// the envelope, never in the exit status.
///
/// Environment:
///   CLOUD_USERNAME / CLOUD_PASSWORD   basic credentials
///   CLOUD_TOKEN                       bearer token (wins over basic)
///   CLOUD_API_URL                     endpoint override
///   RUST_LOG                          log filter override (stderr only)
///
/// The reserved operation `waitForRequest` takes a single `request` URL
/// parameter and blocks until the tracked request reaches a terminal state.
#[derive(Parser, Debug)]
#[command(
    name = "sdk-driver",
    version,
    about = "Dispatch one cloud API operation from stdin to stdout",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Bind parameters positionally with legacy defaults (deprecated; the
    /// by-name binder is authoritative)
    #[arg(long)]
    positional: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let envelope = execute(&cli);
    println!("{}", envelope.render());
}

/// Run the whole pipeline, recovering every error into an envelope so the
/// process always emits one JSON document.
fn execute(cli: &Cli) -> Envelope {
    match try_execute(cli) {
        Ok(envelope) => envelope,
        Err(error) => dispatch::normalize::failure(&error),
    }
}

fn try_execute(cli: &Cli) -> Result<Envelope, DispatchError> {
    let raw = io::read_to_string(io::stdin())
        .context("could not read request from stdin")
        .map_err(DispatchError::Unexpected)?;

    let mode = if cli.positional {
        BindMode::Positional
    } else {
        BindMode::ByName
    };

    let request = Request::parse(&raw)?;
    request.validate(mode)?;

    let config = Config::resolve(request.options.as_ref())?;
    let transport = HttpTransport::new(config.endpoint, config.credentials, config.timeout)?;
    let dispatcher = Dispatcher::new(ApiClient::new(Arc::new(transport)), mode)?;

    let runtime = tokio::runtime::Runtime::new()
        .context("failed to create async runtime")
        .map_err(DispatchError::Unexpected)?;
    Ok(runtime.block_on(dispatcher.dispatch(&request)))
}

/// Route log output to stderr; stdout belongs to the envelope. The
/// verbosity flags set the default filter, RUST_LOG overrides it.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
