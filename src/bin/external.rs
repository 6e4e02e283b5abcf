//! External record fetch CLI binary.
//!
//! A command-line interface for fetching single records.

use clap::Parser;
use external::cli::{Cli, Command};
use external::output::PrettyPrint;
use external::{Context, Data, Fetch, FetchError, Fetcher};
use serde::Serialize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fetcher = match cli.config().and_then(|config| Fetcher::from_config(&config)) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set EXTERNAL_API_URL or pass --base-url");
            return ExitCode::FAILURE;
        }
    };

    let json = cli.json;
    let data = match run(&fetcher, cli).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {e}");
            if let FetchError::ResponseNotOk { status, .. } = e {
                eprintln!("Hint: the endpoint answered with HTTP {status}");
            }
            return ExitCode::FAILURE;
        }
    };

    match render(&data, json) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to format output: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(fetcher: &Fetcher, cli: Cli) -> external::Result<Data> {
    match cli.command {
        Command::Get { id } => fetcher.fetch_data(&Context::background(), &id).await,
    }
}

/// Output errors stay `serde_json::Error` so they are never reported as a
/// response decode failure.
fn render<T: Serialize + PrettyPrint>(item: &T, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(item)
    } else {
        Ok(item.pretty_print())
    }
}
