// randomstar: print one randomly chosen repository from a user's GitHub stars.

mod cache;
mod config;
mod error;
mod github;
mod report;
mod stars;

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;
use crate::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env();
    let stars = stars::resolve_star_list(&config).await?;
    let repo = report::pick_random(&stars);
    print!("{}", report::render(repo));
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
