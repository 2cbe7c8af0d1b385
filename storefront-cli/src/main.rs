//! storefront - HTTP backend for the storefront
//!
//! Serves `GET /` as a liveness acknowledgment and `GET /products` from the
//! `products` table. Every flag also reads from the environment, and a `.env`
//! file in the working directory is loaded first.

use anyhow::Result;
use clap::Parser;

mod server;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    author,
    version,
    about = "HTTP backend serving the storefront product catalogue"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces to an OTLP endpoint
    #[cfg(feature = "telemetry")]
    #[arg(long)]
    otel: bool,

    #[command(flatten)]
    server: server::ServerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; flags and real env vars still apply
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let tracing_config = tracing_setup::TracingConfig {
        debug: cli.debug,
        #[cfg(feature = "telemetry")]
        otel: cli.otel,
    };
    tracing_setup::init(&tracing_config)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("ignoring unreadable .env: {}", err),
    }

    let result = server::run_server(cli.server).await;
    tracing_setup::shutdown_otel();
    result
}
