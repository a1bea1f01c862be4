//! Lambda runtime adapter for the registered handlers.

use clap::Parser;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use netlify_fns::lambda::{invoke, now_seconds};
use netlify_fns::{ENTRY_POINTS, FunctionConfig, lookup};

/// Serve one registered function under the Lambda runtime.
#[derive(Parser, Debug)]
#[command(name = "netlify-fn")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the function to serve
    #[arg(long, env = "NETLIFY_FN_ENTRY_POINT")]
    entry_point: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    init_logging();

    let entry = lookup(&args.entry_point).ok_or_else(|| {
        let known: Vec<_> = ENTRY_POINTS.iter().map(|e| e.name).collect();
        Error::from(format!(
            "unknown entry point '{}' (known: {})",
            args.entry_point,
            known.join(", ")
        ))
    })?;

    let config = FunctionConfig::from_env();
    if config.client_secret.is_none() {
        warn!("FAUNADB_CLIENT_SECRET is not set");
    }

    info!(entry_point = entry.name, "Starting function");

    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(invoke(event, entry, config, now_seconds()))
    }))
    .await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().without_time().with_ansi(false))
        .init();
}
