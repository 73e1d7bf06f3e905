//! PropLens - composition root.
//!
//! Loads configuration, installs logging, wires the in-memory stores and
//! prints the analysed deal history as JSON on stdout.

use proplens::application::AppContainer;
use proplens::config::{AppConfig, LogFormat, RuntimeConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr, keeping stdout for the report.
///
/// `RUST_LOG` overrides the configured filter when set.
fn init_tracing(runtime: &RuntimeConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| runtime.log_level.as_str().into());

    match runtime.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.runtime);
    info!(
        environment = ?config.runtime.environment,
        sample_deals = config.seed.sample_deals,
        "Starting PropLens"
    );

    let container = AppContainer::in_memory(&config);
    let history = container.deal_history.handle().await?;
    info!(deals = history.len(), "Analysed deal history");

    println!("{}", serde_json::to_string_pretty(&history)?);

    Ok(())
}
