//! Logging setup
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `queue_visualizer=info,queue_visualizer_core=info`)
//! - `QUEUE_VISUALIZER_LOG_FORMAT`: `json` for structured output, anything else for pretty

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FORMAT_ENV: &str = "QUEUE_VISUALIZER_LOG_FORMAT";
const DEFAULT_FILTER: &str = "queue_visualizer=info,queue_visualizer_core=info";

/// Install the global subscriber.
///
/// Output goes to stderr through a non-blocking writer so the UI thread never
/// waits on the terminal. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(writer))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(writer))
                .try_init()?;
        }
    }

    Ok(guard)
}
