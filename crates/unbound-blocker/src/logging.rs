use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

pub const LOGGING_ENV: &str = "UNBOUND_BLOCKER_LOG";
pub const LOGGING_FILE_ENV: &str = "UNBOUND_BLOCKER_LOG_FILE";

/// Sets up logging for the current thread.
///
/// Records go to stderr, and additionally to the file named by [`LOGGING_FILE_ENV`] if it's set.
/// Logging stays active until the returned guard is dropped.
pub fn setup_logging() -> anyhow::Result<DefaultGuard> {
    let file_layer = match std::env::var_os(LOGGING_FILE_ENV).map(PathBuf::from) {
        Some(path) => {
            let log_file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open the log file {:?}", path))?;

            Some(
                layer()
                    .with_writer(log_file)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(LevelFilter::TRACE),
            )
        }
        None => None,
    };

    let guard = tracing_subscriber::registry()
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(
                    EnvFilter::builder()
                        .with_env_var(LOGGING_ENV)
                        .with_default_directive(LevelFilter::INFO.into())
                        .from_env_lossy(),
                ),
        )
        .with(file_layer)
        .set_default();

    Ok(guard)
}
