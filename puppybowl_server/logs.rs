use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "puppybowl.log";

/// Matches every `puppybowl_*` crate by target prefix.
const DEFAULT_FILTER: &str = "info,puppybowl=debug";

/// Logs to stdout and to a daily rotating file in `log_dir`.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. File output stops once the
/// returned guard is dropped.
pub fn setup_logging(log_dir: &str) -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    guard
}
