use crate::config::{AppConfig, LogRotation};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing with a rolling file appender plus stdout.
///
/// The returned guard must stay alive for the process lifetime or
/// buffered log lines are dropped on exit.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = match config.rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        LogRotation::Daily => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        LogRotation::Never => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter_str = if config.enable_tracing {
        config.log_level.clone()
    } else {
        // ORDER_TRACE carries per-request order traces; silence it when disabled
        format!("{},ORDER_TRACE=off", config.log_level)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}
