//! Logging setup: daily-rotated file output plus human-readable stdout,
//! with `log` macro records bridged into `tracing`.

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init_logger(log_dir: PathBuf) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    // Forward log crate records (the services log through `log::info!`)
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, "unibuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
        ))
        .with_filter(env_filter());

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_filter(env_filter());

    let subscriber = Registry::default().with(file_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized successfully"
    );

    Ok(())
}

/// Console-only fallback for when the log directory cannot be created.
pub fn init_console_logger() {
    if LOGGER_READY.get().is_some() {
        return;
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let subscriber = Registry::default().with(fmt::layer().with_target(true).with_filter(env_filter()));
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = LOGGER_READY.set(());
    }
}
