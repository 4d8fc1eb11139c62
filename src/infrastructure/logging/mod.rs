//! Logging setup
//!
//! Console output plus an optional plain-text file, both filtered by the
//! configured level (`RUST_LOG` wins when set). Installed at most once per
//! process.

use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::Registry;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::application::errors::ConfigError;
use crate::infrastructure::config::{LogFormat, LoggingConfig};

static INSTALLED: OnceCell<()> = OnceCell::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Normalise a configured level; unknown values fall back to `info`
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard, which must live as long as logging is
/// needed. Concurrent callers are serialised through `INSTALLED`; every call
/// after the first successful one is a no-op and returns `Ok(None)`.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, ConfigError> {
    let mut guard = None;
    INSTALLED.get_or_try_init(|| {
        let (subscriber, file_guard) = build_subscriber(config)?;
        subscriber
            .try_init()
            .map_err(|e| ConfigError::Logging(e.to_string()))?;
        guard = file_guard;
        Ok::<(), ConfigError>(())
    })?;
    Ok(guard)
}

/// Whether `init` has installed the global subscriber
pub fn is_installed() -> bool {
    INSTALLED.get().is_some()
}

fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>), ConfigError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.level)));

    let mut layers: Vec<BoxedLayer> = vec![format_layer(config.format, std::io::stdout, true)];
    let mut guard = None;
    if let Some(path) = &config.file {
        let (writer, file_guard) = file_writer(path)?;
        layers.push(format_layer(config.format, writer, false));
        guard = Some(file_guard);
    }

    let subscriber = tracing_subscriber::registry().with(layers).with(env_filter);
    Ok((subscriber, guard))
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), ConfigError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::Logging(format!("Invalid log file path: {}", path.display())))?;

    std::fs::create_dir_all(dir)
        .map_err(|e| ConfigError::Logging(format!("Cannot create {}: {}", dir.display(), e)))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn format_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
    }
}
