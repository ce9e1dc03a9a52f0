// ABOUTME: Composes the global tracing subscriber from a LoggingConfig
// ABOUTME: Console and file layers share one env filter; installed at most once per process

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::Layered, prelude::*, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

type Filtered = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

pub(crate) fn install(config: LoggingConfig) -> Result<()> {
    let filter = config.env_filter().context("building log filter")?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.console {
        layers.push(console_layer(config.format));
    }
    if let Some(path) = &config.log_file {
        layers.push(file_layer(path)?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()?;

    tracing::info!(
        level = %config.level.0,
        format = ?config.format,
        console = config.console,
        file = config.log_file.is_some(),
        "chromatide logging initialized"
    );

    Ok(())
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Compact => fmt::layer().with_target(true).compact().boxed(),
        LogFormat::Pretty => fmt::layer().with_target(true).pretty().boxed(),
        LogFormat::Json => fmt::layer().json().with_target(true).boxed(),
    }
}

fn file_layer(path: &Path) -> Result<BoxedLayer> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)
        .with_context(|| format!("creating log directory {}", directory.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // The writer thread lives for the rest of the process.
    std::mem::forget(guard);

    Ok(fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(writer)
        .boxed())
}
