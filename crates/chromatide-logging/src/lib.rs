// ABOUTME: Structured logging for chromatide, built on tokio-tracing
// ABOUTME: One init call wires level filtering plus console and file output

pub mod config;
mod subscriber;

pub use config::{LogFormat, LogLevel, LoggingConfig, default_log_file};

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

use anyhow::Result;

/// Initialize logging from defaults plus the `CHROMATIDE_LOG*` environment
/// overrides. Call once per process; later calls fail harmlessly.
pub fn init_logging() -> Result<()> {
    subscriber::install(LoggingConfig::from_env()?)
}

/// Initialize logging with an explicit configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    subscriber::install(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;
    use tracing_subscriber::{fmt, prelude::*};

    #[test]
    fn test_init_logging() {
        // Might fail if a subscriber is already installed, which is fine here.
        let _ = init_logging();
    }

    #[test]
    fn test_macros_available() {
        info!("Test info message");
        debug!("Test debug message");
        warn!("Test warning message");
        error!("Test error message");
    }

    #[test]
    fn test_file_logging_with_structured_fields() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("isolated_test_chromatide.log");

        let log_file = std::fs::File::create(&log_path).expect("Failed to create test log file");
        let file_writer = Arc::new(log_file);

        // Isolated subscriber so this test does not fight the global one.
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(file_writer),
        );

        tracing::subscriber::with_default(subscriber, || {
            info!(seed = "#1c66e5", "Palette generation test message");
            warn!(field = "value", count = 42, "Structured logging test");
        });

        std::thread::sleep(std::time::Duration::from_millis(100));

        let contents = std::fs::read_to_string(&log_path).expect("Failed to read test log file");
        assert!(contents.contains("Palette generation test message"));
        assert!(contents.contains("Structured logging test"));
        assert!(contents.contains("seed"));
        assert!(contents.contains("count"));
    }
}
