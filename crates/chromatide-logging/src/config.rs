// ABOUTME: Logging configuration: level directives, console format, optional log file
// ABOUTME: Environment variables override the defaults at init time

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Wrapper for `tracing::Level` so configurations can be (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl LogLevel {
    fn parse(input: &str) -> Result<Self> {
        let level = match input.to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            other => bail!("unknown log level {other:?} (expected trace|debug|info|warn|error)"),
        };
        Ok(LogLevel(level))
    }

    fn as_directive(&self) -> String {
        self.0.to_string().to_ascii_lowercase()
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_directive())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// How console events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format {other:?} (expected compact|pretty|json)"),
        }
    }
}

/// Logging configuration for one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Baseline level for every target without an override.
    pub level: LogLevel,

    /// Per-module overrides, target name to level.
    pub module_levels: HashMap<String, LogLevel>,

    /// Console rendering style.
    pub format: LogFormat,

    /// Whether events are written to the console at all.
    pub console: bool,

    /// Daily-rolling log file; `None` disables file output.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: HashMap::new(),
            format: LogFormat::Compact,
            console: true,
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Defaults plus environment overrides.
    ///
    /// `CHROMATIDE_LOG` (falling back to `RUST_LOG`) takes level directives
    /// in the usual `info,chromatide_theme=debug` form.
    /// `CHROMATIDE_LOG_FORMAT` selects compact, pretty or json rendering.
    /// `CHROMATIDE_LOG_FILE` enables file output: a path value is used
    /// as-is, a bare `1`/`true` picks the per-user default location.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(spec) = env::var("CHROMATIDE_LOG") {
            config
                .apply_directives(&spec)
                .context("invalid CHROMATIDE_LOG")?;
        } else if let Ok(spec) = env::var("RUST_LOG") {
            config.apply_directives(&spec).context("invalid RUST_LOG")?;
        }

        if let Ok(format) = env::var("CHROMATIDE_LOG_FORMAT") {
            config.format = LogFormat::parse(&format).context("invalid CHROMATIDE_LOG_FORMAT")?;
        }

        if let Ok(file) = env::var("CHROMATIDE_LOG_FILE") {
            config.log_file = Some(match file.as_str() {
                "" | "1" | "true" => default_log_file(),
                path => PathBuf::from(path),
            });
        }

        Ok(config)
    }

    /// Apply a comma-separated directive list: bare levels set the baseline,
    /// `module=level` entries add per-module overrides.
    pub fn apply_directives(&mut self, spec: &str) -> Result<()> {
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((module, level)) => {
                    let level = LogLevel::parse(level)
                        .with_context(|| format!("directive {directive:?}"))?;
                    self.module_levels.insert(module.to_string(), level);
                }
                None => self.level = LogLevel::parse(directive)?,
            }
        }
        Ok(())
    }

    /// Build the subscriber filter this configuration describes.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let mut filter = EnvFilter::new(self.level.as_directive());
        for (module, level) in &self.module_levels {
            let directive = format!("{module}={}", level.as_directive());
            filter = filter.add_directive(directive.parse()?);
        }
        Ok(filter)
    }
}

/// Per-user default log location: `<config dir>/chromatide/chromatide.log`.
pub fn default_log_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("chromatide").join("chromatide.log"))
        .unwrap_or_else(|| PathBuf::from("chromatide.log"))
}
