//! Logging infrastructure for text wrapping
//!
//! Structured logging uses the `tracing` crate. Native builds install a
//! `tracing-subscriber` registry; WASM builds log to the browser console
//! through `tracing-wasm`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use glyphwrap::core::logging::init_logging;
//!
//! // Defaults: info level, compact format
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: single line per event
//! - `pretty`: multi-line with colors and source locations
//! - `json`: one JSON object per event
//!
//! # Environment Variables
//!
//! - `GLYPHWRAP_LOG_LEVEL`: log level (trace|debug|info|warn|error|off)
//! - `GLYPHWRAP_LOG_FORMAT`: log format (compact|pretty|json)
//! - `RUST_LOG`: standard `EnvFilter` directives, e.g.
//!   `RUST_LOG="glyphwrap::core::text=trace"` to see every forced break
//!
//! The wrapper opens a `wrap_text` span at debug level for each call. The glyph
//! probe reports missing reference glyphs at trace level.

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable holding the log level
pub const LEVEL_ENV: &str = "GLYPHWRAP_LOG_LEVEL";
/// Environment variable holding the log format
pub const FORMAT_ENV: &str = "GLYPHWRAP_LOG_FORMAT";

const DEFAULT_LEVEL: &str = "info";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Logging settings after explicit arguments and environment are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, or `off`
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Merge explicit settings with the environment
    ///
    /// Explicit arguments win, then `GLYPHWRAP_LOG_*`, then `RUST_LOG` for the
    /// level, then the defaults (info, compact).
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        Self::resolve_with_default(level, format, DEFAULT_LEVEL)
    }

    /// Like [`LoggingConfig::resolve`], with `default_level` as the last resort
    pub fn resolve_with_default(
        level: Option<&str>,
        format: Option<&str>,
        default_level: &str,
    ) -> Result<Self, String> {
        let level = level
            .map(str::to_string)
            .or_else(|| std::env::var(LEVEL_ENV).ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| default_level.to_string());

        let format = match format
            .map(str::to_string)
            .or_else(|| std::env::var(FORMAT_ENV).ok())
        {
            Some(name) => {
                LogFormat::from_str(&name).map_err(|e| format!("Invalid log format: {}", e))?
            }
            None => LogFormat::default(),
        };

        Ok(Self { level, format })
    }

    /// Whether logging is switched off entirely
    pub fn is_off(&self) -> bool {
        self.level.eq_ignore_ascii_case("off")
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn filter(&self) -> EnvFilter {
        if self.is_off() {
            return EnvFilter::new("off");
        }
        // Unparseable directives fall back to the default level
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional level or `EnvFilter` directives. Falls back to
///   `GLYPHWRAP_LOG_LEVEL`, `RUST_LOG`, then `info`.
/// * `format` - Optional format (compact|pretty|json). Falls back to
///   `GLYPHWRAP_LOG_FORMAT`, then `compact`.
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
///
/// ```rust,no_run
/// use glyphwrap::core::logging::init_logging;
///
/// init_logging(Some("debug"), Some("pretty")).unwrap();
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_logging_with_default(level, format, DEFAULT_LEVEL)
}

/// Initialize logging, using `default_level` when neither `level` nor the
/// environment names one
pub fn init_logging_with_default(
    level: Option<&str>,
    format: Option<&str>,
    default_level: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggingConfig::resolve_with_default(level, format, default_level)?;
    install(&config)
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::default().with(config.filter());
    // stdout is reserved for wrapped output
    let layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_level(true);

    match config.format {
        LogFormat::Compact => registry
            .with(
                layer
                    .compact()
                    .with_target(false)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                layer
                    .pretty()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                layer
                    .json()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn install(_config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Browser console output; format and filter are not configurable here
    tracing_wasm::set_as_global_default_with_config(tracing_wasm::WASMLayerConfig::default());
    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
