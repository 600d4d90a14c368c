//! Tracing subscriber setup for the client binaries.
//!
//! Both binaries install the same subscriber so log output looks alike.
//! Events go to stderr, which keeps stdout free for reports and JSON.
//!
//! # Environment Variables
//!
//! - `YIJING_LOG` - filter directives, e.g. `yijing_conformance=debug`
//! - `RUST_LOG` - fallback when `YIJING_LOG` is unset
//! - `YIJING_LOG_FORMAT` - `compact` (default) or `json`

use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter, Registry};

/// Directive variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "YIJING_LOG";

/// Output format variable.
pub const LOG_FORMAT_ENV: &str = "YIJING_LOG_FORMAT";

/// Formatter used for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output.
    Compact,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How the process-wide subscriber should behave.
#[derive(Clone, Debug)]
pub struct TracingConfig {
    /// Explicit filter directives. When absent, `RUST_LOG` and then
    /// [`TracingConfig::default_directive`] apply.
    pub directives: Option<String>,
    /// Directive used when nothing else resolves.
    pub default_directive: String,
    /// Output format.
    pub format: LogFormat,
    /// Whether module paths appear in output.
    pub include_targets: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            default_directive: "warn".to_string(),
            format: LogFormat::Compact,
            include_targets: false,
        }
    }
}

impl TracingConfig {
    /// Builds a configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(directives) = lookup(LOG_ENV) {
            if !directives.trim().is_empty() {
                config.directives = Some(directives);
            }
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV).as_deref().and_then(LogFormat::from_env_value) {
            config.format = format;
            config.include_targets = format == LogFormat::Json;
        }

        config
    }

    /// Raises the default level, as for a `--verbose` flag.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.default_directive = "debug".to_string();
        }
        self
    }

    fn resolve_filter(&self) -> Result<EnvFilter, TracingSetupError> {
        match &self.directives {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|err| TracingSetupError::InvalidFilter(err.to_string())),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))),
        }
    }
}

/// Errors from installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TracingSetupError {
    /// The directive string could not be parsed.
    #[error("invalid YIJING_LOG directive: {0}")]
    InvalidFilter(String),
    /// A global subscriber is already installed.
    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInit(#[source] tracing_subscriber::util::TryInitError),
}

/// Installs the configured subscriber as the process-wide default.
///
/// # Errors
///
/// Returns [`TracingSetupError`] if the directives do not parse or a
/// subscriber is already installed.
pub fn init(config: &TracingConfig) -> Result<(), TracingSetupError> {
    let filter = config.resolve_filter()?;
    let registry = Registry::default().with(filter);
    let layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.include_targets);

    let result = match config.format {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json().with_ansi(false)).try_init(),
    };
    result.map_err(TracingSetupError::SubscriberInit)
}
