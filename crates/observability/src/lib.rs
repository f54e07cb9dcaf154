//! Tracing/logging setup shared by every binary in the workspace.

use core::str::FromStr;

use invoicer_core::DomainError;

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "INVOICER_LOG_FORMAT";

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// Read the format from [`LOG_FORMAT_ENV`], defaulting to JSON when unset.
    pub fn from_env() -> Result<Self, DomainError> {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(DomainError::validation(format!(
                "{LOG_FORMAT_ENV} must be one of: json, pretty (got {other:?})"
            ))),
        }
    }
}

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
    ::tracing::debug!(?format, "logging initialized");
}
