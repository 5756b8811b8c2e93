//! Observability configuration read from environment variables.

/// Env var holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Env var selecting the log line format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SOLID_LAB_LOG_FORMAT";

/// Default filter: demo output goes to stdout, so keep stderr quiet.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name; `None` when unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "text" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that failed to parse, reported once the subscriber is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(LOG_FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup(LOG_FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
