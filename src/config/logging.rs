use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats understood by [`LoggingConfig::init`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

const FALLBACK_LEVEL: &str = "info";

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `parimutuel=debug,tower_http=warn`.
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Filter for the subscriber. `RUST_LOG` wins over the configured
    /// level, and an unparsable directive falls back to `info`.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }

    /// Install the global subscriber. Logs go to stderr so command output
    /// on stdout stays clean. Later calls are no-ops.
    pub fn init(&self) {
        let builder = fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr);

        let installed = match self.format.as_str() {
            "json" => builder.json().flatten_event(true).try_init(),
            _ => builder.try_init(),
        };
        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: FALLBACK_LEVEL.into(),
            format: "pretty".into(),
        }
    }
}
