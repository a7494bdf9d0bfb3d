//! Configuration for logging

use std::sync::Arc;

/// Sink for formatted log lines. Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Logging configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Name reported in the startup event
    pub app_name: String,

    /// Write formatted events to stderr
    pub enable_console: bool,

    /// Emit ANSI colors in the stderr output
    pub ansi: bool,

    /// Log level filter (e.g., "info", "debug", "twirl_core=trace").
    /// Falls back to `RUST_LOG`, then "info"
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            app_name: "twirl".to_string(),
            enable_console: true,
            ansi: false,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("app_name", &self.app_name)
            .field("enable_console", &self.enable_console)
            .field("ansi", &self.ansi)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable stderr output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Forward every formatted line to `sink` as well.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads `TWIRL_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let log_level = std::env::var("TWIRL_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            log_level,
            ..Default::default()
        }
    }
}
