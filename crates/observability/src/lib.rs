//! Logging setup shared by the twirl crates.
//!
//! Builds one `tracing` subscriber: an env filter, an optional formatter
//! writing to stderr (stdout belongs to the spinner), and an optional sink
//! receiving each event as a single line.
//!
//! ```no_run
//! use twirl_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("twirl").with_log_level("debug");
//! init(config)?;
//! tracing::info!("ready");
//! # Ok::<(), twirl_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `TWIRL_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod log_sink_layer;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use log_sink_layer::{LogSinkLayer, log_sink_layer};
pub use telemetry::{init, init_from_env};
