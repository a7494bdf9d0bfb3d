//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use twirl_constant::app::{DESCRIPTION, NAME, VERSION};

#[derive(Parser)]
#[command(name = NAME, version = VERSION, about = DESCRIPTION, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List built-in spinner presets
    Presets,
    /// Print a preset's frame catalog, one frame per line
    Frames {
        /// Preset name (e.g. snake, dots, bouncing-bar)
        preset: String,
    },
    /// Run a spinner for a while
    Spin(SpinArgs),
}

#[derive(Args, Debug, Default)]
pub struct SpinArgs {
    /// Preset to run. Uses TWIRL_PRESET or the config file if not set.
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Initial status message
    #[arg(short, long)]
    pub message: Option<String>,

    /// How long to spin
    #[arg(short, long, default_value_t = 3.0)]
    pub seconds: f64,

    /// Show a simulated percent indicator
    #[arg(long)]
    pub progress: bool,

    /// Draw after a spacer column, sharing the line with other text
    #[arg(long)]
    pub inline: bool,

    /// Color mode: none, 16, 256 or auto
    #[arg(long)]
    pub color: Option<String>,

    /// Frame interval in milliseconds (overrides the preset)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Settings file (default: ~/.twirl/config.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
