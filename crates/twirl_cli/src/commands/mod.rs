//! Command dispatch.

pub mod frames;
pub mod presets;
pub mod spin;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Presets => presets::handle(),
        Command::Frames { preset } => frames::handle(&preset),
        Command::Spin(args) => spin::handle(args).await,
    }
}
