pub mod coloring;
pub mod engine;
pub mod error;
pub mod frames;
pub mod output;
pub mod part;
pub mod preset;
pub mod settings;
pub mod spinner;
pub mod style;
pub mod terminal;

#[cfg(test)]
mod tests;

pub use coloring::{ColorMode, ColorStyler};
pub use engine::CompositionEngine;
pub use error::{Result, SpinnerError};
pub use frames::FrameSource;
pub use output::{BufferOutput, Output, SpinnerOutput, WriterOutput};
pub use part::{
    ActivePart, FrameAnimator, MessageAnimator, PartAnimator, PartState, ProgressAnimator,
    display_width,
};
pub use preset::SpinnerPreset;
pub use settings::{Settings, SettingsFile};
pub use spinner::{Spinner, SpinnerState};
pub use style::{Color256, PartKind, PartStyle, RawPartStyle, RawStyles, StyleTable, Styling};
pub use terminal::{ConsoleProbe, FixedProbe, TerminalProbe, cursor};
