//! Spinner controller: the Idle/Running state machine in front of the
//! composition engine.
//!
//! The controller never sleeps or schedules; callers invoke [`Spinner::spin`]
//! roughly every [`Spinner::interval`]. Every operation either writes its
//! escape string to the configured sink and returns `""`, or returns the
//! string for the caller to write. Both paths produce the same bytes.

use std::time::Duration;

use crate::coloring::{ColorMode, ColorStyler};
use crate::engine::CompositionEngine;
use crate::error::{Result, SpinnerError};
use crate::frames::FrameSource;
use crate::output::{Output, SpinnerOutput};
use crate::part::{FrameAnimator, MessageAnimator};
use crate::preset::SpinnerPreset;
use crate::settings::Settings;
use crate::terminal::{ConsoleProbe, TerminalProbe, cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerState {
    #[default]
    Idle,
    Running,
}

pub struct Spinner {
    name: String,
    interval: Duration,
    engine: CompositionEngine,
    output: Option<Box<dyn SpinnerOutput>>,
    state: SpinnerState,
}

impl Spinner {
    /// Builds a spinner, probing stdout for color support when `settings.color` is unset.
    pub fn new(settings: Settings, output: Output) -> Result<Self> {
        Self::with_probe(settings, output, &ConsoleProbe)
    }

    pub fn with_probe(
        settings: Settings,
        output: Output,
        probe: &dyn TerminalProbe,
    ) -> Result<Self> {
        let name = settings.name.clone();
        // Nothing reaches the output until everything here has succeeded.
        Self::build(settings, output, probe).map_err(|e| e.in_spinner(name))
    }

    fn build(settings: Settings, output: Output, probe: &dyn TerminalProbe) -> Result<Self> {
        if settings.interval.is_zero() {
            return Err(SpinnerError::config("interval must be greater than zero"));
        }
        let mode = ColorMode::resolve(settings.color, probe);
        let styler = ColorStyler::new(&settings.styles, mode)?;
        let source = FrameSource::new(settings.frames)?;
        let frame = FrameAnimator::new(source, settings.erasing_shift);

        let mut message = MessageAnimator::new(settings.message_prefix, settings.message_suffix);
        message.set(&settings.message, settings.message_erasing_width);

        let mut engine = CompositionEngine::new(styler, frame, message);
        engine.set_inline(settings.inline);

        tracing::debug!(
            spinner = %settings.name,
            color = %mode,
            interval_ms = settings.interval.as_millis() as u64,
            "spinner constructed"
        );

        Ok(Self {
            name: settings.name,
            interval: settings.interval,
            engine,
            output: output.into_sink(),
            state: SpinnerState::Idle,
        })
    }

    pub fn from_preset(preset: SpinnerPreset, output: Output) -> Result<Self> {
        Self::new(preset.settings(), output)
    }

    /// Default spinner with an initial status message.
    pub fn with_message(message: impl Into<String>, output: Output) -> Result<Self> {
        Self::new(Settings::default().with_message(message), output)
    }

    /// Hides the cursor and draws the first frame, optionally seeding progress.
    pub fn begin(&mut self, percent: Option<f64>) -> String {
        if let Some(percent) = percent {
            self.engine.progress_mut().set(percent);
        }
        self.state = SpinnerState::Running;
        tracing::debug!(spinner = %self.name, "spinner begin");
        let mut out = cursor::hide().to_string();
        out.push_str(&self.engine.render());
        self.emit(out)
    }

    /// Advances one frame and redraws.
    pub fn spin(&mut self) -> String {
        self.engine.advance_frame();
        let out = self.engine.render();
        self.emit(out)
    }

    /// Applies the given updates, then spins.
    pub fn spin_with(&mut self, percent: Option<f64>, message: Option<&str>) -> String {
        if let Some(percent) = percent {
            self.engine.progress_mut().set(percent);
        }
        if let Some(message) = message {
            self.engine.message_mut().set(message, None);
        }
        self.spin()
    }

    /// Sets the status message, or clears it with `None`. Takes effect on the next draw.
    pub fn message(&mut self, message: Option<&str>, erasing_width: Option<usize>) {
        match message {
            Some(text) => self.engine.message_mut().set(text, erasing_width),
            None => self.engine.message_mut().clear(),
        }
    }

    /// Sets progress as a fraction in `[0, 1]`, or clears it with `None`.
    pub fn progress(&mut self, percent: Option<f64>) {
        match percent {
            Some(value) => {
                self.engine.progress_mut().set(value);
            }
            None => self.engine.progress_mut().clear(),
        }
    }

    pub fn inline(&mut self, inline: bool) {
        self.engine.set_inline(inline);
    }

    /// Blanks the current line content without advancing the frame.
    pub fn erase(&mut self) -> String {
        let out = self.engine.erase();
        self.emit(out)
    }

    /// Erases and shows the cursor again.
    pub fn end(&mut self) -> String {
        let mut out = self.engine.erase();
        out.push_str(cursor::show());
        self.state = SpinnerState::Idle;
        tracing::debug!(spinner = %self.name, "spinner end");
        self.emit(out)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SpinnerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SpinnerState::Running
    }

    /// True when operations return their output instead of writing it.
    pub fn output_is_returned(&self) -> bool {
        self.output.is_none()
    }

    pub fn engine(&self) -> &CompositionEngine {
        &self.engine
    }

    fn emit(&mut self, out: String) -> String {
        match self.output.as_mut() {
            Some(sink) => {
                if !out.is_empty() {
                    sink.write(&out, false);
                }
                String::new()
            }
            None => out,
        }
    }
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .field("state", &self.state)
            .field("output_is_returned", &self.output_is_returned())
            .finish_non_exhaustive()
    }
}
