//! Spinner settings: one resolved struct, plus the layered TOML/env shape it is built from.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use twirl_constant::app::{DEFAULT_INTERVAL_MS, ONE_SPACE};
use twirl_constant::frames;

use crate::coloring::ColorMode;
use crate::error::{Result, SpinnerError};
use crate::output::Output;
use crate::preset::SpinnerPreset;
use crate::style::{RawPartStyle, RawStyles, StyleTable};

/// Fully-resolved spinner configuration. The core treats it as immutable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Variant name, used to tag construction errors.
    pub name: String,
    pub interval: Duration,
    pub frames: Vec<String>,
    pub styles: StyleTable,
    /// Initial status message; empty means none.
    pub message: String,
    /// Overrides the computed erasing width of the initial message.
    pub message_erasing_width: Option<usize>,
    pub message_prefix: String,
    pub message_suffix: String,
    pub inline: bool,
    pub erasing_shift: usize,
    /// `None` probes the terminal.
    pub color: Option<ColorMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            frames: frames::BRAILLE.iter().map(|f| f.to_string()).collect(),
            styles: StyleTable::default(),
            message: String::new(),
            message_erasing_width: None,
            message_prefix: ONE_SPACE.to_string(),
            message_suffix: String::new(),
            inline: false,
            erasing_shift: 0,
            color: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_message_erasing_width(mut self, width: usize) -> Self {
        self.message_erasing_width = Some(width);
        self
    }

    pub fn with_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_prefix = prefix.into();
        self
    }

    pub fn with_message_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.message_suffix = suffix.into();
        self
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_erasing_shift(mut self, shift: usize) -> Self {
        self.erasing_shift = shift;
        self
    }

    pub fn with_color(mut self, color: Option<ColorMode>) -> Self {
        self.color = color;
        self
    }

    /// Overlays every field of `other` that differs from the defaults.
    pub fn merge(&mut self, other: Settings) {
        let defaults = Settings::default();
        if other.name != defaults.name {
            self.name = other.name;
        }
        if other.interval != defaults.interval {
            self.interval = other.interval;
        }
        if other.frames != defaults.frames {
            self.frames = other.frames;
        }
        if other.styles != defaults.styles {
            self.styles = other.styles;
        }
        if other.message != defaults.message {
            self.message = other.message;
            self.message_erasing_width = other.message_erasing_width;
        } else if other.message_erasing_width.is_some() {
            self.message_erasing_width = other.message_erasing_width;
        }
        if other.message_prefix != defaults.message_prefix {
            self.message_prefix = other.message_prefix;
        }
        if other.message_suffix != defaults.message_suffix {
            self.message_suffix = other.message_suffix;
        }
        if other.inline != defaults.inline {
            self.inline = other.inline;
        }
        if other.erasing_shift != defaults.erasing_shift {
            self.erasing_shift = other.erasing_shift;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    /// Reads a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        SettingsFile::load(path)?.into_settings()
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        SettingsFile::from_toml_str(source)?.into_settings()
    }
}

/// Partial settings as written in a TOML file or collected from the environment.
/// Layers combine with [`SettingsFile::overlay`]; the result resolves into [`Settings`]
/// on top of its base `preset`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub preset: Option<String>,
    pub interval_ms: Option<u64>,
    pub frames: Option<Vec<String>>,
    pub message: Option<String>,
    pub message_erasing_width: Option<usize>,
    pub message_prefix: Option<String>,
    pub message_suffix: Option<String>,
    pub inline: Option<bool>,
    pub erasing_shift: Option<usize>,
    /// `none`, `16`, `256` or `auto`.
    pub color: Option<String>,
    /// `none`, `stdout` or `stderr`.
    pub output: Option<String>,
    #[serde(default)]
    pub styles: RawStyles,
}

impl SettingsFile {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading spinner settings");
        Self::from_toml_str(&source)
    }

    /// Reads `TWIRL_PRESET`, `TWIRL_INTERVAL_MS`, `TWIRL_MESSAGE`, `TWIRL_COLOR`
    /// and `TWIRL_OUTPUT`.
    pub fn from_env() -> Result<Self> {
        let interval_ms = match std::env::var("TWIRL_INTERVAL_MS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                SpinnerError::config(format!("TWIRL_INTERVAL_MS=\"{raw}\": {e}"))
            })?),
            Err(_) => None,
        };
        Ok(Self {
            preset: std::env::var("TWIRL_PRESET").ok(),
            interval_ms,
            message: std::env::var("TWIRL_MESSAGE").ok(),
            color: std::env::var("TWIRL_COLOR").ok(),
            output: std::env::var("TWIRL_OUTPUT").ok(),
            ..Default::default()
        })
    }

    /// Combines two layers; values set in `top` win, style tables merge per key.
    pub fn overlay(mut self, top: SettingsFile) -> Self {
        fn pick<T>(base: &mut Option<T>, top: Option<T>) {
            if top.is_some() {
                *base = top;
            }
        }
        pick(&mut self.preset, top.preset);
        pick(&mut self.interval_ms, top.interval_ms);
        pick(&mut self.frames, top.frames);
        pick(&mut self.message, top.message);
        pick(&mut self.message_erasing_width, top.message_erasing_width);
        pick(&mut self.message_prefix, top.message_prefix);
        pick(&mut self.message_suffix, top.message_suffix);
        pick(&mut self.inline, top.inline);
        pick(&mut self.erasing_shift, top.erasing_shift);
        pick(&mut self.color, top.color);
        pick(&mut self.output, top.output);
        for (key, part) in top.styles {
            let entry: &mut RawPartStyle = self.styles.entry(key).or_default();
            pick(&mut entry.color256, part.color256);
            pick(&mut entry.color, part.color);
        }
        self
    }

    pub fn base_preset(&self) -> Result<Option<SpinnerPreset>> {
        self.preset.as_deref().map(str::parse).transpose()
    }

    /// Output target named by the `output` key, if any.
    pub fn output_target(&self) -> Result<Option<Output>> {
        self.output.as_deref().map(str::parse).transpose()
    }

    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = match self.base_preset()? {
            Some(preset) => preset.settings(),
            None => Settings::default(),
        };
        if let Some(ms) = self.interval_ms {
            if ms == 0 {
                return Err(SpinnerError::config("interval_ms must be greater than zero"));
            }
            settings.interval = Duration::from_millis(ms);
        }
        if let Some(frames) = self.frames {
            settings.frames = frames;
            settings.name = "custom".to_string();
        }
        if let Some(message) = self.message {
            settings.message = message;
        }
        if let Some(width) = self.message_erasing_width {
            settings.message_erasing_width = Some(width);
        }
        if let Some(prefix) = self.message_prefix {
            settings.message_prefix = prefix;
        }
        if let Some(suffix) = self.message_suffix {
            settings.message_suffix = suffix;
        }
        if let Some(inline) = self.inline {
            settings.inline = inline;
        }
        if let Some(shift) = self.erasing_shift {
            settings.erasing_shift = shift;
        }
        if let Some(color) = self.color {
            settings.color = ColorMode::parse_optional(&color)?;
        }
        if !self.styles.is_empty() {
            settings.styles = settings.styles.merged(&self.styles)?;
        }
        Ok(settings)
    }
}
