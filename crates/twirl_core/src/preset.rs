//! Built-in spinner variants, each a frame catalog, an interval and a style table.

use std::str::FromStr;
use std::time::Duration;

use twirl_constant::colors::{ansi16, ansi256};
use twirl_constant::frames;

use crate::error::{Result, SpinnerError};
use crate::settings::Settings;
use crate::style::{PartKind, PartStyle, StyleTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinnerPreset {
    #[default]
    Snake,
    Dots,
    Braille,
    Block,
    Circle,
    Sectors,
    Clock,
    Moon,
    Earth,
    Arrow,
    BouncingBar,
    Trigram,
    Dice,
    Toggle,
    Weather,
    Simple,
    Diamond,
}

impl SpinnerPreset {
    pub const ALL: [SpinnerPreset; 17] = [
        SpinnerPreset::Snake,
        SpinnerPreset::Dots,
        SpinnerPreset::Braille,
        SpinnerPreset::Block,
        SpinnerPreset::Circle,
        SpinnerPreset::Sectors,
        SpinnerPreset::Clock,
        SpinnerPreset::Moon,
        SpinnerPreset::Earth,
        SpinnerPreset::Arrow,
        SpinnerPreset::BouncingBar,
        SpinnerPreset::Trigram,
        SpinnerPreset::Dice,
        SpinnerPreset::Toggle,
        SpinnerPreset::Weather,
        SpinnerPreset::Simple,
        SpinnerPreset::Diamond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpinnerPreset::Snake => "snake",
            SpinnerPreset::Dots => "dots",
            SpinnerPreset::Braille => "braille",
            SpinnerPreset::Block => "block",
            SpinnerPreset::Circle => "circle",
            SpinnerPreset::Sectors => "sectors",
            SpinnerPreset::Clock => "clock",
            SpinnerPreset::Moon => "moon",
            SpinnerPreset::Earth => "earth",
            SpinnerPreset::Arrow => "arrow",
            SpinnerPreset::BouncingBar => "bouncing-bar",
            SpinnerPreset::Trigram => "trigram",
            SpinnerPreset::Dice => "dice",
            SpinnerPreset::Toggle => "toggle",
            SpinnerPreset::Weather => "weather",
            SpinnerPreset::Simple => "simple",
            SpinnerPreset::Diamond => "diamond",
        }
    }

    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerPreset::Snake => frames::SNAKE,
            SpinnerPreset::Dots => frames::DOTS,
            SpinnerPreset::Braille => frames::BRAILLE,
            SpinnerPreset::Block => frames::BLOCK,
            SpinnerPreset::Circle => frames::CIRCLES,
            SpinnerPreset::Sectors => frames::SECTORS,
            SpinnerPreset::Clock => frames::CLOCK,
            SpinnerPreset::Moon => frames::MOON,
            SpinnerPreset::Earth => frames::EARTH,
            SpinnerPreset::Arrow => frames::ARROW,
            SpinnerPreset::BouncingBar => frames::BOUNCING_BAR,
            SpinnerPreset::Trigram => frames::TRIGRAM,
            SpinnerPreset::Dice => frames::DICE,
            SpinnerPreset::Toggle => frames::TOGGLE,
            SpinnerPreset::Weather => frames::WEATHER,
            SpinnerPreset::Simple => frames::SIMPLE,
            SpinnerPreset::Diamond => frames::DIAMOND,
        }
    }

    pub fn interval(&self) -> Duration {
        let ms = match self {
            SpinnerPreset::Circle | SpinnerPreset::Sectors => 170,
            SpinnerPreset::Dots | SpinnerPreset::Clock | SpinnerPreset::Moon => 150,
            SpinnerPreset::Arrow | SpinnerPreset::Simple => 120,
            SpinnerPreset::Trigram | SpinnerPreset::Dice | SpinnerPreset::Weather => 200,
            SpinnerPreset::Toggle => 250,
            SpinnerPreset::Earth => 300,
            SpinnerPreset::Snake
            | SpinnerPreset::Braille
            | SpinnerPreset::Block
            | SpinnerPreset::BouncingBar
            | SpinnerPreset::Diamond => 100,
        };
        Duration::from_millis(ms)
    }

    /// Extra columns per glyph for catalogs of single-codepoint, two-cell emoji.
    /// Weather frames already carry a padding space, so they need none.
    pub fn erasing_shift(&self) -> usize {
        match self {
            SpinnerPreset::Clock | SpinnerPreset::Moon | SpinnerPreset::Earth => 1,
            _ => 0,
        }
    }

    pub fn styles(&self) -> StyleTable {
        let base = StyleTable::default();
        match self {
            SpinnerPreset::Block => base.with_part(
                PartKind::Frame,
                PartStyle::ansi16(ansi16::LIGHT_CYAN).with_256(ansi256::CYAN_SHADES),
            ),
            SpinnerPreset::Circle => base.with_part(
                PartKind::Frame,
                PartStyle::ansi16(ansi16::LIGHT_YELLOW).with_256(ansi256::YELLOW_WHITE),
            ),
            SpinnerPreset::Sectors => {
                base.with_part(PartKind::Frame, PartStyle::ansi16(ansi16::LIGHT_CYAN))
            }
            SpinnerPreset::Dots | SpinnerPreset::Arrow => base.with_part(
                PartKind::Frame,
                PartStyle::ansi16(ansi16::LIGHT_BLUE).with_256(ansi256::ROYAL_BLUE),
            ),
            SpinnerPreset::Dice => base.with_part(
                PartKind::Frame,
                PartStyle::ansi16(ansi16::BOLD).with_256_pairs(ansi256::WHITE_ON_RAINBOW),
            ),
            SpinnerPreset::Clock
            | SpinnerPreset::Moon
            | SpinnerPreset::Earth
            | SpinnerPreset::Weather => base
                .with_part(PartKind::Frame, PartStyle::disabled())
                .with_part(
                    PartKind::Message,
                    PartStyle::ansi16(ansi16::DARK).with_256(ansi256::DARK_GREY),
                ),
            _ => base,
        }
    }

    /// Fully-resolved settings for this preset.
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_name(self.name())
            .with_interval(self.interval())
            .with_frames(self.frames().iter().copied())
            .with_styles(self.styles())
            .with_erasing_shift(self.erasing_shift())
    }
}

impl FromStr for SpinnerPreset {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        SpinnerPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = SpinnerPreset::ALL.iter().map(|p| p.name()).collect();
                SpinnerError::config(format!(
                    "unknown preset \"{s}\". Available: {}",
                    names.join(", ")
                ))
            })
    }
}

impl std::fmt::Display for SpinnerPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::display_width;

    #[test]
    fn names_round_trip_through_from_str() {
        for preset in SpinnerPreset::ALL {
            assert_eq!(preset.name().parse::<SpinnerPreset>().unwrap(), preset);
        }
        assert_eq!(
            "Bouncing_Bar".parse::<SpinnerPreset>().unwrap(),
            SpinnerPreset::BouncingBar
        );
    }

    #[test]
    fn unknown_preset_lists_available() {
        let err = "spiral".parse::<SpinnerPreset>().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("snake"));
    }

    #[test]
    fn catalogs_are_non_empty_and_width_stable() {
        for preset in SpinnerPreset::ALL {
            let frames = preset.frames();
            assert!(!frames.is_empty(), "{preset}");
            let first = display_width(frames[0]);
            assert!(
                frames.iter().all(|f| display_width(f) == first),
                "{preset} mixes glyph widths"
            );
        }
    }

    #[test]
    fn settings_carry_preset_identity() {
        let settings = SpinnerPreset::Clock.settings();
        assert_eq!(settings.name, "clock");
        assert_eq!(settings.erasing_shift, 1);
        assert_eq!(settings.interval, Duration::from_millis(150));
        assert_eq!(settings.frames.len(), 12);
    }
}
