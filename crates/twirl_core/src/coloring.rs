//! Per-part coloring: wraps already-formatted text in SGR escapes.
//!
//! Escape prefixes are built once from the [`StyleTable`] for the resolved
//! [`ColorMode`]; styling a frame is then a lookup plus a concatenation.
//! Widths are never computed from styled text.

use std::str::FromStr;

use crate::error::{Result, SpinnerError};
use crate::style::{PartKind, PartStyle, StyleTable, Styling};
use crate::terminal::TerminalProbe;

const RESET: &str = "\x1b[0m";

/// Terminal color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    NoColor,
    Ansi16,
    Ansi256,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::NoColor => "none",
            ColorMode::Ansi16 => "16",
            ColorMode::Ansi256 => "256",
        }
    }

    /// Explicit mode wins; otherwise ask the probe.
    pub fn resolve(explicit: Option<ColorMode>, probe: &dyn TerminalProbe) -> ColorMode {
        if let Some(mode) = explicit {
            return mode;
        }
        if !probe.supports_color() {
            ColorMode::NoColor
        } else if probe.supports_256_color() {
            ColorMode::Ansi256
        } else {
            ColorMode::Ansi16
        }
    }

    /// Parses a mode name; `auto` (or empty) means "probe the terminal".
    pub fn parse_optional(s: &str) -> Result<Option<ColorMode>> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for ColorMode {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "no" | "off" | "0" => Ok(ColorMode::NoColor),
            "16" | "color" | "ansi" => Ok(ColorMode::Ansi16),
            "256" | "color256" | "ansi256" => Ok(ColorMode::Ansi256),
            other => Err(SpinnerError::config(format!(
                "unknown color mode \"{other}\", expected none, 16, 256 or auto"
            ))),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved escape prefixes for the three parts. An empty list means identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStyler {
    mode: ColorMode,
    frames: Vec<String>,
    message: Vec<String>,
    percent: Vec<String>,
}

impl ColorStyler {
    pub fn new(table: &StyleTable, mode: ColorMode) -> Result<Self> {
        Ok(Self {
            mode,
            frames: prefixes(table.get(PartKind::Frame), PartKind::Frame, mode)?,
            message: prefixes(table.get(PartKind::Message), PartKind::Message, mode)?,
            percent: prefixes(table.get(PartKind::Percent), PartKind::Percent, mode)?,
        })
    }

    /// Styler that returns every text unchanged.
    pub fn plain() -> Self {
        Self {
            mode: ColorMode::NoColor,
            frames: Vec::new(),
            message: Vec::new(),
            percent: Vec::new(),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Wraps `text` in the part's escape for `frame_index`; multi-entry styles
    /// cycle in lockstep with the frame glyph.
    pub fn style(&self, kind: PartKind, text: &str, frame_index: usize) -> String {
        let list = match kind {
            PartKind::Frame => &self.frames,
            PartKind::Message => &self.message,
            PartKind::Percent => &self.percent,
        };
        if list.is_empty() || text.is_empty() {
            return text.to_string();
        }
        let prefix = &list[frame_index % list.len()];
        format!("{prefix}{text}{RESET}")
    }
}

fn prefixes(style: &PartStyle, kind: PartKind, mode: ColorMode) -> Result<Vec<String>> {
    match mode {
        ColorMode::NoColor => Ok(Vec::new()),
        ColorMode::Ansi256 => match &style.color256 {
            Styling::Disabled => prefixes16(&style.color, kind),
            Styling::Cycle(colors) => {
                if colors.is_empty() {
                    return Err(SpinnerError::config(format!(
                        "styles [{kind}][color256] is an empty list"
                    )));
                }
                Ok(colors
                    .iter()
                    .map(|c| match c.bg {
                        Some(bg) => format!("\x1b[38;5;{};48;5;{}m", c.fg, bg),
                        None => format!("\x1b[38;5;{}m", c.fg),
                    })
                    .collect())
            }
        },
        ColorMode::Ansi16 => prefixes16(&style.color, kind),
    }
}

fn prefixes16(color: &Styling<Vec<u8>>, kind: PartKind) -> Result<Vec<String>> {
    match color {
        Styling::Disabled => Ok(Vec::new()),
        Styling::Cycle(codes) => {
            if codes.is_empty() || codes.iter().any(|c| c.is_empty()) {
                return Err(SpinnerError::config(format!(
                    "styles [{kind}][color] has an empty entry"
                )));
            }
            Ok(codes
                .iter()
                .map(|params| {
                    let joined: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                    format!("\x1b[{}m", joined.join(";"))
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color256, PartStyle};
    use crate::terminal::FixedProbe;

    fn cycling_table() -> StyleTable {
        StyleTable::default().with_part(
            PartKind::Frame,
            PartStyle {
                color256: Styling::Cycle(vec![
                    Color256::fg_bg(1, 1),
                    Color256::fg_bg(2, 2),
                    Color256::fg_bg(3, 3),
                    Color256::fg_bg(4, 4),
                ]),
                color: Styling::Cycle(vec![vec![31], vec![32]]),
            },
        )
    }

    #[test]
    fn no_color_is_identity_for_any_table() {
        for table in [StyleTable::default(), cycling_table(), StyleTable::disabled()] {
            let styler = ColorStyler::new(&table, ColorMode::NoColor).unwrap();
            for kind in PartKind::ALL {
                for (i, text) in ["⠋", "Processing...", " 42%", "", "\x1b[1mraw"].iter().enumerate() {
                    assert_eq!(styler.style(kind, text, i), *text);
                }
            }
        }
    }

    #[test]
    fn ansi16_wraps_with_joined_codes() {
        let table = StyleTable::default()
            .with_part(PartKind::Message, PartStyle::ansi16(&[1, 96]));
        let styler = ColorStyler::new(&table, ColorMode::Ansi16).unwrap();
        assert_eq!(
            styler.style(PartKind::Message, "Done...", 0),
            "\x1b[1;96mDone...\x1b[0m"
        );
        assert_eq!(styler.style(PartKind::Frame, "⠋", 7), "\x1b[96m⠋\x1b[0m");
    }

    #[test]
    fn ansi256_cycles_with_frame_index() {
        let styler = ColorStyler::new(&cycling_table(), ColorMode::Ansi256).unwrap();
        assert_eq!(
            styler.style(PartKind::Frame, "1", 0),
            "\x1b[38;5;1;48;5;1m1\x1b[0m"
        );
        assert_eq!(
            styler.style(PartKind::Frame, "4", 3),
            "\x1b[38;5;4;48;5;4m4\x1b[0m"
        );
        assert_eq!(
            styler.style(PartKind::Frame, "1", 4),
            "\x1b[38;5;1;48;5;1m1\x1b[0m"
        );
    }

    #[test]
    fn ansi256_falls_back_to_16_when_disabled() {
        let styler = ColorStyler::new(&StyleTable::default(), ColorMode::Ansi256).unwrap();
        assert_eq!(
            styler.style(PartKind::Percent, "42%", 0),
            "\x1b[2m42%\x1b[0m"
        );
    }

    #[test]
    fn fully_disabled_part_is_identity() {
        let styler = ColorStyler::new(&StyleTable::disabled(), ColorMode::Ansi256).unwrap();
        assert_eq!(styler.style(PartKind::Frame, "◐", 2), "◐");
    }

    #[test]
    fn empty_cycle_is_config_error() {
        let table = StyleTable::default().with_part(
            PartKind::Percent,
            PartStyle {
                color256: Styling::Cycle(Vec::new()),
                color: Styling::Disabled,
            },
        );
        let err = ColorStyler::new(&table, ColorMode::Ansi256).unwrap_err();
        assert!(err.is_config());
        // The broken 256 list is never consulted in 16-color mode.
        assert!(ColorStyler::new(&table, ColorMode::Ansi16).is_ok());
    }

    #[test]
    fn resolve_prefers_explicit_mode() {
        let rich = FixedProbe {
            color: true,
            color256: true,
        };
        assert_eq!(
            ColorMode::resolve(Some(ColorMode::NoColor), &rich),
            ColorMode::NoColor
        );
        assert_eq!(ColorMode::resolve(None, &rich), ColorMode::Ansi256);
        let basic = FixedProbe {
            color: true,
            color256: false,
        };
        assert_eq!(ColorMode::resolve(None, &basic), ColorMode::Ansi16);
        assert_eq!(
            ColorMode::resolve(None, &FixedProbe::default()),
            ColorMode::NoColor
        );
    }

    #[test]
    fn parse_modes() {
        assert_eq!("256".parse::<ColorMode>().unwrap(), ColorMode::Ansi256);
        assert_eq!("None".parse::<ColorMode>().unwrap(), ColorMode::NoColor);
        assert_eq!(ColorMode::parse_optional("auto").unwrap(), None);
        assert!("rgb".parse::<ColorMode>().is_err());
    }
}
