//! Style tables: which colors each spinner part gets in each color mode.
//!
//! A [`StyleTable`] always has all three parts and both color sub-keys; the
//! loosely-typed [`RawStyles`] shape (as read from a settings file) is resolved
//! into one, and missing keys are reported as configuration errors.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use twirl_constant::colors::{ansi16, ansi256};

use crate::error::{Result, SpinnerError};

/// One of the three independently animated pieces of a spinner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    Frame,
    Message,
    Percent,
}

impl PartKind {
    pub const ALL: [PartKind; 3] = [PartKind::Frame, PartKind::Message, PartKind::Percent];

    /// Key used for this part in style tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::Frame => "frames",
            PartKind::Message => "message",
            PartKind::Percent => "percent",
        }
    }
}

impl FromStr for PartKind {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "frames" | "frame" | "spinner" => Ok(PartKind::Frame),
            "message" => Ok(PartKind::Message),
            "percent" | "progress" => Ok(PartKind::Percent),
            other => Err(SpinnerError::config(format!(
                "unknown style part [{other}], expected one of: frames, message, percent"
            ))),
        }
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Either switched off, or a list of entries that cycle with the frame index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Styling<T> {
    Disabled,
    Cycle(Vec<T>),
}

impl<T> Styling<T> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Styling::Disabled)
    }
}

/// 256-color entry: foreground palette index and optional background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color256 {
    pub fg: u8,
    pub bg: Option<u8>,
}

impl Color256 {
    pub fn fg(fg: u8) -> Self {
        Self { fg, bg: None }
    }

    pub fn fg_bg(fg: u8, bg: u8) -> Self {
        Self { fg, bg: Some(bg) }
    }
}

/// Color specification for one part. Each entry of `color` is an SGR parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartStyle {
    pub color256: Styling<Color256>,
    pub color: Styling<Vec<u8>>,
}

impl PartStyle {
    pub fn disabled() -> Self {
        Self {
            color256: Styling::Disabled,
            color: Styling::Disabled,
        }
    }

    /// 16-color only; 256-color terminals fall back to it.
    pub fn ansi16(codes: &[u8]) -> Self {
        Self {
            color256: Styling::Disabled,
            color: Styling::Cycle(vec![codes.to_vec()]),
        }
    }

    pub fn with_256(mut self, palette: &[u8]) -> Self {
        self.color256 = Styling::Cycle(palette.iter().map(|&fg| Color256::fg(fg)).collect());
        self
    }

    pub fn with_256_pairs(mut self, pairs: &[(u8, u8)]) -> Self {
        self.color256 = Styling::Cycle(
            pairs
                .iter()
                .map(|&(fg, bg)| Color256::fg_bg(fg, bg))
                .collect(),
        );
        self
    }
}

/// Complete mapping from part to color specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    pub frames: PartStyle,
    pub message: PartStyle,
    pub percent: PartStyle,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            frames: PartStyle::ansi16(ansi16::LIGHT_CYAN).with_256(ansi256::RAINBOW),
            message: PartStyle::ansi16(ansi16::DARK),
            percent: PartStyle::ansi16(ansi16::DARK),
        }
    }
}

impl StyleTable {
    /// Table with every part uncolored.
    pub fn disabled() -> Self {
        Self {
            frames: PartStyle::disabled(),
            message: PartStyle::disabled(),
            percent: PartStyle::disabled(),
        }
    }

    pub fn get(&self, kind: PartKind) -> &PartStyle {
        match kind {
            PartKind::Frame => &self.frames,
            PartKind::Message => &self.message,
            PartKind::Percent => &self.percent,
        }
    }

    pub fn get_mut(&mut self, kind: PartKind) -> &mut PartStyle {
        match kind {
            PartKind::Frame => &mut self.frames,
            PartKind::Message => &mut self.message,
            PartKind::Percent => &mut self.percent,
        }
    }

    pub fn with_part(mut self, kind: PartKind, style: PartStyle) -> Self {
        *self.get_mut(kind) = style;
        self
    }

    /// Resolves a raw table that must name every part and both sub-keys.
    pub fn resolve(raw: &RawStyles) -> Result<Self> {
        let mut parts = BTreeMap::new();
        for (key, part) in raw {
            parts.insert(key.parse::<PartKind>()?, part);
        }
        let mut table = Self::disabled();
        for kind in PartKind::ALL {
            let part = parts.get(&kind).ok_or_else(|| {
                SpinnerError::config(format!("styles do not have [{kind}] key"))
            })?;
            let color256 = part.color256.as_ref().ok_or_else(|| {
                SpinnerError::config(format!("styles do not have [{kind}][color256] key"))
            })?;
            let color = part.color.as_ref().ok_or_else(|| {
                SpinnerError::config(format!("styles do not have [{kind}][color] key"))
            })?;
            *table.get_mut(kind) = PartStyle {
                color256: color256.to_color256(kind)?,
                color: color.to_color16(kind)?,
            };
        }
        Ok(table)
    }

    /// Overlays a partial raw table onto `self`; absent keys keep their current value.
    pub fn merged(&self, raw: &RawStyles) -> Result<Self> {
        let mut table = self.clone();
        for (key, part) in raw {
            let kind = key.parse::<PartKind>()?;
            let target = table.get_mut(kind);
            if let Some(color256) = &part.color256 {
                target.color256 = color256.to_color256(kind)?;
            }
            if let Some(color) = &part.color {
                target.color = color.to_color16(kind)?;
            }
        }
        Ok(table)
    }
}

/// Style tables as written in settings files, keyed by part name.
pub type RawStyles = BTreeMap<String, RawPartStyle>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPartStyle {
    pub color256: Option<RawStyling>,
    pub color: Option<RawStyling>,
}

/// `"disabled"` or a list of entries; an entry is a number or a list of numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawStyling {
    Keyword(String),
    List(Vec<RawCode>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCode {
    One(u8),
    Many(Vec<u8>),
}

impl RawStyling {
    fn entries(&self, kind: PartKind, key: &str) -> Result<Option<&[RawCode]>> {
        match self {
            RawStyling::Keyword(word) if word.eq_ignore_ascii_case("disabled") => Ok(None),
            RawStyling::Keyword(word) => Err(SpinnerError::config(format!(
                "styles [{kind}][{key}]: unknown keyword \"{word}\""
            ))),
            RawStyling::List(list) if list.is_empty() => Err(SpinnerError::config(format!(
                "styles [{kind}][{key}]: empty list"
            ))),
            RawStyling::List(list) => Ok(Some(list.as_slice())),
        }
    }

    fn to_color16(&self, kind: PartKind) -> Result<Styling<Vec<u8>>> {
        let Some(entries) = self.entries(kind, "color")? else {
            return Ok(Styling::Disabled);
        };
        let mut codes = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                RawCode::One(code) => codes.push(vec![*code]),
                RawCode::Many(list) if list.is_empty() => {
                    return Err(SpinnerError::config(format!(
                        "styles [{kind}][color]: empty code list"
                    )));
                }
                RawCode::Many(list) => codes.push(list.clone()),
            }
        }
        Ok(Styling::Cycle(codes))
    }

    fn to_color256(&self, kind: PartKind) -> Result<Styling<Color256>> {
        let Some(entries) = self.entries(kind, "color256")? else {
            return Ok(Styling::Disabled);
        };
        let mut colors = Vec::with_capacity(entries.len());
        for entry in entries {
            let color = match entry {
                RawCode::One(fg) => Color256::fg(*fg),
                RawCode::Many(list) => match list.as_slice() {
                    [fg] => Color256::fg(*fg),
                    [fg, bg] => Color256::fg_bg(*fg, *bg),
                    _ => {
                        return Err(SpinnerError::config(format!(
                            "styles [{kind}][color256]: expected [fg] or [fg, bg], got {list:?}"
                        )));
                    }
                },
            };
            colors.push(color);
        }
        Ok(Styling::Cycle(colors))
    }
}
