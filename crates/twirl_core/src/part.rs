//! Part animators: the frame glyph, the status message and the percent indicator.
//!
//! Each animator owns its display text (formatted, not colored) and the number
//! of columns needed to blank it out again. Message and percent parts start
//! [`PartState::Absent`] and contribute nothing until given a value; the frame
//! part is always active and only ever advances.

use twirl_constant::app::DOTS_SUFFIX;

use crate::coloring::ColorStyler;
use crate::frames::FrameSource;
use crate::style::PartKind;

/// Columns a string occupies, counted as codepoints. Wide glyphs are corrected
/// by the catalog's erasing shift, not here.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Display text plus its erasing width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePart {
    text: String,
    width: usize,
}

impl ActivePart {
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        Self {
            text: text.into(),
            width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PartState {
    #[default]
    Absent,
    Active(ActivePart),
}

impl PartState {
    pub fn is_active(&self) -> bool {
        matches!(self, PartState::Active(_))
    }

    /// Display text, `""` when absent.
    pub fn text(&self) -> &str {
        match self {
            PartState::Absent => "",
            PartState::Active(part) => part.text(),
        }
    }

    /// Erasing width, `0` when absent.
    pub fn width(&self) -> usize {
        match self {
            PartState::Absent => 0,
            PartState::Active(part) => part.width(),
        }
    }
}

/// The two operations the composition engine consumes.
pub trait PartAnimator {
    fn kind(&self) -> PartKind;

    /// Colored frame text for the current state; `""` when absent.
    fn styled_frame(&self, styler: &ColorStyler, frame_index: usize) -> String;

    /// Columns [`Self::styled_frame`] occupies once drawn; `0` when absent.
    fn frame_erasing_width(&self) -> usize;
}

/// Animates the glyph catalog.
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    source: FrameSource,
    shift: usize,
    current: ActivePart,
}

impl FrameAnimator {
    /// `shift` is added to every glyph's width for catalogs whose glyphs are
    /// wider on screen than their codepoint count.
    pub fn new(source: FrameSource, shift: usize) -> Self {
        let current = Self::measure(&source, shift);
        Self {
            source,
            shift,
            current,
        }
    }

    fn measure(source: &FrameSource, shift: usize) -> ActivePart {
        let glyph = source.current();
        ActivePart::new(glyph, display_width(glyph) + shift)
    }

    /// Pulls the next glyph. Width is re-measured since catalogs may mix widths.
    pub fn advance(&mut self) {
        self.source.advance();
        self.current = Self::measure(&self.source, self.shift);
    }

    pub fn index(&self) -> usize {
        self.source.index()
    }

    pub fn text(&self) -> &str {
        self.current.text()
    }

    pub fn source(&self) -> &FrameSource {
        &self.source
    }
}

impl PartAnimator for FrameAnimator {
    fn kind(&self) -> PartKind {
        PartKind::Frame
    }

    fn styled_frame(&self, styler: &ColorStyler, frame_index: usize) -> String {
        styler.style(PartKind::Frame, self.current.text(), frame_index)
    }

    fn frame_erasing_width(&self) -> usize {
        self.current.width()
    }
}

/// Status message. The value is capitalized and gets [`DOTS_SUFFIX`]; the
/// configured prefix and suffix surround it uncolored.
#[derive(Debug, Clone, Default)]
pub struct MessageAnimator {
    state: PartState,
    prefix: String,
    suffix: String,
}

impl MessageAnimator {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            state: PartState::Absent,
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Sets the message. `width` overrides the computed erasing width of the
    /// value. An empty message makes the part absent.
    pub fn set(&mut self, message: &str, width: Option<usize>) {
        let text = capitalize(message);
        if text.is_empty() {
            self.state = PartState::Absent;
            return;
        }
        let text = format!("{text}{DOTS_SUFFIX}");
        let width = width.unwrap_or_else(|| display_width(&text));
        self.state = PartState::Active(ActivePart::new(text, width));
    }

    pub fn clear(&mut self) {
        self.state = PartState::Absent;
    }

    pub fn state(&self) -> &PartState {
        &self.state
    }

    /// Display text of the value, e.g. `"Processing..."`.
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Erasing width of the value alone, without prefix or suffix.
    pub fn erasing_width(&self) -> usize {
        self.state.width()
    }
}

impl PartAnimator for MessageAnimator {
    fn kind(&self) -> PartKind {
        PartKind::Message
    }

    fn styled_frame(&self, styler: &ColorStyler, frame_index: usize) -> String {
        match &self.state {
            PartState::Absent => String::new(),
            PartState::Active(part) => format!(
                "{}{}{}",
                self.prefix,
                styler.style(PartKind::Message, part.text(), frame_index),
                self.suffix
            ),
        }
    }

    fn frame_erasing_width(&self) -> usize {
        match &self.state {
            PartState::Absent => 0,
            PartState::Active(part) => {
                display_width(&self.prefix) + part.width() + display_width(&self.suffix)
            }
        }
    }
}

/// Percent indicator. Recomputes only when the rounded percent changes.
#[derive(Debug, Clone, Default)]
pub struct ProgressAnimator {
    state: PartState,
    percent: Option<u32>,
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets progress from a fraction in `[0, 1]`; out-of-range values are
    /// clamped and NaN is ignored. Returns whether the display text changed.
    pub fn set(&mut self, fraction: f64) -> bool {
        let Some(percent) = to_percent(fraction) else {
            tracing::debug!(fraction, "ignoring non-numeric progress value");
            return false;
        };
        if self.percent == Some(percent) {
            return false;
        }
        let text = format!("{percent}%");
        let width = display_width(&text);
        self.percent = Some(percent);
        self.state = PartState::Active(ActivePart::new(text, width));
        true
    }

    pub fn clear(&mut self) {
        self.percent = None;
        self.state = PartState::Absent;
    }

    pub fn state(&self) -> &PartState {
        &self.state
    }

    pub fn percent(&self) -> Option<u32> {
        self.percent
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }
}

impl PartAnimator for ProgressAnimator {
    fn kind(&self) -> PartKind {
        PartKind::Percent
    }

    fn styled_frame(&self, styler: &ColorStyler, frame_index: usize) -> String {
        styler.style(PartKind::Percent, self.state.text(), frame_index)
    }

    fn frame_erasing_width(&self) -> usize {
        self.state.width()
    }
}

fn to_percent(fraction: f64) -> Option<u32> {
    if fraction.is_nan() {
        return None;
    }
    Some((fraction.clamp(0.0, 1.0) * 100.0).round() as u32)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::ColorMode;
    use crate::style::StyleTable;

    #[test]
    fn message_is_capitalized_with_suffix() {
        let mut message = MessageAnimator::new("", "");
        message.set("processing", None);
        assert_eq!(message.text(), "Processing...");
        assert_eq!(message.erasing_width(), 13);
        assert_eq!(message.frame_erasing_width(), 13);
    }

    #[test]
    fn explicit_width_overrides_computed() {
        let mut message = MessageAnimator::new("", "");
        message.set("processing", Some(9));
        assert_eq!(message.text(), "Processing...");
        assert_eq!(message.erasing_width(), 9);
    }

    #[test]
    fn multibyte_message_counts_codepoints() {
        let mut message = MessageAnimator::new("", "");
        message.set("ᚹädm漢字", None);
        assert_eq!(message.erasing_width(), 6 + 3);
    }

    #[test]
    fn prefix_counts_towards_frame_width_but_stays_uncolored() {
        let styler = ColorStyler::new(&StyleTable::default(), ColorMode::Ansi16).unwrap();
        let mut message = MessageAnimator::new(" ", "");
        message.set("loading", None);
        assert_eq!(message.frame_erasing_width(), 11);
        assert_eq!(
            message.styled_frame(&styler, 0),
            " \x1b[2mLoading...\x1b[0m"
        );
    }

    #[test]
    fn empty_message_is_absent() {
        let styler = ColorStyler::plain();
        let mut message = MessageAnimator::new(" ", "");
        message.set("working", None);
        message.set("", Some(40));
        assert!(!message.state().is_active());
        assert_eq!(message.styled_frame(&styler, 0), "");
        assert_eq!(message.frame_erasing_width(), 0);
    }

    #[test]
    fn absent_parts_contribute_nothing() {
        let styler = ColorStyler::new(&StyleTable::default(), ColorMode::Ansi256).unwrap();
        let message = MessageAnimator::new(" ", "!");
        let progress = ProgressAnimator::new();
        assert_eq!(message.styled_frame(&styler, 3), "");
        assert_eq!(message.frame_erasing_width(), 0);
        assert_eq!(progress.styled_frame(&styler, 3), "");
        assert_eq!(progress.frame_erasing_width(), 0);

        let mut cleared = ProgressAnimator::new();
        cleared.set(0.5);
        cleared.clear();
        assert_eq!(cleared.styled_frame(&styler, 0), "");
        assert_eq!(cleared.frame_erasing_width(), 0);
    }

    #[test]
    fn progress_recomputes_only_on_bucket_change() {
        let mut progress = ProgressAnimator::new();
        assert!(progress.set(0.001));
        assert_eq!(progress.text(), "0%");
        assert!(!progress.set(0.004));
        assert_eq!(progress.text(), "0%");
        assert!(progress.set(0.01));
        assert_eq!(progress.text(), "1%");
        assert_eq!(progress.frame_erasing_width(), 2);
    }

    #[test]
    fn progress_clamps_out_of_range() {
        let mut progress = ProgressAnimator::new();
        progress.set(1.7);
        assert_eq!(progress.text(), "100%");
        progress.set(-0.2);
        assert_eq!(progress.text(), "0%");
        assert!(!progress.set(f64::NAN));
        assert_eq!(progress.percent(), Some(0));
    }

    #[test]
    fn frame_width_includes_shift() {
        let source = FrameSource::new(["🕐", "🕑"]).unwrap();
        let mut frame = FrameAnimator::new(source, 1);
        assert_eq!(frame.frame_erasing_width(), 2);
        frame.advance();
        assert_eq!(frame.text(), "🕑");
        assert_eq!(frame.frame_erasing_width(), 2);
    }

    #[test]
    fn frame_width_recomputed_for_mixed_catalog() {
        let source = FrameSource::new([".", "..", "..."]).unwrap();
        let mut frame = FrameAnimator::new(source, 0);
        assert_eq!(frame.frame_erasing_width(), 1);
        frame.advance();
        frame.advance();
        assert_eq!(frame.frame_erasing_width(), 3);
        frame.advance();
        assert_eq!(frame.frame_erasing_width(), 1);
    }
}
