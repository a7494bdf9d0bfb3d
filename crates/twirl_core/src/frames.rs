//! Cyclic frame source over a non-empty glyph catalog.

use crate::error::{Result, SpinnerError};

/// Ordered, non-empty sequence of glyphs with a wrapping cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSource {
    frames: Vec<String>,
    index: usize,
}

impl FrameSource {
    /// Builds a source positioned on the first glyph. Rejects an empty catalog.
    pub fn new<I, S>(frames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(SpinnerError::config("frame catalog is empty"));
        }
        Ok(Self { frames, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.frames[self.index]
    }

    /// Moves to the next glyph, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    /// Position of the current glyph; styles keyed per frame use it.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}
