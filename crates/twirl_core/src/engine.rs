//! Composition engine: turns the three part animators into one redraw string.
//!
//! Every render writes the line from the cursor's resting column and then moves
//! the cursor back to it. When the new line is narrower than the previous one,
//! the shrink delta is padded with spaces before moving back, so the only
//! history needed is the previous width.

use twirl_constant::app::ONE_SPACE;

use crate::coloring::ColorStyler;
use crate::part::{FrameAnimator, MessageAnimator, PartAnimator, ProgressAnimator};
use crate::terminal::cursor;

#[derive(Debug, Clone)]
pub struct CompositionEngine {
    styler: ColorStyler,
    frame: FrameAnimator,
    message: MessageAnimator,
    progress: ProgressAnimator,
    inline: bool,
    /// Columns occupied by the last emitted frame, spacer included.
    previous_width: usize,
}

impl CompositionEngine {
    pub fn new(styler: ColorStyler, frame: FrameAnimator, message: MessageAnimator) -> Self {
        Self {
            styler,
            frame,
            message,
            progress: ProgressAnimator::new(),
            inline: false,
            previous_width: 0,
        }
    }

    /// Composes the current frame, pads over leftovers of a wider previous
    /// frame, and moves the cursor back to the start.
    pub fn render(&mut self) -> String {
        let index = self.frame.index();
        let mut out = String::new();
        let mut width = 0;

        if self.inline {
            out.push_str(ONE_SPACE);
            width += 1;
        }

        let mut content_width = 0;
        for part in [&self.frame as &dyn PartAnimator, &self.message] {
            out.push_str(&part.styled_frame(&self.styler, index));
            content_width += part.frame_erasing_width();
        }
        let progress_width = self.progress.frame_erasing_width();
        if progress_width > 0 {
            // Leading space only when something precedes the percent.
            if content_width > 0 {
                out.push_str(ONE_SPACE);
                content_width += 1;
            }
            out.push_str(&self.progress.styled_frame(&self.styler, index));
            content_width += progress_width;
        }
        width += content_width;

        let padding = self.previous_width.saturating_sub(width);
        out.push_str(&" ".repeat(padding));
        out.push_str(&cursor::move_back(width + padding));

        self.previous_width = width;
        out
    }

    /// Blanks the previously drawn line without advancing the frame.
    pub fn erase(&mut self) -> String {
        let width = self.previous_width;
        self.previous_width = 0;
        format!("{}{}", " ".repeat(width), cursor::move_back(width))
    }

    pub fn advance_frame(&mut self) {
        self.frame.advance();
    }

    pub fn set_inline(&mut self, inline: bool) {
        self.inline = inline;
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn previous_width(&self) -> usize {
        self.previous_width
    }

    pub fn styler(&self) -> &ColorStyler {
        &self.styler
    }

    pub fn frame(&self) -> &FrameAnimator {
        &self.frame
    }

    pub fn message(&self) -> &MessageAnimator {
        &self.message
    }

    pub fn message_mut(&mut self) -> &mut MessageAnimator {
        &mut self.message
    }

    pub fn progress(&self) -> &ProgressAnimator {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressAnimator {
        &mut self.progress
    }
}
