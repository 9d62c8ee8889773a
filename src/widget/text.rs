//! Text measurement context.

use crate::geometry::Size;

/// Measures rendered text. Supplied by the host; the engine only needs sizes.
pub trait TextMeasure {
    /// Size of `text` laid out on one line per `'\n'`.
    fn measure(&self, text: &str) -> Size;

    /// Height of one line of text.
    fn line_height(&self) -> f32 {
        self.measure("").height
    }
}

/// Fixed-pitch approximation: every character is half the text size wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(text_size: f32) -> Self {
        Self { char_width: text_size / 2.0, line_height: text_size }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Size {
        let lines = text.split('\n');
        let (count, widest) = lines.fold((0usize, 0usize), |(count, widest), line| {
            (count + 1, widest.max(line.chars().count()))
        });
        Size::new(widest as f32 * self.char_width, count as f32 * self.line_height)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
