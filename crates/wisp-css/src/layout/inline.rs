//! Font measurement and line boxes.
//!
//! [§ 9.4.2 Inline formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)

use std::ops::Range;

use serde::Serialize;

use super::box_model::Rect;

/// Font size every text run is measured and drawn at, in pixels.
pub const DEFAULT_FONT_SIZE_PX: f32 = 12.0;

/// Text measurement used by layout.
///
/// Both methods return whole pixels; layout converts them to `f32`.
/// Implementations must be deterministic so layout is repeatable.
pub trait FontMetrics {
    /// Sum of the glyph advances of `text`, each rounded to a whole pixel.
    fn advance_width(&self, text: &str) -> u32;

    /// Height of one line of text.
    fn line_height(&self) -> u32;
}

/// Fixed-pitch metrics: every character has the same advance.
///
/// Used in tests, and as a fallback when no font file can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateFontMetrics {
    /// Advance of every character, in pixels.
    pub char_width: u32,
    /// Line height, in pixels.
    pub line_height: u32,
}

impl Default for ApproximateFontMetrics {
    /// Roughly 0.6em advance and 1.2em line height at [`DEFAULT_FONT_SIZE_PX`].
    fn default() -> Self {
        Self {
            char_width: 7,
            line_height: 14,
        }
    }
}

impl FontMetrics for ApproximateFontMetrics {
    fn advance_width(&self, text: &str) -> u32 {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.char_width)
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// [§ 9.4.2](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
///
/// "The rectangular area that contains the boxes that form a line is called
/// a line box."
///
/// Line boxes are recorded on the box that owns the inline children; the
/// children themselves stay in the owner's `children` list and a line box
/// refers to them by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineBox {
    /// Full-width line rectangle. The height is the tallest child's content height.
    pub bounds: Rect,
    /// Width actually taken by the children, from the line's left edge.
    pub used_width: f32,
    /// Indices of the owner's children placed on this line.
    pub children: Range<usize>,
}
