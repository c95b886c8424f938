//! Font loading and font metrics backed by fontdue.
//!
//! [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;
use wisp_css::{DEFAULT_FONT_SIZE_PX, FontMetrics};

/// Common system font paths to search for a default font.
pub const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Ratio of line height to font size.
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Errors from loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    /// The file could not be read.
    #[error("failed to read font '{}': {source}", path.display())]
    Read {
        /// The font file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file is not a font fontdue understands.
    #[error("failed to parse font '{}': {message}", path.display())]
    Parse {
        /// The font file.
        path: PathBuf,
        /// fontdue's description of the problem.
        message: &'static str,
    },
}

/// Load a TrueType or OpenType font from disk.
///
/// # Errors
///
/// Returns [`FontError`] if the file cannot be read or parsed.
pub fn load_font(path: &Path) -> Result<Font, FontError> {
    let data = fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Font::from_bytes(data, FontSettings::default()).map_err(|message| FontError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// The first font in [`FONT_SEARCH_PATHS`] that loads.
#[must_use]
pub fn load_system_font() -> Option<Font> {
    FONT_SEARCH_PATHS
        .iter()
        .find_map(|path| load_font(Path::new(path)).ok())
}

/// Font metrics implementation backed by fontdue's per-glyph metrics.
///
/// Measures at [`DEFAULT_FONT_SIZE_PX`], the size the renderer draws at.
/// Uses `Font::metrics()` rather than `Font::rasterize()`, so no bitmaps are
/// generated while measuring.
pub struct FontdueFontMetrics<'a> {
    font: &'a Font,
}

impl<'a> FontdueFontMetrics<'a> {
    /// Create a new font metrics provider from a fontdue Font.
    #[must_use]
    pub const fn new(font: &'a Font) -> Self {
        Self { font }
    }
}

impl FontMetrics for FontdueFontMetrics<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn advance_width(&self, text: &str) -> u32 {
        // Same cursor advance as Renderer::draw_text, rounded per glyph.
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| {
                self.font
                    .metrics(ch, DEFAULT_FONT_SIZE_PX)
                    .advance_width
                    .round() as u32
            })
            .sum()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn line_height(&self) -> u32 {
        // [§ 10.8.1](https://www.w3.org/TR/CSS2/visudet.html#leading)
        //
        // "We recommend a used value for 'normal' between 1.0 and 1.2."
        (DEFAULT_FONT_SIZE_PX * LINE_HEIGHT_RATIO).round() as u32
    }
}
