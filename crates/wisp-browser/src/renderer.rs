//! Software rasterizer for display lists.
//!
//! ```text
//! Style → Layout → Paint → Render
//!                    ↓        ↓
//!              DisplayList → Pixels
//! ```
//!
//! The renderer knows nothing about CSS, layout, or the DOM. It simply executes
//! drawing commands from the display list.

use fontdue::Font;
use image::{ImageBuffer, Rgba, RgbaImage};
use wisp_css::{ColorValue, DEFAULT_FONT_SIZE_PX, DisplayList, DrawCommand, Point, Rect};

/// Executes a display list onto a white RGBA buffer.
pub struct Renderer<'f> {
    buffer: RgbaImage,
    width: u32,
    height: u32,
    /// Text is skipped when there is no font.
    font: Option<&'f Font>,
}

impl<'f> Renderer<'f> {
    /// Create a renderer with a white buffer of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32, font: Option<&'f Font>) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        Self {
            buffer,
            width,
            height,
            font,
        }
    }

    /// Execute a display list, drawing all commands in order.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            match command {
                DrawCommand::FilledRect { color, rect } => self.fill_rect(*rect, *color),
                DrawCommand::TextRun { text, origin } => self.draw_text(text, *origin),
            }
        }
    }

    /// The finished pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    /// Set every pixel of `[x, x + width) × [y, y + height)`, each end
    /// truncated to an integer and clipped to the buffer. No blending.
    fn fill_rect(&mut self, rect: Rect, color: ColorValue) {
        let rgba = Rgba([color.r, color.g, color.b, color.a]);
        let (x0, x1) = (clip(rect.x, self.width), clip(rect.x + rect.width, self.width));
        let (y0, y1) = (clip(rect.y, self.height), clip(rect.y + rect.height, self.height));

        for py in y0..y1 {
            for px in x0..x1 {
                self.buffer.put_pixel(px, py, rgba);
            }
        }
    }

    /// Draw `text` in black with its top-left corner at `origin`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    fn draw_text(&mut self, text: &str, origin: Point) {
        let Some(font) = self.font else {
            return;
        };

        let black = Rgba([0, 0, 0, 255]);
        let font_size = DEFAULT_FONT_SIZE_PX;
        let mut cursor_x = origin.x;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let (metrics, bitmap) = font.rasterize(ch, font_size);

            // fontdue offsets are relative to the baseline.
            let glyph_x = cursor_x as i32 + metrics.xmin;
            let glyph_y =
                origin.y as i32 + (font_size as i32 - metrics.ymin - metrics.height as i32);

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let alpha = bitmap[gy * metrics.width + gx];
                    if alpha == 0 {
                        continue;
                    }
                    let px = glyph_x + gx as i32;
                    let py = glyph_y + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height
                    {
                        let bg = self.buffer.get_pixel(px as u32, py as u32);
                        let blended = alpha_blend(black, *bg, alpha);
                        self.buffer.put_pixel(px as u32, py as u32, blended);
                    }
                }
            }

            cursor_x += metrics.advance_width.round();
        }
    }
}

/// Truncate a coordinate and clamp it to `0..=limit`.
///
/// Float to integer `as` casts saturate, so negative values and NaN land on 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip(coordinate: f32, limit: u32) -> u32 {
    (coordinate as u32).min(limit)
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a) as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a) as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a) as u8,
        255,
    ])
}
