//! Rendering pipeline for the Wisp renderer.
//!
//! ```text
//! HTML ─parse→ DomTree ┐
//!                      ├─resolve→ StyledNode ─build→ LayoutBox ─layout→ paint → DisplayList → pixels
//! CSS  ─parse→ Stylesheet ┘
//! ```
//!
//! [`render`] runs the whole pipeline. [`build_display_list`] stops after
//! painting, for headless use with any [`FontMetrics`].

/// Font loading and fontdue-backed metrics.
pub mod font_metrics;
/// Display list rasterizer.
pub mod renderer;

pub use font_metrics::{
    FONT_SEARCH_PATHS, FontError, FontdueFontMetrics, load_font, load_system_font,
};
pub use fontdue::Font;
pub use renderer::Renderer;

use image::RgbaImage;
use thiserror::Error;
use wisp_common::{clear_warnings, warn_once};
use wisp_css::{ApproximateFontMetrics, DisplayList, FontMetrics};

/// Errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The HTML could not be parsed.
    #[error("HTML parse error: {0}")]
    Html(#[from] wisp_html::ParseError),
    /// The stylesheet could not be parsed.
    #[error("CSS parse error: {0}")]
    Css(#[from] wisp_css::ParseError),
}

/// Parse, style, lay out and paint a document.
///
/// Both inputs are parsed before anything else runs, so a syntax error in
/// either one returns early without layout.
///
/// # Errors
///
/// Returns [`RenderError`] if the HTML or the CSS does not parse.
pub fn build_display_list(
    html: &str,
    css: &str,
    width: u32,
    height: u32,
    font_metrics: &dyn FontMetrics,
) -> Result<DisplayList, RenderError> {
    let document = wisp_html::parse(html)?;
    let stylesheet = wisp_css::parse(css)?;

    let styled = wisp_css::resolve(&document, &stylesheet);
    let Some(mut root) = wisp_css::build(&styled) else {
        return Ok(DisplayList::new());
    };
    root.layout_root(to_px(width), to_px(height), font_metrics);
    Ok(wisp_css::paint(&root))
}

/// Render a document to a `width`×`height` image.
///
/// Text is measured and drawn with `font` at 12px. Without a font, layout
/// falls back to fixed-width metrics and text is not drawn.
///
/// # Errors
///
/// Returns [`RenderError`] if the HTML or the CSS does not parse.
pub fn render(
    html: &str,
    css: &str,
    width: u32,
    height: u32,
    font: Option<&Font>,
) -> Result<RgbaImage, RenderError> {
    clear_warnings();

    let display_list = if let Some(font) = font {
        build_display_list(html, css, width, height, &FontdueFontMetrics::new(font))?
    } else {
        warn_once("Font", "no font loaded; text will not be drawn");
        build_display_list(html, css, width, height, &ApproximateFontMetrics::default())?
    };

    let mut renderer = Renderer::new(width, height, font);
    renderer.render(&display_list);
    Ok(renderer.into_image())
}

#[allow(clippy::cast_precision_loss)]
fn to_px(value: u32) -> f32 {
    value as f32
}
