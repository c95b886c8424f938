//! CSS parsing, cascade, layout and painting for the Wisp renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer and Parser**: rules made of compound selectors
//!   (`tag#id.class`, `*`) and one-value declarations (keyword, `px` length,
//!   `#rrggbb` color)
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/)):
//!   specificity ordering with source order as the tie-break; no inheritance
//! - **Box generation** ([§ 9.2](https://www.w3.org/TR/CSS2/visuren.html#box-gen)):
//!   block, inline, text and anonymous boxes
//! - **Layout** ([§ 10](https://www.w3.org/TR/CSS2/visudet.html)): block width
//!   and position, inline line boxes
//! - **Painting** ([Appendix E](https://www.w3.org/TR/CSS2/zindex.html)):
//!   background rectangles and text runs
//!
//! # Not Yet Implemented
//!
//! - Combinators, pseudo-classes, attribute selectors
//! - Inheritance and `!important`
//! - Units other than px, multi-value shorthands
//! - Explicit heights, margin collapsing, floats, positioning

/// Style resolution: matching rules to elements.
pub mod cascade;
/// Box tree and layout per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// CSS parser.
pub mod parser;
/// Compound selectors and specificity per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Declared value types.
pub mod style;
/// CSS tokenizer.
pub mod tokenizer;

pub use cascade::{PropertyMap, StyledNode, resolve};
pub use layout::{
    ApproximateFontMetrics, BoxDimensions, BoxType, DEFAULT_FONT_SIZE_PX, Display, EdgeSizes,
    FontMetrics, LayoutBox, LineBox, Rect, build,
};
pub use paint::{DisplayList, DrawCommand, Painter, Point, paint};
pub use parser::{Declaration, ParseError, Rule, Stylesheet, parse, parse_selector};
pub use selector::{Selector, Specificity};
pub use style::{ColorValue, Unit, Value};
pub use tokenizer::{CssToken, CssTokenizer};
