//! Box generation and layout.
//!
//! [§ 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! The box tree is built once from the styled tree by [`build`], then
//! [`LayoutBox::layout_root`] computes geometry in place. Boxes borrow their
//! styled nodes, so the styled tree outlives the box tree.
//!
//! Supported: block boxes (width, margin, border-width, padding), inline
//! boxes, text, anonymous block wrappers and line boxes. Heights always come
//! from content; there is no margin collapsing or positioning.

mod box_model;
mod builder;
mod inline;
mod layout_box;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use builder::{build, Display};
pub use inline::{ApproximateFontMetrics, DEFAULT_FONT_SIZE_PX, FontMetrics, LineBox};
pub use layout_box::{BoxType, LayoutBox};
