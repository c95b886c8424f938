//! Painting: turning a laid-out box tree into drawing commands.
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)

mod display_list;
mod painter;

pub use display_list::{DisplayList, DrawCommand, Point};
pub use painter::{Painter, paint};
