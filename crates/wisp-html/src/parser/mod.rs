//! Tree construction.

mod tree_builder;

pub use tree_builder::{HtmlParser, format_tree};
