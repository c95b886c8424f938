//! CSS Value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

mod color;

pub use color::ColorValue;

use serde::Serialize;

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Only absolute pixels are understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// "px"
    Px,
}

/// A single declared value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// An identifier such as `block` or `auto`.
    Keyword(String),
    /// A number with a unit, e.g. `12px`.
    Length(f32, Unit),
    /// An sRGB color from `#rrggbb`.
    Color(ColorValue),
}

impl Value {
    /// Length in pixels. Keywords and colors count as zero.
    #[must_use]
    pub const fn to_px(&self) -> f32 {
        match self {
            Self::Length(px, Unit::Px) => *px,
            _ => 0.0,
        }
    }

    /// The keyword text, if this is a keyword.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(k) => Some(k.as_str()),
            _ => None,
        }
    }

    /// Whether this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.keyword() == Some(keyword)
    }

    /// Color for this value: a `#rrggbb` color directly, or a named color
    /// keyword such as `red`.
    #[must_use]
    pub fn to_color(&self) -> Option<ColorValue> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Keyword(name) => ColorValue::from_named(name),
            Self::Length(..) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(k) => f.write_str(k),
            Self::Length(px, Unit::Px) => write!(f, "{px}px"),
            Self::Color(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_px() {
        assert!((Value::Length(12.5, Unit::Px).to_px() - 12.5).abs() < f32::EPSILON);
        assert!(Value::Keyword("auto".into()).to_px().abs() < f32::EPSILON);
        assert!(Value::Color(ColorValue::BLACK).to_px().abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(
            Value::Keyword("red".into()).to_color(),
            Some(ColorValue::rgb(255, 0, 0))
        );
        assert_eq!(Value::Keyword("auto".into()).to_color(), None);
        assert_eq!(Value::Length(1.0, Unit::Px).to_color(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Length(4.0, Unit::Px).to_string(), "4px");
        assert_eq!(Value::Color(ColorValue::rgb(255, 0, 16)).to_string(), "#ff0010");
        assert_eq!(Value::Keyword("block".into()).to_string(), "block");
    }
}
