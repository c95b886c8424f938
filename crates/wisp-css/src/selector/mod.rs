//! Simple selectors and specificity.
//!
//! Only compound selectors of the form `tag#id.class1.class2` (every part
//! optional) and the universal selector `*` are supported. Combinators,
//! attribute selectors and pseudo-classes are not.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use wisp_dom::ElementData;

/// Weighted specificity: 100 per id, 10 per class, 1 per tag name.
///
/// A rule's specificity is the sum over all of its comma-separated selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32);

impl Specificity {
    /// Weight of an id requirement.
    pub const ID: u32 = 100;
    /// Weight of one class requirement.
    pub const CLASS: u32 = 10;
    /// Weight of a tag name requirement.
    pub const TAG: u32 = 1;
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A compound selector. All present parts must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Required tag name, lowercased.
    pub tag_name: Option<String>,
    /// Required `id` attribute value.
    pub id: Option<String>,
    /// Required class names, in source order.
    pub classes: Vec<String>,
}

impl Selector {
    /// The universal selector `*`.
    #[must_use]
    pub fn universal() -> Self {
        Self::default()
    }

    /// Specificity of this selector alone.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let id = if self.id.is_some() { Specificity::ID } else { 0 };
        let tag = if self.tag_name.is_some() { Specificity::TAG } else { 0 };
        let classes = u32::try_from(self.classes.len()).unwrap_or(u32::MAX);
        Specificity(
            classes
                .saturating_mul(Specificity::CLASS)
                .saturating_add(id)
                .saturating_add(tag),
        )
    }

    /// Whether this selector matches an element.
    ///
    /// An element with no `id` attribute never matches an id requirement, and
    /// one with no `class` attribute never matches a class requirement.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        if self
            .tag_name
            .as_ref()
            .is_some_and(|tag| *tag != element.tag_name)
        {
            return false;
        }
        if self.id.as_deref().is_some_and(|id| element.id() != Some(id)) {
            return false;
        }
        if self.classes.is_empty() {
            return true;
        }
        let element_classes = element.classes();
        self.classes
            .iter()
            .all(|class| element_classes.contains(class.as_str()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag_name.is_none() && self.id.is_none() && self.classes.is_empty() {
            return f.write_str("*");
        }
        if let Some(tag) = &self.tag_name {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(tag: Option<&str>, id: Option<&str>, classes: &[&str]) -> Selector {
        Selector {
            tag_name: tag.map(str::to_owned),
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    #[test]
    fn test_specificity_weights() {
        assert_eq!(Selector::universal().specificity(), Specificity(0));
        assert_eq!(selector(Some("p"), None, &[]).specificity(), Specificity(1));
        assert_eq!(selector(None, None, &["a", "b"]).specificity(), Specificity(20));
        assert_eq!(
            selector(Some("div"), Some("x"), &["a"]).specificity(),
            Specificity(111)
        );
    }

    #[test]
    fn test_specificity_sum() {
        let total: Specificity = [Specificity(1), Specificity(10), Specificity(100)]
            .into_iter()
            .sum();
        assert_eq!(total, Specificity(111));
    }

    #[test]
    fn test_display_round_trips_syntax() {
        assert_eq!(selector(Some("div"), Some("x"), &["a", "b"]).to_string(), "div#x.a.b");
        assert_eq!(Selector::universal().to_string(), "*");
    }
}
