//! Conditional class-name composition.
//!
//! # Examples
//!
//! ```
//! use navkit_core::ClassNames;
//!
//! let classes = ClassNames::new()
//!     .with("nav")
//!     .with_if(true, "nav-tabs")
//!     .with_if(false, "nav-fill");
//! assert_eq!(classes.to_string(), "nav nav-tabs");
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// Ordered list of CSS class names.
///
/// Insertion order is kept for output. Empty and repeated names are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassNames {
    names: Vec<String>,
}

impl ClassNames {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated name in `class`.
    pub fn push(&mut self, class: &str) {
        for name in class.split_whitespace() {
            if !self.contains(name) {
                self.names.push(name.to_string());
            }
        }
    }

    /// Append `class` when `condition` holds.
    pub fn push_if(&mut self, condition: bool, class: impl AsRef<str>) {
        if condition {
            self.push(class.as_ref());
        }
    }

    /// Builder form of [`ClassNames::push`].
    #[must_use]
    pub fn with(mut self, class: impl AsRef<str>) -> Self {
        self.push(class.as_ref());
        self
    }

    /// Builder form of [`ClassNames::push_if`].
    #[must_use]
    pub fn with_if(mut self, condition: bool, class: impl AsRef<str>) -> Self {
        self.push_if(condition, class);
        self
    }

    /// Check if a class name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of class names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no class names are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Order-independent view of the names.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassNames {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut classes = Self::new();
        for class in iter {
            classes.push(class);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_class_names_empty() {
        let classes = ClassNames::new();
        assert!(classes.is_empty());
        assert_eq!(classes.to_string(), "");
    }

    #[test]
    fn test_class_names_conditional() {
        let classes = ClassNames::new()
            .with("nav")
            .with_if(false, "nav-fill")
            .with_if(true, "nav-justified");
        assert_eq!(classes.to_string(), "nav nav-justified");
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn test_class_names_splits_whitespace() {
        let classes = ClassNames::new().with("  my-nav   extra ");
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["my-nav", "extra"]);
    }

    #[test]
    fn test_class_names_dedup() {
        let classes = ClassNames::new().with("nav").with("nav");
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_class_names_from_iter() {
        let classes: ClassNames = ["a", "b c", ""].into_iter().collect();
        assert_eq!(classes.to_string(), "a b c");
        assert!(classes.contains("c"));
    }

    proptest! {
        #[test]
        fn prop_display_never_has_double_spaces(names in prop::collection::vec("[a-z ]{0,8}", 0..6)) {
            let classes: ClassNames = names.iter().map(String::as_str).collect();
            let rendered = classes.to_string();
            prop_assert!(!rendered.contains("  "));
            prop_assert_eq!(rendered.trim(), rendered.as_str());
        }
    }
}
