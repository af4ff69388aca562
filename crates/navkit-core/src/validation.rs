//! Declarative prop-shape validation.
//!
//! Components declare a [`PropRules`] set over their props type. The set is
//! checked against a props value before construction or rendering, so an
//! illegal combination is reported even for a component that never renders.

use crate::error::ConfigurationError;
use std::fmt;

/// A single rule over a props type.
pub trait PropRule<P>: Send + Sync {
    /// Check the props.
    fn check(&self, props: &P) -> Result<(), ConfigurationError>;

    /// Get the name of this rule.
    fn name(&self) -> &str;
}

/// Custom function rule.
pub struct Custom<F> {
    check: F,
    name: String,
}

impl<F> Custom<F> {
    /// Create a custom rule.
    pub fn new(name: &str, check: F) -> Self {
        Self {
            check,
            name: name.to_string(),
        }
    }
}

impl<P, F> PropRule<P> for Custom<F>
where
    F: Fn(&P) -> Result<(), ConfigurationError> + Send + Sync,
{
    fn check(&self, props: &P) -> Result<(), ConfigurationError> {
        (self.check)(props)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").field("name", &self.name).finish()
    }
}

/// Ordered set of rules for one component.
pub struct PropRules<P> {
    component: String,
    rules: Vec<Box<dyn PropRule<P>>>,
}

impl<P> PropRules<P> {
    /// Create an empty rule set for `component`.
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    #[must_use]
    pub fn rule<R: PropRule<P> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in check order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    /// Check every rule, stopping at the first failure.
    pub fn validate(&self, props: &P) -> Result<(), ConfigurationError> {
        for rule in &self.rules {
            if let Err(err) = rule.check(props) {
                tracing::warn!(
                    component = %self.component,
                    rule = rule.name(),
                    error = %err,
                    "rejected component configuration"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<P> fmt::Debug for PropRules<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropRules")
            .field("component", &self.component)
            .field("rules", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        a: bool,
        b: bool,
    }

    fn exclusive() -> Custom<impl Fn(&Sample) -> Result<(), ConfigurationError> + Send + Sync> {
        Custom::new("exclusive", |p: &Sample| {
            if p.a && p.b {
                Err(ConfigurationError::JustifiedNavbar)
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn test_rules_empty_passes() {
        let rules: PropRules<Sample> = PropRules::new("Sample");
        assert!(rules.validate(&Sample::default()).is_ok());
    }

    #[test]
    fn test_rules_custom_passes() {
        let rules = PropRules::new("Sample").rule(exclusive());
        assert!(rules.validate(&Sample { a: true, b: false }).is_ok());
    }

    #[test]
    fn test_rules_custom_fails() {
        let rules = PropRules::new("Sample").rule(exclusive());
        let err = rules.validate(&Sample { a: true, b: true }).unwrap_err();
        assert_eq!(err, ConfigurationError::JustifiedNavbar);
    }

    #[test]
    fn test_rules_stop_at_first_failure() {
        let checked = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = std::sync::Arc::clone(&checked);
        let rules = PropRules::new("Sample").rule(exclusive()).rule(Custom::new(
            "later",
            move |_: &Sample| {
                flag.store(true, std::sync::atomic::Ordering::SeqCst);
                Ok(())
            },
        ));
        assert!(rules.validate(&Sample { a: true, b: true }).is_err());
        assert!(!checked.load(std::sync::atomic::Ordering::SeqCst));
        assert!(rules.validate(&Sample::default()).is_ok());
        assert!(checked.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_rules_names_and_debug() {
        let rules = PropRules::new("Sample").rule(exclusive());
        assert_eq!(rules.names().collect::<Vec<_>>(), vec!["exclusive"]);
        assert!(format!("{rules:?}").contains("exclusive"));
    }
}
