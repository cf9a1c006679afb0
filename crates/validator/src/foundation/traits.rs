//! Core traits for the validation system
//!
//! Every rule implements [`Rule`]; a [`RuleChain`] holds the ordered rules
//! bound to one field.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{FormError, MessageCatalog};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The contract every rule implements.
///
/// A rule receives the full multi-valued field (most rules look at the first
/// value only) plus the message catalog it should take its failure template
/// from. Parameters are bound at construction and never change afterwards, so
/// rules are freely shareable across threads.
///
/// Malformed input is a failure, never a panic.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::foundation::{ErrorKind, FormError, MessageCatalog, Rule};
///
/// #[derive(Debug)]
/// struct NoSpaces;
///
/// impl Rule for NoSpaces {
///     fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
///         match values.first() {
///             Some(v) if v.contains(' ') => Err(FormError::from_catalog(ErrorKind::AlphaNum, messages)),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Validates the submitted values of one field.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the values pass
    /// * `Err(FormError)` carrying the catalog template and format arguments
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError>;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        (**self).validate(values, messages)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        (**self).validate(values, messages)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        (**self).validate(values, messages)
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// The ordered rules bound to one field.
///
/// All rules run in declaration order; a failing rule does not stop the ones
/// after it.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::prelude::*;
///
/// let chain = RuleChain::new()
///     .rule(Required)
///     .rule(AlphaNumeric)
///     .rule(StrLen::new(2, 50));
/// assert_eq!(chain.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends an already boxed rule.
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Runs every rule and collects each failure in order.
    pub fn run(&self, values: &[String], messages: &MessageCatalog) -> Vec<FormError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(values, messages).err())
            .collect()
    }

    /// Number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the chain holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }
}

impl FromIterator<Box<dyn Rule>> for RuleChain {
    fn from_iter<I: IntoIterator<Item = Box<dyn Rule>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Box<dyn Rule>>> for RuleChain {
    fn from(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[derive(Debug)]
    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn validate(&self, _values: &[String], _messages: &MessageCatalog) -> Result<(), FormError> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct AlwaysFails(ErrorKind);

    impl Rule for AlwaysFails {
        fn validate(&self, _values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
            Err(FormError::from_catalog(self.0, messages))
        }
    }

    #[test]
    fn test_chain_runs_every_rule() {
        let chain = RuleChain::new()
            .rule(AlwaysFails(ErrorKind::Required))
            .rule(AlwaysValid)
            .rule(AlwaysFails(ErrorKind::Email));
        let errors = chain.run(&[], &MessageCatalog::default());
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::Required, ErrorKind::Email]);
    }

    #[test]
    fn test_empty_chain_reports_nothing() {
        let chain = RuleChain::new();
        assert!(chain.is_empty());
        assert!(chain.run(&["x".to_owned()], &MessageCatalog::default()).is_empty());
    }

    #[test]
    fn test_boxed_and_shared_rules_delegate() {
        let boxed: Box<dyn Rule> = Box::new(AlwaysFails(ErrorKind::Json));
        let shared: Arc<dyn Rule> = Arc::new(AlwaysValid);
        let messages = MessageCatalog::default();
        assert!(boxed.validate(&[], &messages).is_err());
        assert!(shared.validate(&[], &messages).is_ok());
    }

    #[test]
    fn test_template_comes_from_catalog() {
        let messages = MessageCatalog::empty().merged([("required", "Fill me in")]);
        let err = AlwaysFails(ErrorKind::Required)
            .validate(&[], &messages)
            .unwrap_err();
        assert_eq!(err.template, "Fill me in");
    }
}
