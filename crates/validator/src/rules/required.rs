//! Presence rules
//!
//! These are the only rules that fail on an empty field.

use crate::foundation::{ErrorKind, FormError, MessageCatalog, Rule};

// ============================================================================
// REQUIRED
// ============================================================================

/// Requires exactly one non-empty value.
///
/// More than one submitted value fails with `multiple_entries`, even when the
/// first one is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

impl Rule for Required {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        match values {
            [only] if !only.is_empty() => Ok(()),
            [_, _, ..] => Err(FormError::from_catalog(
                ErrorKind::MultipleEntries,
                messages,
            )),
            _ => Err(FormError::from_catalog(ErrorKind::Required, messages)),
        }
    }
}

// ============================================================================
// REQUIRED MULTIPLE
// ============================================================================

/// Requires at least one submitted value. Blank values count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequiredMultiple;

impl Rule for RequiredMultiple {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        if values.is_empty() {
            Err(FormError::from_catalog(ErrorKind::Required, messages))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &dyn Rule, values: &[&str]) -> Result<(), ErrorKind> {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        rule.validate(&values, &MessageCatalog::default())
            .map_err(|e| e.kind)
    }

    #[test]
    fn test_required() {
        assert_eq!(run(&Required, &["x"]), Ok(()));
        assert_eq!(run(&Required, &[]), Err(ErrorKind::Required));
        assert_eq!(run(&Required, &[""]), Err(ErrorKind::Required));
        assert_eq!(run(&Required, &["a", "b"]), Err(ErrorKind::MultipleEntries));
        assert_eq!(run(&Required, &["", ""]), Err(ErrorKind::MultipleEntries));
    }

    #[test]
    fn test_required_multiple() {
        assert_eq!(run(&RequiredMultiple, &["a", "b"]), Ok(()));
        assert_eq!(run(&RequiredMultiple, &[""]), Ok(()));
        assert_eq!(run(&RequiredMultiple, &[]), Err(ErrorKind::Required));
    }

    #[test]
    fn test_required_uses_catalog_template() {
        let err = Required
            .validate(&[], &MessageCatalog::default())
            .unwrap_err();
        assert_eq!(err.render(), "This field is required.");
    }
}
