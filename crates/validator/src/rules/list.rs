//! List-membership rules
//!
//! Allow/deny lists supplied by the programmer (radio buttons, drop-downs,
//! checkbox groups), plus adapters over the shared [`ReferenceSets`].
//! Comparison is exact and case-sensitive everywhere.

use crate::foundation::{ErrorKind, FormError, MessageCatalog, Rule};
use crate::reference::{ReferenceSet, ReferenceSets};
use crate::support::{contains, difference, has_duplicates};

fn collect_list<I>(list: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    list.into_iter().map(Into::into).collect()
}

// ============================================================================
// IN LIST (SINGLE)
// ============================================================================

/// A single selection that must be one of the allowed values.
///
/// Nothing submitted, or one blank value, passes. More than one submitted
/// value fails with `multiple_entries` before membership is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InListSingle {
    pub allowed: Vec<String>,
}

impl InListSingle {
    #[must_use]
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            allowed: collect_list(allowed),
        }
    }
}

impl Rule for InListSingle {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        match values {
            [] => Ok(()),
            [only] if only.is_empty() => Ok(()),
            [_, _, ..] => Err(FormError::from_catalog(
                ErrorKind::MultipleEntries,
                messages,
            )),
            [only] if contains(&self.allowed, only) => Ok(()),
            [_] => Err(FormError::from_catalog(ErrorKind::InList, messages)),
        }
    }
}

// ============================================================================
// IN LIST (MULTIPLE)
// ============================================================================

/// A multi-selection whose every entry must be allowed.
///
/// Blank entries mean "nothing selected" and are ignored. Among the rest, a
/// repeated entry fails with `duplicate` before membership is checked; then
/// any entry missing from the allow-list fails with `in_list`. Allowed values
/// that were not submitted are never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InListMultiple {
    pub allowed: Vec<String>,
}

impl InListMultiple {
    #[must_use]
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            allowed: collect_list(allowed),
        }
    }
}

impl Rule for InListMultiple {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        let selected: Vec<String> = values.iter().filter(|v| !v.is_empty()).cloned().collect();
        if selected.is_empty() {
            return Ok(());
        }

        if has_duplicates(&selected) {
            return Err(FormError::from_catalog(ErrorKind::Duplicate, messages));
        }

        if difference(&selected, &self.allowed).is_empty() {
            Ok(())
        } else {
            Err(FormError::from_catalog(ErrorKind::InList, messages))
        }
    }
}

// ============================================================================
// NOT IN LIST (SINGLE)
// ============================================================================

crate::rule! {
    /// The first value must not be one of the denied values.
    #[derive(PartialEq, Eq)]
    pub NotInListSingle { denied: Vec<String> };
    check(self, value) { !contains(&self.denied, value) }
    error(self, messages) { FormError::from_catalog(ErrorKind::NotInList, messages) }
    new(denied: impl IntoIterator<Item = impl Into<String>>) {
        Self { denied: collect_list(denied) }
    }
}

// ============================================================================
// REFERENCE SET ADAPTERS
// ============================================================================

crate::rule! {
    /// A lowercase ISO-3166 alpha-2 country code, e.g. `us` or `gb`.
    pub CountryCode { codes: ReferenceSet };
    check(self, value) { self.codes.contains(value) }
    error(self, messages) { FormError::from_catalog(ErrorKind::CountryCode, messages) }
    new(refs: &ReferenceSets) { Self { codes: refs.country_codes().clone() } }
}

crate::rule! {
    /// A lowercase ISO-4217 currency code, e.g. `usd` or `dkk`.
    pub CurrencyCode { codes: ReferenceSet };
    check(self, value) { self.codes.contains(value) }
    error(self, messages) { FormError::from_catalog(ErrorKind::CurrencyCode, messages) }
    new(refs: &ReferenceSets) { Self { codes: refs.currency_codes().clone() } }
}

crate::rule! {
    /// Rejects passwords found in the common-password list with `weak_password`.
    pub NotCommonPassword { passwords: ReferenceSet };
    check(self, value) { !self.passwords.contains(value) }
    error(self, messages) { FormError::from_catalog(ErrorKind::WeakPassword, messages) }
    new(refs: &ReferenceSets) { Self { passwords: refs.common_passwords().clone() } }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn run(rule: &dyn Rule, values: &[&str]) -> Result<(), ErrorKind> {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        rule.validate(&values, &MessageCatalog::default())
            .map_err(|e| e.kind)
    }

    #[rstest]
    #[case(&[""], &[], Ok(()))]
    #[case(&[], &["a"], Ok(()))]
    #[case(&["1.2"], &["1.2", "3.4", "5.6"], Ok(()))]
    #[case(&["~!@#$%^&*()_+"], &["~!@#$%^&*()_+"], Ok(()))]
    #[case(&["truE"], &["true"], Err(ErrorKind::InList))]
    #[case(&["ä"], &["a", "b"], Err(ErrorKind::InList))]
    #[case(&["1.355"], &["1.35"], Err(ErrorKind::InList))]
    #[case(&["a", ""], &["a", "b"], Err(ErrorKind::MultipleEntries))]
    #[case(&["", ""], &["a", "b"], Err(ErrorKind::MultipleEntries))]
    fn test_in_list_single(
        #[case] values: &[&str],
        #[case] allowed: &[&str],
        #[case] expected: Result<(), ErrorKind>,
    ) {
        let rule = InListSingle::new(allowed.iter().copied());
        assert_eq!(run(&rule, values), expected);
    }

    #[rstest]
    #[case(&[], &[], Ok(()))]
    #[case(&[""], &[], Ok(()))]
    #[case(&["", ""], &["00", "11"], Ok(()))]
    #[case(&["red"], &["blue", "red"], Ok(()))]
    #[case(&["a", "b"], &["a", "b"], Ok(()))]
    #[case(&["0", "1", "2", "3"], &["0", "1", "2", "3", "4"], Ok(()))]
    #[case(&["red", "", "blue"], &["blue", "red"], Ok(()))]
    #[case(&["red", "red"], &["blue", "red"], Err(ErrorKind::Duplicate))]
    #[case(&["x", "x"], &["a", "b"], Err(ErrorKind::Duplicate))]
    #[case(&["c", "a"], &["a", "b"], Err(ErrorKind::InList))]
    #[case(&["True"], &["true"], Err(ErrorKind::InList))]
    #[case(&["1.35"], &["l.35"], Err(ErrorKind::InList))]
    fn test_in_list_multiple(
        #[case] values: &[&str],
        #[case] allowed: &[&str],
        #[case] expected: Result<(), ErrorKind>,
    ) {
        let rule = InListMultiple::new(allowed.iter().copied());
        assert_eq!(run(&rule, values), expected);
    }

    #[rstest]
    #[case("", &[], true)]
    #[case("True", &["true"], true)]
    #[case("something.com", &["something.coM"], true)]
    #[case("c", &["a", "b"], true)]
    #[case("true", &["true"], false)]
    #[case("something.com", &["something.com"], false)]
    #[case("~!@#$%^&*()_+", &["~!@#$%^&*()_+"], false)]
    fn test_not_in_list_single(#[case] value: &str, #[case] denied: &[&str], #[case] ok: bool) {
        let rule = NotInListSingle::new(denied.iter().copied());
        assert_eq!(run(&rule, &[value]).is_ok(), ok);
    }

    fn refs() -> ReferenceSets {
        ReferenceSets::new()
            .with_country_codes(["us", "gb", "de"])
            .with_currency_codes(["usd", "cad", "dkk"])
            .with_common_passwords(["password123", "qwertyuiop", "harrypotter"])
    }

    #[rstest]
    #[case("", true)]
    #[case("us", true)]
    #[case("gb", true)]
    #[case("US", false)]
    #[case("uS", false)]
    #[case("usa", false)]
    #[case("United States of America", false)]
    fn test_country_code(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(run(&CountryCode::new(&refs()), &[value]).is_ok(), ok);
    }

    #[rstest]
    #[case("", true)]
    #[case("usd", true)]
    #[case("dkk", true)]
    #[case("USd", false)]
    #[case("abc", false)]
    fn test_currency_code(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(run(&CurrencyCode::new(&refs()), &[value]).is_ok(), ok);
    }

    #[test]
    fn test_not_common_password() {
        let rule = NotCommonPassword::new(&refs());
        assert_eq!(run(&rule, &["I am Great!"]), Ok(()));
        assert_eq!(run(&rule, &[""]), Ok(()));
        assert_eq!(run(&rule, &["harrypotter"]), Err(ErrorKind::WeakPassword));
    }
}
