//! Slice predicates shared by the rules.

use std::collections::HashSet;

/// The first submitted value, or `""` when nothing was submitted.
#[inline]
#[must_use]
pub fn first_value(values: &[String]) -> &str {
    values.first().map_or("", String::as_str)
}

/// Returns `true` if any value occurs more than once.
#[must_use]
pub fn has_duplicates<S: AsRef<str>>(values: &[S]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|v| !seen.insert(v.as_ref()))
}

/// Returns `true` if `needle` is an element of `haystack`.
#[inline]
#[must_use]
pub fn contains<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|v| v.as_ref() == needle)
}

/// Elements of `left` that are not in `right`, in `left` order.
///
/// The difference is one-sided: elements only in `right` are ignored.
#[must_use]
pub fn difference<'a, S: AsRef<str>>(left: &'a [String], right: &[S]) -> Vec<&'a str> {
    left.iter()
        .map(String::as_str)
        .filter(|v| !contains(right, v))
        .collect()
}
