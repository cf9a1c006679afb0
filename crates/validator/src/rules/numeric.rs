//! Numeric parsing and range rules
//!
//! Parsing is locale-independent: `.` is the only decimal separator and no
//! grouping characters are accepted.

use crate::foundation::{ErrorKind, FormError};

/// Parses a finite-or-spelled-infinity `f64`.
///
/// A literal whose magnitude overflows to infinity (`1e400`) is rejected; the
/// spelled forms `inf` / `infinity` (any case, optional sign) and `nan` are
/// accepted.
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    let parsed = value.parse::<f64>().ok()?;
    if parsed.is_infinite() {
        let unsigned = value.trim_start_matches(['+', '-']);
        let spelled =
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
        return spelled.then_some(parsed);
    }
    Some(parsed)
}

// ============================================================================
// FLOAT
// ============================================================================

crate::rule! {
    /// A floating point literal, e.g. `-10.50` or `6.02e23`.
    pub Float;
    check(value) { parse_float(value).is_some() }
    kind ErrorKind::Float;
}

// ============================================================================
// INTEGER RANGE
// ============================================================================

crate::rule! {
    /// A signed integer within `[min, max]`. Fails with `int_range[min, max]`,
    /// also when the value is not an integer at all.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IntRange { min: i64, max: i64 };
    check(self, value) {
        value
            .parse::<i64>()
            .is_ok_and(|n| (self.min..=self.max).contains(&n))
    }
    error(self, messages) {
        FormError::from_catalog(ErrorKind::IntRange, messages)
            .with_arg(self.min)
            .with_arg(self.max)
    }
}

// ============================================================================
// FLOAT RANGE
// ============================================================================

crate::rule! {
    /// A float within `[min, max]`. Fails with `float_range[min, max]`, also
    /// when the value does not parse. `NaN` never falls inside a range.
    #[derive(Copy, PartialEq)]
    pub FloatRange { min: f64, max: f64 };
    check(self, value) {
        parse_float(value).is_some_and(|x| x >= self.min && x <= self.max)
    }
    error(self, messages) {
        FormError::from_catalog(ErrorKind::FloatRange, messages)
            .with_arg(self.min)
            .with_arg(self.max)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::{FormatArg, MessageCatalog, Rule};

    fn check(rule: &dyn Rule, value: &str) -> Result<(), FormError> {
        rule.validate(&[value.to_owned()], &MessageCatalog::default())
    }

    #[rstest]
    #[case("22.50", true)]
    #[case("-10.50", true)]
    #[case("+3", true)]
    #[case("6.02e23", true)]
    #[case(".5", true)]
    #[case("Inf", true)]
    #[case("-infinity", true)]
    #[case("NaN", true)]
    #[case("", true)]
    #[case("1e400", false)]
    #[case("1,5", false)]
    #[case("12abc", false)]
    #[case(" 1", false)]
    fn test_float(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(&Float, value).is_ok(), expected);
    }

    #[rstest]
    #[case("18", true)]
    #[case("100", true)]
    #[case("+55", true)]
    #[case("17", false)]
    #[case("101", false)]
    #[case("55.0", false)]
    #[case("abc", false)]
    #[case("99999999999999999999", false)]
    fn test_int_range(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(&IntRange::new(18, 100), value).is_ok(), expected);
    }

    #[test]
    fn test_int_range_error_args() {
        let err = check(&IntRange::new(18, 100), "5").unwrap_err();
        assert_eq!(err.kind, ErrorKind::IntRange);
        assert_eq!(err.args.as_slice(), &[FormatArg::Int(18), FormatArg::Int(100)]);
        assert_eq!(err.render(), "This field must be between 18 - 100.");
    }

    #[rstest]
    #[case("22.50", true)]
    #[case("0.01", true)]
    #[case("100", true)]
    #[case("0", false)]
    #[case("100.000001", false)]
    #[case("NaN", false)]
    #[case("inf", false)]
    #[case("x", false)]
    fn test_float_range(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(&FloatRange::new(0.01, 100.0), value).is_ok(), expected);
    }

    #[test]
    fn test_float_range_error_args() {
        let err = check(&FloatRange::new(0.01, 100.0), "200").unwrap_err();
        assert_eq!(err.args.as_slice(), &[FormatArg::Float(0.01), FormatArg::Float(100.0)]);
        assert_eq!(err.render(), "This field must be between 0.010000 - 100.000000.");
    }
}
