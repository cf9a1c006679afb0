//! Checksum rules: payment card numbers (Luhn) and ISBNs
//!
//! Card numbers must be bare digits. ISBNs may be grouped with spaces or
//! hyphens, which are stripped before the checksum is computed.

use crate::foundation::{ErrorKind, FormError};

/// Well-known test card numbers (Stripe's documented set) plus all-zero
/// strings, which trivially satisfy Luhn.
const TEST_CARD_NUMBERS: &[&str] = &[
    "4242424242424242",
    "4012888888881881",
    "4000056655665556",
    "5555555555554444",
    "5200828282828210",
    "5105105105105100",
    "378282246310005",
    "371449635398431",
    "6011111111111117",
    "6011000990139424",
    "30569309025904",
    "38520000023237",
    "3530111333300000",
    "3566002020360505",
    "0000000000000",
    "00000000000000",
    "000000000000000",
    "0000000000000000",
    "00000000000000000",
    "000000000000000000",
    "0000000000000000000",
];

// ============================================================================
// ALGORITHMS
// ============================================================================

/// Luhn (mod 10) check over a string of ASCII digits.
///
/// Scanning right to left, every second digit is doubled and 9 subtracted
/// when the product exceeds 9. Any non-digit fails.
#[must_use]
pub fn luhn_valid(number: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for c in number.chars().rev() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }

    sum % 10 == 0
}

/// Removes spaces and hyphens.
fn normalize_isbn(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

/// ISBN-10 over a normalized value: nine digits then a digit or `X`, with
/// `Σ (i+1)·dᵢ ≡ 0 (mod 11)` where `X` counts as 10.
#[must_use]
pub fn isbn10_valid(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 10 || !bytes[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let check = match bytes[9] {
        b'X' => 10,
        d @ b'0'..=b'9' => u32::from(d - b'0'),
        _ => return false,
    };

    let sum: u32 = bytes[..9]
        .iter()
        .zip(1u32..)
        .map(|(d, weight)| weight * u32::from(d - b'0'))
        .sum();

    (sum + 10 * check) % 11 == 0
}

/// ISBN-13 over a normalized value: thirteen digits, weights alternating
/// 1 and 3 over the first twelve, last digit equal to `(10 - sum mod 10) mod 10`.
#[must_use]
pub fn isbn13_valid(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let sum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            weight * u32::from(d - b'0')
        })
        .sum();

    u32::from(bytes[12] - b'0') == (10 - sum % 10) % 10
}

// ============================================================================
// CREDIT CARD
// ============================================================================

crate::rule! {
    /// A 13-19 digit card number passing Luhn.
    ///
    /// Unless built with `allow_test_numbers = true`, well-known test numbers
    /// are rejected before the checksum runs.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub CreditCard { allow_test_numbers: bool };
    check(self, value) {
        (self.allow_test_numbers || !TEST_CARD_NUMBERS.contains(&value))
            && (13..=19).contains(&value.len())
            && luhn_valid(value)
    }
    error(self, messages) { FormError::from_catalog(ErrorKind::CreditCard, messages) }
}

// ============================================================================
// ISBN
// ============================================================================

crate::rule! {
    /// An ISBN-10 or ISBN-13, picked by the normalized length.
    pub Isbn;
    check(value) {
        let isbn = normalize_isbn(value);
        match isbn.len() {
            10 => isbn10_valid(&isbn),
            13 => isbn13_valid(&isbn),
            _ => false,
        }
    }
    kind ErrorKind::Isbn;
}

crate::rule! {
    /// An ISBN-10 only.
    pub Isbn10;
    check(value) { isbn10_valid(&normalize_isbn(value)) }
    kind ErrorKind::Isbn;
}

crate::rule! {
    /// An ISBN-13 only.
    pub Isbn13;
    check(value) { isbn13_valid(&normalize_isbn(value)) }
    kind ErrorKind::Isbn;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::{MessageCatalog, Rule};

    fn passes(rule: &dyn Rule, value: &str) -> bool {
        rule.validate(&[value.to_owned()], &MessageCatalog::default())
            .is_ok()
    }

    #[test]
    fn test_luhn() {
        assert!(luhn_valid("4716461583322103"));
        assert!(luhn_valid("79927398713"));
        assert!(!luhn_valid("79927398710"));
        assert!(!luhn_valid("7992 7398 713"));
    }

    #[rstest]
    #[case("", true)]
    #[case("375556917985515", true)]
    #[case("36050234196908", true)]
    #[case("4716461583322103", true)]
    #[case("4716221051885662", true)]
    #[case("4929722653797141", true)]
    #[case("5398228707871527", true)]
    #[case("5398228707871528", false)]
    #[case("4242424242424242", false)]
    #[case("0000000000000", false)]
    #[case("a0000000000000", false)]
    #[case("4716 4615 8332 2103", false)]
    #[case("5398-2287-0787-1527", false)]
    #[case("-5398228707871527", false)]
    #[case("4.716461583322103", false)]
    #[case("blahblah", false)]
    #[case("10", false)]
    fn test_credit_card_rejecting_test_numbers(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(&CreditCard::new(false), value), expected);
    }

    #[test]
    fn test_credit_card_allowing_test_numbers() {
        let rule = CreditCard::new(true);
        assert!(passes(&rule, "4242424242424242"));
        assert!(passes(&rule, "0000000000000"));
        assert!(!passes(&rule, "5398228707871528"));
        assert!(!passes(&rule, "000000000000"));
    }

    #[rstest]
    #[case("", true)]
    #[case("3836221195", true)]
    #[case("1-61729-085-8", true)]
    #[case("3 423 21412 0", true)]
    #[case("3 401 01319 X", true)]
    #[case("9784873113685", true)]
    #[case("978-4-87311-368-5", true)]
    #[case("978 3401013190", true)]
    #[case("978-3-8362-2119-1", true)]
    #[case("978-3836221191", true)]
    #[case("978-3-8362-2119-2", false)]
    #[case("3423214121", false)]
    #[case("3-423-21412-1", false)]
    #[case("-45.112023", false)]
    #[case("foo", false)]
    fn test_isbn(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(&Isbn, value), expected);
    }

    #[rstest]
    #[case("3836221195", true)]
    #[case("3 401 01319 X", true)]
    #[case("978-3836221191", false)]
    #[case("3 423 21412 1", false)]
    #[case("340101319x", false)]
    fn test_isbn10(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(&Isbn10, value), expected);
    }

    #[rstest]
    #[case("978-4-87311-368-5", true)]
    #[case("978 3401013190", true)]
    #[case("3-8362-2119-5", false)]
    #[case("01234567890ab", false)]
    #[case("978 3 8362 2119 0", false)]
    fn test_isbn13(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(&Isbn13, value), expected);
    }
}
