//! String length rules
//!
//! Length is measured in bytes by default, so a multi-byte character counts
//! for more than one. Use the `.chars()` builder to count Unicode scalar values
//! instead.

use crate::foundation::{ErrorKind, FormError, MessageCatalog, Rule};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// The first value must be at least `min` long. Fails with `string_min[min]`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinStrLen { min: usize, mode: LengthMode };
    check(self, value) { self.mode.measure(value) >= self.min }
    error(self, messages) {
        FormError::from_catalog(ErrorKind::StringMin, messages).with_arg(self.min)
    }
    new(min: usize) { Self { min, mode: LengthMode::Bytes } }
}

impl MinStrLen {
    /// Counts Unicode scalar values instead of bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// The first value must be at most `max` long. Fails with `string_max[max]`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxStrLen { max: usize, mode: LengthMode };
    check(self, value) { self.mode.measure(value) <= self.max }
    error(self, messages) {
        FormError::from_catalog(ErrorKind::StringMax, messages).with_arg(self.max)
    }
    new(max: usize) { Self { max, mode: LengthMode::Bytes } }
}

impl MaxStrLen {
    /// Counts Unicode scalar values instead of bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Composite of [`MinStrLen`] and [`MaxStrLen`].
///
/// The minimum is checked first; the maximum is only checked when the minimum
/// passes, so this rule reports at most one failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrLen {
    pub min: MinStrLen,
    pub max: MaxStrLen,
}

impl StrLen {
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: MinStrLen::new(min),
            max: MaxStrLen::new(max),
        }
    }

    /// Counts Unicode scalar values instead of bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn chars(self) -> Self {
        Self {
            min: self.min.chars(),
            max: self.max.chars(),
        }
    }
}

impl Rule for StrLen {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        self.min.validate(values, messages)?;
        self.max.validate(values, messages)
    }
}
