//! Regex-backed format rules
//!
//! Character classes are spelled `[0-9]` rather than `\d`: the `regex` crate's
//! `\d` matches every Unicode decimal digit, and these formats are ASCII-only.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, FormError};

static ALPHA_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric regex is valid"));

static UTF8_LETTER_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("letter/number regex is valid"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric regex is valid"));

static LATITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?([1-8]?[0-9](\.[0-9]+)?|90(\.0+)?)$").expect("latitude regex is valid")
});

static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(180(\.0+)?|((1[0-7][0-9])|([1-9]?[0-9]))(\.[0-9]+)?)$")
        .expect("longitude regex is valid")
});

static UUID_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid regex is valid")
});

static UUID_V3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid v3 regex is valid")
});

static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid v4 regex is valid")
});

static UUID_V5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid v5 regex is valid")
});

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// ASCII letters and digits only.
    pub AlphaNumeric;
    check(value) { ALPHA_NUMERIC.is_match(value) }
    kind ErrorKind::AlphaNum;
}

crate::rule! {
    /// Unicode letters (`L`) and numbers (`N`) only; no spaces or punctuation.
    pub Utf8LetterNum;
    check(value) { UTF8_LETTER_NUM.is_match(value) }
    kind ErrorKind::Utf8LetterNum;
}

crate::rule! {
    /// ASCII digits only. No sign, no decimal point.
    pub Numeric;
    check(value) { NUMERIC.is_match(value) }
    kind ErrorKind::Numeric;
}

// ============================================================================
// COORDINATES
// ============================================================================

crate::rule! {
    /// Signed decimal degrees within [-90, 90].
    pub Latitude;
    check(value) { LATITUDE.is_match(value) }
    kind ErrorKind::Latitude;
}

crate::rule! {
    /// Signed decimal degrees within [-180, 180].
    pub Longitude;
    check(value) { LONGITUDE.is_match(value) }
    kind ErrorKind::Longitude;
}

// ============================================================================
// UUID
// ============================================================================

/// Which UUID layout [`IsUuid`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UuidVersion {
    V3,
    V4,
    V5,
    /// Any 8-4-4-4-12 lowercase hex string.
    #[default]
    Any,
}

impl UuidVersion {
    /// Maps a numeric version; anything other than 3, 4 or 5 means [`UuidVersion::Any`].
    #[must_use]
    pub fn from_number(version: u8) -> Self {
        match version {
            3 => Self::V3,
            4 => Self::V4,
            5 => Self::V5,
            _ => Self::Any,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::V3 => &UUID_V3,
            Self::V4 => &UUID_V4,
            Self::V5 => &UUID_V5,
            Self::Any => &UUID_ANY,
        }
    }
}

crate::rule! {
    /// Lowercase hex UUID, optionally of a specific version.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsUuid { version: UuidVersion };
    check(self, value) { self.version.pattern().is_match(value) }
    error(self, messages) { FormError::from_catalog(ErrorKind::Uuid, messages) }
}

impl IsUuid {
    /// Accepts any version.
    #[must_use]
    pub fn any() -> Self {
        Self::new(UuidVersion::Any)
    }

    /// Builds the rule from a numeric version (3, 4, 5; anything else is "any").
    #[must_use]
    pub fn version(version: u8) -> Self {
        Self::new(UuidVersion::from_number(version))
    }
}
