//! Error types for rule failures and engine misconfiguration
//!
//! A rule failure is data, not an `Err` of the validation pass: every
//! [`FormError`] carries the raw message template (printf-style verbs left
//! intact) and the positional arguments separately, so a translation layer can
//! look up `template` and re-apply `args` in another language.
//!
//! Templates use `Cow<'static, str>` and arguments live in a `SmallVec`, so the
//! common failure (no arguments, default catalog) allocates only the template
//! copy.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Identifies which rule family produced a failure.
///
/// The string form ([`ErrorKind::as_str`]) is also the key used to look up the
/// message template in a [`MessageCatalog`](crate::foundation::MessageCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ErrorKind {
    Required,
    MultipleEntries,
    AlphaNum,
    Utf8LetterNum,
    Boolean,
    Numeric,
    Float,
    IntRange,
    FloatRange,
    StringMin,
    StringMax,
    StringMatches,
    Duplicate,
    InList,
    NotInList,
    CountryCode,
    CurrencyCode,
    WeakPassword,
    DelimiterMin,
    DelimiterMax,
    Latitude,
    Longitude,
    Date,
    Time,
    DateTime,
    Uuid,
    Isbn,
    CreditCard,
    WebRequestUri,
    Json,
    Email,
}

impl ErrorKind {
    /// Every kind a built-in rule can produce.
    pub const ALL: [Self; 31] = [
        Self::Required,
        Self::MultipleEntries,
        Self::AlphaNum,
        Self::Utf8LetterNum,
        Self::Boolean,
        Self::Numeric,
        Self::Float,
        Self::IntRange,
        Self::FloatRange,
        Self::StringMin,
        Self::StringMax,
        Self::StringMatches,
        Self::Duplicate,
        Self::InList,
        Self::NotInList,
        Self::CountryCode,
        Self::CurrencyCode,
        Self::WeakPassword,
        Self::DelimiterMin,
        Self::DelimiterMax,
        Self::Latitude,
        Self::Longitude,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Uuid,
        Self::Isbn,
        Self::CreditCard,
        Self::WebRequestUri,
        Self::Json,
        Self::Email,
    ];

    /// The catalog key for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MultipleEntries => "multiple_entries",
            Self::AlphaNum => "alpha_num",
            Self::Utf8LetterNum => "utf8_letter_num",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::Float => "float",
            Self::IntRange => "int_range",
            Self::FloatRange => "float_range",
            Self::StringMin => "string_min",
            Self::StringMax => "string_max",
            Self::StringMatches => "string_matches",
            Self::Duplicate => "duplicate",
            Self::InList => "in_list",
            Self::NotInList => "not_in_list",
            Self::CountryCode => "country_code",
            Self::CurrencyCode => "currency_code",
            Self::WeakPassword => "weak_password",
            Self::DelimiterMin => "delimiter_min",
            Self::DelimiterMax => "delimiter_max",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date_time",
            Self::Uuid => "uuid",
            Self::Isbn => "isbn",
            Self::CreditCard => "credit_card",
            Self::WebRequestUri => "web_request_uri",
            Self::Json => "json",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FORMAT ARGUMENTS
// ============================================================================

/// A positional argument for a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(Cow<'static, str>),
}

impl FormatArg {
    fn write_verb(&self, verb: char, out: &mut String) {
        let _ = match (verb, self) {
            ('d', Self::Int(n)) => write!(out, "{n}"),
            ('d', Self::Uint(n)) => write!(out, "{n}"),
            ('f', Self::Float(x)) => write!(out, "{x:.6}"),
            ('f', Self::Int(n)) => write!(out, "{:.6}", *n as f64),
            ('f', Self::Uint(n)) => write!(out, "{:.6}", *n as f64),
            ('s' | 'v', arg) => write!(out, "{arg}"),
            (verb, arg) => write!(out, "%!{verb}({arg})"),
        };
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&'static str> for FormatArg {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

// ============================================================================
// FORM ERROR
// ============================================================================

/// One rule failure for one field.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::foundation::{ErrorKind, FormError};
///
/// let error = FormError::new(ErrorKind::IntRange, "Must be between %d - %d.")
///     .with_arg(18i64)
///     .with_arg(100i64);
///
/// assert_eq!(error.render(), "Must be between 18 - 100.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormError {
    /// Which rule family failed.
    pub kind: ErrorKind,

    /// The raw template, printf verbs (`%d`, `%f`, `%s`, `%v`) left intact.
    pub template: Cow<'static, str>,

    /// Positional arguments for the template's verbs (typically 0-2).
    pub args: SmallVec<[FormatArg; 2]>,
}

impl FormError {
    /// Creates an error with an explicit template and no arguments.
    pub fn new(kind: ErrorKind, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            template: template.into(),
            args: SmallVec::new(),
        }
    }

    /// Creates an error whose template is taken from `messages`.
    ///
    /// A kind missing from the catalog yields an empty template.
    pub fn from_catalog(kind: ErrorKind, messages: &crate::foundation::MessageCatalog) -> Self {
        Self::new(kind, messages.get(kind.as_str()).to_owned())
    }

    /// Appends a positional argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<FormatArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Substitutes the positional arguments into the template.
    ///
    /// `%%` renders a literal percent sign. A verb without a matching argument
    /// renders as `%!d(MISSING)`; surplus arguments are ignored.
    #[must_use]
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            return self.template.clone().into_owned();
        }

        let mut out = String::with_capacity(self.template.len() + 8);
        let mut args = self.args.iter();
        let mut chars = self.template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some(verb) => match args.next() {
                    Some(arg) => arg.write_verb(verb, &mut out),
                    None => {
                        let _ = write!(out, "%!{verb}(MISSING)");
                    }
                },
                None => out.push_str("%!(NOVERB)"),
            }
        }

        out
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for FormError {}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Misconfiguration detected while building a [`FormValidator`](crate::engine::FormValidator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No field rules were supplied.
    #[error("at least one field rule chain is required")]
    NoFields,

    /// A rule chain was registered under an empty field name.
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// A field was registered with a chain that holds no rules.
    #[error("rule chain for field `{field}` is empty")]
    EmptyChain {
        /// The offending field.
        field: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keys_are_unique() {
        let mut keys: Vec<_> = ErrorKind::ALL.iter().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_render_without_args_is_verbatim() {
        let e = FormError::new(ErrorKind::Required, "100% required");
        assert_eq!(e.render(), "100% required");
    }

    #[test]
    fn test_render_int_verbs() {
        let e = FormError::new(ErrorKind::IntRange, "This field must be between %d - %d.")
            .with_arg(18i64)
            .with_arg(100i64);
        assert_eq!(e.to_string(), "This field must be between 18 - 100.");
    }

    #[test]
    fn test_render_float_verb_uses_six_decimals() {
        let e = FormError::new(ErrorKind::FloatRange, "between %f - %f")
            .with_arg(0.01)
            .with_arg(100.0);
        assert_eq!(e.render(), "between 0.010000 - 100.000000");
    }

    #[test]
    fn test_render_escapes_and_missing() {
        let e = FormError::new(ErrorKind::StringMin, "%d%% then %d").with_arg(5usize);
        assert_eq!(e.render(), "5% then %!d(MISSING)");
    }

    #[test]
    fn test_render_string_verbs() {
        let e = FormError::new(ErrorKind::InList, "%s or %v").with_arg("a").with_arg(3i64);
        assert_eq!(e.render(), "a or 3");
    }

    #[test]
    fn test_engine_error_messages() {
        let e = EngineError::EmptyChain {
            field: "Email".into(),
        };
        assert_eq!(e.to_string(), "rule chain for field `Email` is empty");
    }
}
