//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Declare a first-value rule (struct + `Rule` impl + constructor)
//! - [`chain!`]: Build a [`RuleChain`](crate::foundation::RuleChain) from a list of rules
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::rule;
//! use formcheck_validator::foundation::{ErrorKind, FormError};
//!
//! // Unit rule (no parameters)
//! rule! {
//!     pub Lowercase;
//!     check(value) { value.chars().all(char::is_lowercase) }
//!     kind ErrorKind::AlphaNum;
//! }
//!
//! // Rule with parameters
//! rule! {
//!     pub Prefixed { prefix: String };
//!     check(self, value) { value.starts_with(self.prefix.as_str()) }
//!     error(self, messages) { FormError::from_catalog(ErrorKind::StringMatches, messages) }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete first-value rule: struct definition, `Rule`
/// implementation and constructor.
///
/// The generated `validate` takes the first submitted value (or `""` when
/// nothing was submitted) and passes immediately when it is blank, so
/// requiredness stays the job of the dedicated `Required` rules.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, failure template straight from the catalog):
/// ```rust,ignore
/// rule! {
///     pub Numeric;
///     check(value) { NUMERIC.is_match(value) }
///     kind ErrorKind::Numeric;
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq)]
///     pub FloatRange { min: f64, max: f64 };
///     check(self, value) { value.parse::<f64>().is_ok_and(|x| x >= self.min && x <= self.max) }
///     error(self, messages) {
///         FormError::from_catalog(ErrorKind::FloatRange, messages).with_arg(self.min).with_arg(self.max)
///     }
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub StrMatch { expected: String };
///     check(self, value) { value == self.expected }
///     error(self, messages) { FormError::from_catalog(ErrorKind::StringMatches, messages) }
///     new(expected: impl Into<String>) { Self { expected: expected.into() } }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Internal: Rule impl for struct variants ──────────────────────────
    (@impl $name:ident;
        check($self_:ident, $val:ident) $check:block
        error($self2:ident, $msgs:ident) $err:block
    ) => {
        impl $crate::foundation::Rule for $name {
            fn validate(
                &$self_,
                values: &[::std::string::String],
                messages: &$crate::foundation::MessageCatalog,
            ) -> ::std::result::Result<(), $crate::foundation::FormError> {
                let $val: &str = $crate::support::first_value(values);
                if $val.is_empty() || $check {
                    Ok(())
                } else {
                    let $msgs = messages;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 1: Unit rule (no fields) ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($val:ident) $check:block
        kind $kind:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn validate(
                &self,
                values: &[::std::string::String],
                messages: &$crate::foundation::MessageCatalog,
            ) -> ::std::result::Result<(), $crate::foundation::FormError> {
                let $val: &str = $crate::support::first_value(values);
                if $val.is_empty() || $check {
                    Ok(())
                } else {
                    Err($crate::foundation::FormError::from_catalog($kind, messages))
                }
            }
        }
    };

    // ── Variant 2: Struct with fields + custom new ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $val:ident) $check:block
        error($self2:ident, $msgs:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@impl $name; check($self_, $val) $check error($self2, $msgs) $err);
    };

    // ── Variant 3: Struct with fields + auto new ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $val:ident) $check:block
        error($self2:ident, $msgs:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@impl $name; check($self_, $val) $check error($self2, $msgs) $err);
    };
}

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a [`RuleChain`](crate::foundation::RuleChain) from rules, kept in
/// the order given.
///
/// ```rust,ignore
/// let chain = chain![Required, AlphaNumeric, StrLen::new(2, 50)];
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::foundation::RuleChain::new()
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::foundation::RuleChain::new()$(.rule($rule))+
    };
}
