//! String content rules
//!
//! Format checks that need more than a single regex: e-mail addresses (with
//! an optional disposable-domain blocklist), web request URIs, JSON documents,
//! boolean literals and exact matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, FormError, MessageCatalog, Rule};
use crate::reference::{ReferenceSet, ReferenceSets};
use crate::support::first_value;

/// RFC 5322 flavoured address: dot-atom or quoted local part, dotted domain,
/// optional trailing dot. Non-ASCII is limited to the U+00A0..U+FFEF ranges
/// that exclude surrogates and noncharacters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(",
        // dot-atom local part
        r"([a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+",
        r"(\.[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+)*)",
        r"|",
        // quoted local part
        r#"("((([\x20\x09]*\x0d\x0a)?[\x20\x09]+)?"#,
        r"([\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"|\([\x01-\x09\x0b\x0c\x0d-\x7f\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]))*",
        r#"(([\x20\x09]*\x0d\x0a)?[\x20\x09]+)?")"#,
        r")@(",
        // domain labels
        r"([a-zA-Z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"|[a-zA-Z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"[a-zA-Z0-9\-._~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*",
        r"[a-zA-Z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])\.",
        r")+(",
        // top-level label
        r"[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"|[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"[a-zA-Z0-9\-_~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*",
        r"[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r")\.?$",
    ))
    .expect("email regex is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

/// Disposable-domain blocklist used by [`Email`].
#[derive(Debug, Clone, Default)]
struct DisposableDomains {
    exact: ReferenceSet,
    wildcards: ReferenceSet,
}

impl DisposableDomains {
    /// Exact match against the domain list, or the domain or any of its parent
    /// domains against the wildcard list.
    fn blocks(&self, domain: &str) -> bool {
        if self.exact.contains(domain) {
            return true;
        }

        let mut candidate = domain;
        loop {
            if self.wildcards.contains(candidate) {
                return true;
            }
            match candidate.split_once('.') {
                Some((_, parent)) => candidate = parent,
                None => return false,
            }
        }
    }
}

/// E-mail address format, optionally rejecting throw-away domains.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::prelude::*;
///
/// let refs = ReferenceSets::new().with_disposable_domains(["mailinator.com"]);
/// let rule = Email::reject_disposable(&refs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Email {
    blocklist: Option<DisposableDomains>,
}

impl Email {
    /// Checks the format only.
    #[must_use]
    pub fn allow_disposable() -> Self {
        Self { blocklist: None }
    }

    /// Checks the format, then rejects addresses whose domain (the text after
    /// the last `@`) is a known disposable domain or a subdomain of a
    /// disposable wildcard suffix.
    #[must_use]
    pub fn reject_disposable(refs: &ReferenceSets) -> Self {
        Self {
            blocklist: Some(DisposableDomains {
                exact: refs.disposable_domains().clone(),
                wildcards: refs.disposable_wildcards().clone(),
            }),
        }
    }

    /// Chooses between the two modes with a flag.
    #[must_use]
    pub fn new(allow_disposable: bool, refs: &ReferenceSets) -> Self {
        if allow_disposable {
            Self::allow_disposable()
        } else {
            Self::reject_disposable(refs)
        }
    }
}

impl Rule for Email {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        let value = first_value(values);
        if value.is_empty() {
            return Ok(());
        }

        let fail = || FormError::from_catalog(ErrorKind::Email, messages);

        if !EMAIL.is_match(value) {
            return Err(fail());
        }

        if let Some(blocklist) = &self.blocklist {
            let domain = value.rsplit_once('@').map_or("", |(_, domain)| domain);
            if blocklist.blocks(domain) {
                return Err(fail());
            }
        }

        Ok(())
    }
}

// ============================================================================
// WEB REQUEST URI
// ============================================================================

/// Rejects text the WHATWG parser would silently repair: whitespace or
/// control characters anywhere, backslashes, and a scheme not followed by `//`.
fn is_verbatim_absolute_uri(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control() || c == '\\')
    {
        return false;
    }
    value
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"))
}

crate::rule! {
    /// An absolute `http` or `https` URL, taken verbatim.
    pub WebRequestUri;
    check(value) {
        is_verbatim_absolute_uri(value)
            && url::Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
    }
    kind ErrorKind::WebRequestUri;
}

// ============================================================================
// JSON
// ============================================================================

crate::rule! {
    /// Syntactically valid JSON of any shape.
    pub Json;
    check(value) { serde_json::from_str::<serde::de::IgnoredAny>(value).is_ok() }
    kind ErrorKind::Json;
}

// ============================================================================
// BOOLEAN
// ============================================================================

crate::rule! {
    /// One of `1 t T TRUE true True 0 f F FALSE false False`.
    pub Boolean;
    check(value) {
        matches!(
            value,
            "1" | "t" | "T" | "TRUE" | "true" | "True"
                | "0" | "f" | "F" | "FALSE" | "false" | "False"
        )
    }
    kind ErrorKind::Boolean;
}

// ============================================================================
// STRING MATCH
// ============================================================================

crate::rule! {
    /// The first value must equal `expected` exactly, e.g. a password
    /// confirmation.
    #[derive(PartialEq, Eq, Hash)]
    pub StrMatch { expected: String };
    check(self, value) { value == self.expected }
    error(self, messages) { FormError::from_catalog(ErrorKind::StringMatches, messages) }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
}
