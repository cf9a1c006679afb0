//! Message template catalog
//!
//! Maps an error key (see [`ErrorKind::as_str`](crate::foundation::ErrorKind::as_str))
//! to a human-readable template. The catalog is the only place message text
//! lives; rules look their template up at failure time so that replacing the
//! catalog re-words every rule at once.

use std::borrow::Cow;
use std::collections::HashMap;

// ============================================================================
// DEFAULTS
// ============================================================================

/// English defaults.
///
/// Besides one entry per rule failure this includes several keys no built-in
/// rule produces (`account`, `captcha`, `city`, `csrf`, `email_taken`, `slug`,
/// `unselected_field`) so an application can keep all form wording in a single
/// catalog.
pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("account", "The e-mail or password you entered is incorrect."),
    ("alpha_num", "This field may only contain letters and numbers."),
    ("boolean", "This field must be true or false."),
    (
        "captcha",
        "The characters you entered did not match the word verification. Please retry.",
    ),
    (
        "city",
        "We could not find that city. Please check your spelling.",
    ),
    ("country_code", "Please select a valid country."),
    ("credit_card", "Please enter a valid credit card number."),
    (
        "csrf",
        "There was an error submitting the form. Please retry.",
    ),
    ("currency_code", "Please enter a valid currency code."),
    (
        "date",
        "This field must be in a date format (DD-MM-YYYY) [Ex: 31-12-1990]",
    ),
    (
        "date_time",
        "This field must be in a date-time format (DD-MM-YYYY HH:MM:SS) [Ex: 31-12-1990 14:23:56]",
    ),
    ("delimiter_min", "Entries must be at least %d characters long."),
    (
        "delimiter_max",
        "Entries cannot be more than %d characters long.",
    ),
    ("duplicate", "This field cannot contain duplicate entries."),
    ("email", "Please enter a valid e-mail address."),
    ("email_taken", "That e-mail address is already in use."),
    (
        "float",
        "This field must be a floating point number. (Example: -10.50)",
    ),
    ("float_range", "This field must be between %f - %f."),
    ("in_list", "Please make a selection."),
    ("int_range", "This field must be between %d - %d."),
    ("isbn", "Please enter a valid ISBN."),
    (
        "json",
        "This field must contain valid JSON (Javascript object notation).",
    ),
    (
        "latitude",
        "Latitude must be between -90.0 degrees and 90.0 degrees.",
    ),
    (
        "longitude",
        "Longitude must be between -180.0 degrees and 180.0 degrees.",
    ),
    ("multiple_entries", "This field may only contain one entry."),
    ("not_in_list", "This field contains an invalid entry."),
    ("numeric", "This field must contain only numbers."),
    ("required", "This field is required."),
    (
        "slug",
        "This field must contain at least one letter or number.",
    ),
    ("string_matches", "Fields did not match."),
    (
        "string_max",
        "This field cannot be more than %d characters long.",
    ),
    ("string_min", "This field must be at least %d characters long."),
    (
        "time",
        "This field must be in a time format (HH:MM:SS) [Ex: 14:23:56]",
    ),
    ("unselected_field", "Please select this field."),
    (
        "utf8_letter_num",
        "This field may only contain letters and numbers (Character set: UTF8).",
    ),
    ("uuid", "Please enter a valid UUID."),
    ("weak_password", "Please use a stronger password."),
    ("web_request_uri", "Please enter a valid Web URI."),
];

// ============================================================================
// CATALOG
// ============================================================================

/// Error key → message template.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::foundation::MessageCatalog;
///
/// let catalog = MessageCatalog::default();
/// assert_eq!(catalog.get("required"), "This field is required.");
/// assert_eq!(catalog.get("no_such_key"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl MessageCatalog {
    /// Creates an empty catalog. Every lookup returns `""`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the template for `key`, or `""` when the key is unknown.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", |v| &**v)
    }

    /// Returns `true` when the catalog has an entry for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a single template.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.entries.insert(key.into(), template.into());
    }

    /// Overlays `overrides` onto this catalog, keeping entries they don't name.
    #[must_use = "builder methods must be chained or built"]
    pub fn merged<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        for (key, template) in overrides {
            self.insert(key, template);
        }
        self
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::from_iter(DEFAULT_MESSAGES.iter().copied())
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> From<HashMap<K, V>> for MessageCatalog
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_defaults_cover_every_kind() {
        let catalog = MessageCatalog::default();
        for kind in ErrorKind::ALL {
            assert!(catalog.contains(kind.as_str()), "missing {kind}");
        }
    }

    #[test]
    fn test_defaults_include_convenience_keys() {
        let catalog = MessageCatalog::default();
        for key in [
            "account",
            "captcha",
            "city",
            "csrf",
            "email_taken",
            "slug",
            "unselected_field",
        ] {
            assert!(!catalog.get(key).is_empty());
        }
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert_eq!(MessageCatalog::default().get("nope"), "");
        assert_eq!(MessageCatalog::empty().get("required"), "");
    }

    #[test]
    fn test_merged_keeps_unnamed_entries() {
        let catalog = MessageCatalog::default().merged([("required", "Fill me in")]);
        assert_eq!(catalog.get("required"), "Fill me in");
        assert_eq!(catalog.get("email"), "Please enter a valid e-mail address.");
    }
}
