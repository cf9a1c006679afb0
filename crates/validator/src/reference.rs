//! Reference sets
//!
//! Immutable lookup sets consumed by the list-membership rules: ISO-3166
//! country codes, ISO-4217 currency codes, common passwords and disposable
//! e-mail domains. Each set is loaded once and shared read-only through an
//! `Arc`, so cloning a set (or a rule holding one) never copies its contents.
//!
//! The on-disk format is a single CSV record: every entry is a column of the
//! first and only row.
//!
//! ```text
//! us,gb,de,fr,...
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

// ============================================================================
// RESOURCE NAMES
// ============================================================================

/// File name of the ISO-3166 alpha-2 country code list.
pub const COUNTRY_CODES_FILE: &str = "iso3166-country-codes.csv";
/// File name of the ISO-4217 currency code list.
pub const CURRENCY_CODES_FILE: &str = "iso4217-currency-codes.csv";
/// File name of the common password list.
pub const COMMON_PASSWORDS_FILE: &str = "common-password-list-minlength-8-characters.csv";
/// File name of the disposable e-mail domain list.
pub const DISPOSABLE_DOMAINS_FILE: &str = "disposable-email-domains.csv";
/// File name of the disposable e-mail wildcard suffix list.
pub const DISPOSABLE_WILDCARDS_FILE: &str = "disposable-email-domains-wildcards.csv";

// ============================================================================
// ERRORS
// ============================================================================

/// A reference resource could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    /// The resource file could not be read.
    #[error("failed to read reference data `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid CSV.
    #[error("malformed reference data `{resource}`: {source}")]
    Csv {
        resource: String,
        #[source]
        source: csv::Error,
    },

    /// The resource holds more than one record.
    #[error("reference data `{resource}` must be a single row, found {rows}")]
    MultipleRows { resource: String, rows: usize },
}

// ============================================================================
// REFERENCE SET
// ============================================================================

/// An immutable, cheaply clonable set of strings. Lookups are case-sensitive.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    entries: Arc<HashSet<String>>,
}

impl ReferenceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses single-row CSV text.
    ///
    /// Empty input yields an empty set; more than one row is an error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use formcheck_validator::reference::ReferenceSet;
    ///
    /// let set = ReferenceSet::from_csv("currencies", "usd,cad,dkk\n")?;
    /// assert!(set.contains("cad"));
    /// ```
    pub fn from_csv(resource: &str, text: &str) -> Result<Self, ReferenceDataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::with_capacity(1);
        for record in reader.records() {
            rows.push(record.map_err(|source| ReferenceDataError::Csv {
                resource: resource.to_owned(),
                source,
            })?);
        }

        if rows.len() > 1 {
            return Err(ReferenceDataError::MultipleRows {
                resource: resource.to_owned(),
                rows: rows.len(),
            });
        }

        let set: Self = rows
            .first()
            .map(|row| row.iter().map(str::to_owned).collect())
            .unwrap_or_default();
        debug!(resource, entries = set.len(), "parsed reference set");
        Ok(set)
    }

    /// Reads and parses a single-row CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(&path.display().to_string(), &text)
    }

    /// Returns `true` if `value` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: Arc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

impl fmt::Debug for ReferenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSet")
            .field("len", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// REFERENCE SETS
// ============================================================================

/// The five named reference sets.
///
/// Build from a directory with [`ReferenceSets::load_dir`], or assemble
/// synthetic sets in tests with the `with_*` builders.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck_validator::reference::ReferenceSets;
///
/// let refs = ReferenceSets::new()
///     .with_country_codes(["us", "gb"])
///     .with_currency_codes(["usd"]);
/// assert!(refs.country_codes().contains("gb"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceSets {
    country_codes: ReferenceSet,
    currency_codes: ReferenceSet,
    common_passwords: ReferenceSet,
    disposable_domains: ReferenceSet,
    disposable_wildcards: ReferenceSet,
}

impl ReferenceSets {
    /// Creates a bundle of empty sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all five resources from `dir`, using the standard file names.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let dir = dir.as_ref();
        let sets = Self {
            country_codes: ReferenceSet::from_path(dir.join(COUNTRY_CODES_FILE))?,
            currency_codes: ReferenceSet::from_path(dir.join(CURRENCY_CODES_FILE))?,
            common_passwords: ReferenceSet::from_path(dir.join(COMMON_PASSWORDS_FILE))?,
            disposable_domains: ReferenceSet::from_path(dir.join(DISPOSABLE_DOMAINS_FILE))?,
            disposable_wildcards: ReferenceSet::from_path(dir.join(DISPOSABLE_WILDCARDS_FILE))?,
        };

        info!(
            dir = %dir.display(),
            country_codes = sets.country_codes.len(),
            currency_codes = sets.currency_codes.len(),
            common_passwords = sets.common_passwords.len(),
            disposable_domains = sets.disposable_domains.len(),
            disposable_wildcards = sets.disposable_wildcards.len(),
            "loaded reference sets"
        );
        Ok(sets)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_country_codes(mut self, set: impl Into<ReferenceSet>) -> Self {
        self.country_codes = set.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_currency_codes(mut self, set: impl Into<ReferenceSet>) -> Self {
        self.currency_codes = set.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_common_passwords(mut self, set: impl Into<ReferenceSet>) -> Self {
        self.common_passwords = set.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_disposable_domains(mut self, set: impl Into<ReferenceSet>) -> Self {
        self.disposable_domains = set.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_disposable_wildcards(mut self, set: impl Into<ReferenceSet>) -> Self {
        self.disposable_wildcards = set.into();
        self
    }

    #[must_use]
    pub fn country_codes(&self) -> &ReferenceSet {
        &self.country_codes
    }

    #[must_use]
    pub fn currency_codes(&self) -> &ReferenceSet {
        &self.currency_codes
    }

    #[must_use]
    pub fn common_passwords(&self) -> &ReferenceSet {
        &self.common_passwords
    }

    #[must_use]
    pub fn disposable_domains(&self) -> &ReferenceSet {
        &self.disposable_domains
    }

    #[must_use]
    pub fn disposable_wildcards(&self) -> &ReferenceSet {
        &self.disposable_wildcards
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ReferenceSet {
    fn from(entries: [S; N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for ReferenceSet {
    fn from(entries: Vec<S>) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_single_row() {
        let set = ReferenceSet::from_csv("t", "us,gb,de\n").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("gb"));
        assert!(!set.contains("GB"));
    }

    #[test]
    fn test_from_csv_quoted_entries() {
        let set = ReferenceSet::from_csv("t", "\"a,b\",c").unwrap();
        assert!(set.contains("a,b"));
        assert!(set.contains("c"));
    }

    #[test]
    fn test_from_csv_empty_input() {
        assert!(ReferenceSet::from_csv("t", "").unwrap().is_empty());
    }

    #[test]
    fn test_from_csv_rejects_multiple_rows() {
        let err = ReferenceSet::from_csv("t", "a,b\nc,d\n").unwrap_err();
        assert!(matches!(
            err,
            ReferenceDataError::MultipleRows { rows: 2, .. }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ReferenceSet::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ReferenceDataError::Io { .. }));
    }

    #[test]
    fn test_clone_shares_entries() {
        let set: ReferenceSet = ["usd", "cad"].into();
        let clone = set.clone();
        assert!(Arc::ptr_eq(&set.entries, &clone.entries));
    }

    #[test]
    fn test_builders() {
        let refs = ReferenceSets::new()
            .with_country_codes(["us"])
            .with_common_passwords(vec!["password1".to_owned()]);
        assert!(refs.country_codes().contains("us"));
        assert!(refs.common_passwords().contains("password1"));
        assert!(refs.currency_codes().is_empty());
    }
}
