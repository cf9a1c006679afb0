//! Engine settings loaded from TOML
//!
//! ```toml
//! blank_on_error = false
//! reference_data = "data"
//!
//! [messages]
//! required = "Please fill in this field."
//! int_range = "Pick a number from %d to %d."
//! ```
//!
//! Message overrides are merged onto the default catalog. A relative
//! `reference_data` directory is resolved against the settings file's
//! directory when loaded with [`EngineSettings::load`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::FormValidator;
use crate::foundation::MessageCatalog;
use crate::reference::{ReferenceDataError, ReferenceSets};

// ============================================================================
// ERRORS
// ============================================================================

/// Settings could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings are not valid TOML or have the wrong shape.
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configured reference data could not be loaded.
    #[error(transparent)]
    Reference(#[from] ReferenceDataError),
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Runtime knobs for a [`FormValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Blank failed fields in the submitted form.
    pub blank_on_error: bool,

    /// Message templates keyed by error kind, merged onto the defaults.
    pub messages: HashMap<String, String>,

    /// Directory holding the five reference CSV files.
    pub reference_data: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            blank_on_error: true,
            messages: HashMap::new(),
            reference_data: None,
        }
    }
}

impl EngineSettings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings = Self::from_toml_str(&text)?;
        if let (Some(dir), Some(base)) = (&settings.reference_data, path.parent())
            && dir.is_relative()
        {
            settings.reference_data = Some(base.join(dir));
        }

        tracing::info!(
            path = %path.display(),
            blank_on_error = settings.blank_on_error,
            message_overrides = settings.messages.len(),
            "loaded engine settings"
        );
        Ok(settings)
    }

    /// The default catalog with this file's overrides applied.
    #[must_use]
    pub fn message_catalog(&self) -> MessageCatalog {
        MessageCatalog::default().merged(
            self.messages
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Applies the flag and merged catalog to `validator`.
    pub fn apply(&self, validator: &mut FormValidator) {
        validator.set_blank_on_error(self.blank_on_error);
        validator.set_messages(self.message_catalog());
    }

    /// Loads the reference sets from `reference_data`, or returns empty sets
    /// when no directory is configured.
    pub fn load_reference_sets(&self) -> Result<ReferenceSets, SettingsError> {
        let Some(dir) = &self.reference_data else {
            tracing::debug!("no reference data directory configured");
            return Ok(ReferenceSets::new());
        };

        let sets = ReferenceSets::load_dir(dir)?;
        for (name, len) in [
            ("country_codes", sets.country_codes().len()),
            ("currency_codes", sets.currency_codes().len()),
            ("common_passwords", sets.common_passwords().len()),
            ("disposable_domains", sets.disposable_domains().len()),
            ("disposable_wildcards", sets.disposable_wildcards().len()),
        ] {
            if len == 0 {
                tracing::warn!(dir = %dir.display(), set = name, "reference set is empty");
            }
        }
        Ok(sets)
    }
}
