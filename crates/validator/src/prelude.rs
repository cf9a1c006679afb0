//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that brings
//! in the engine, the form type, every built-in rule and the macros.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::prelude::*;
//!
//! let username = chain![Required, AlphaNumeric, StrLen::new(2, 50)];
//! let age = chain![IntRange::new(18, 100)];
//! ```

// ============================================================================
// FOUNDATION: Rule contract, errors, messages
// ============================================================================

pub use crate::foundation::{
    EngineError, ErrorKind, FormError, FormatArg, MessageCatalog, Rule, RuleChain, RuleResult,
};

// ============================================================================
// ENGINE: Validator, form, settings, reference data
// ============================================================================

pub use crate::engine::{FormValidator, Validation};
pub use crate::form::Form;
pub use crate::reference::{ReferenceDataError, ReferenceSet, ReferenceSets};
pub use crate::settings::{EngineSettings, SettingsError};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{chain, rule};
