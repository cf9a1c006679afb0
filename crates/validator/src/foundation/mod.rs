//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the rule engine:
//!
//! - **Traits**: [`Rule`], plus the [`RuleChain`] that sequences rules for one field
//! - **Errors**: [`FormError`] (a rule failure), [`ErrorKind`], [`EngineError`]
//! - **Messages**: [`MessageCatalog`] mapping error keys to templates
//!
//! # Rule failures are data
//!
//! A rule never panics and never aborts the pass. A failure is a
//! [`FormError`] that keeps the template and its positional arguments apart
//! until [`FormError::render`] is called:
//!
//! ```rust,ignore
//! use formcheck_validator::foundation::{ErrorKind, FormError};
//!
//! let error = FormError::new(ErrorKind::StringMin, "Must be at least %d characters long.")
//!     .with_arg(8usize);
//! assert_eq!(error.render(), "Must be at least 8 characters long.");
//! ```

pub mod error;
pub mod messages;
pub mod traits;

pub use error::{EngineError, ErrorKind, FormError, FormatArg};
pub use messages::{DEFAULT_MESSAGES, MessageCatalog};
pub use traits::{Rule, RuleChain};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of running one rule.
pub type RuleResult = Result<(), FormError>;
