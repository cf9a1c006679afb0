//! # formcheck-validator
//!
//! Rule-chain validation for multi-valued form input.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formcheck_validator::prelude::*;
//!
//! let validator = FormValidator::new([
//!     ("Email", chain![Required, Email::allow_disposable()]),
//!     ("Age", chain![Required, IntRange::new(18, 100)]),
//!     ("Colours", chain![InListMultiple::new(["red", "blue"])]),
//! ])?;
//!
//! let mut form = Form::from_urlencoded(body);
//! let result = validator.validate(&mut form);
//! for field in result.failed_fields() {
//!     println!("{field}: {:?}", result.messages(field));
//! }
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for first-value rules (blank input passes),
//! or implement [`Rule`](foundation::Rule) manually when a rule needs every
//! submitted value.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required), [`RequiredMultiple`](rules::RequiredMultiple)
//! - **Text**: [`StrLen`](rules::StrLen), [`AlphaNumeric`](rules::AlphaNumeric),
//!   [`Email`](rules::Email), [`WebRequestUri`](rules::WebRequestUri)
//! - **Numbers**: [`IntRange`](rules::IntRange), [`FloatRange`](rules::FloatRange)
//! - **Checksums**: [`CreditCard`](rules::CreditCard), [`Isbn`](rules::Isbn)
//! - **Lists**: [`InListSingle`](rules::InListSingle), [`InListMultiple`](rules::InListMultiple),
//!   [`CountryCode`](rules::CountryCode)

pub mod engine;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod reference;
pub mod rules;
pub mod settings;
#[doc(hidden)]
pub mod support;

pub use engine::{FormValidator, Validation};
pub use form::Form;
