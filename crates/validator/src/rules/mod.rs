//! Built-in rules
//!
//! Every rule inspects the values submitted for one field. Apart from the
//! `Required*` and list rules, a rule looks only at the first value and
//! passes when that value is blank.
//!
//! # Categories
//!
//! - **Presence**: [`Required`], [`RequiredMultiple`]
//! - **Length**: [`MinStrLen`], [`MaxStrLen`], [`StrLen`], [`CsvEntryStrLen`]
//! - **Character classes**: [`AlphaNumeric`], [`Utf8LetterNum`], [`Numeric`]
//! - **Numbers**: [`Float`], [`IntRange`], [`FloatRange`], [`Latitude`], [`Longitude`]
//! - **Formats**: [`Email`], [`WebRequestUri`], [`Json`], [`Boolean`], [`IsUuid`],
//!   [`IsDate`], [`IsTime`], [`IsDateTime`], [`StrMatch`]
//! - **Checksums**: [`CreditCard`], [`Isbn`], [`Isbn10`], [`Isbn13`]
//! - **Lists**: [`InListSingle`], [`InListMultiple`], [`NotInListSingle`],
//!   [`CountryCode`], [`CurrencyCode`], [`NotCommonPassword`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::prelude::*;
//!
//! let age = chain![Required, IntRange::new(18, 100)];
//! let tags = chain![CsvEntryStrLen::new(',', 2, 20)];
//! ```

pub mod checksum;
pub mod content;
pub mod delimited;
pub mod length;
pub mod list;
pub mod numeric;
pub mod pattern;
pub mod required;
pub mod temporal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use checksum::{CreditCard, Isbn, Isbn10, Isbn13, isbn10_valid, isbn13_valid, luhn_valid};
pub use content::{Boolean, Email, Json, StrMatch, WebRequestUri};
pub use delimited::CsvEntryStrLen;
pub use length::{LengthMode, MaxStrLen, MinStrLen, StrLen};
pub use list::{
    CountryCode, CurrencyCode, InListMultiple, InListSingle, NotCommonPassword, NotInListSingle,
};
pub use numeric::{Float, FloatRange, IntRange};
pub use pattern::{AlphaNumeric, IsUuid, Latitude, Longitude, Numeric, Utf8LetterNum, UuidVersion};
pub use required::{Required, RequiredMultiple};
pub use temporal::{IsDate, IsDateTime, IsTime};
