//! Delimited-entry length rule
//!
//! Checks the length of every entry in a delimiter-separated list such as a
//! tag field (`rust, forms, validation`). The value is tokenized with a CSV
//! reader, so entries may be double-quoted to contain the delimiter.

use crate::foundation::{ErrorKind, FormError, MessageCatalog, Rule};
use crate::support::first_value;

#[derive(Clone, Copy)]
enum Quoting {
    FieldStart,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Returns `true` if `text` breaks strict CSV quoting for `delimiter`.
fn has_malformed_quotes(text: &str, delimiter: char) -> bool {
    let mut state = Quoting::FieldStart;
    for c in text.chars() {
        let separator = c == delimiter || c == '\n' || c == '\r';
        state = match (state, c) {
            (Quoting::FieldStart, '"') => Quoting::Quoted,
            (Quoting::FieldStart | Quoting::Unquoted | Quoting::AfterQuote, _) if separator => {
                Quoting::FieldStart
            }
            (Quoting::FieldStart | Quoting::Unquoted, '"') => return true,
            (Quoting::FieldStart | Quoting::Unquoted, _) => Quoting::Unquoted,
            (Quoting::Quoted, '"') => Quoting::AfterQuote,
            (Quoting::Quoted, _) => Quoting::Quoted,
            (Quoting::AfterQuote, '"') => Quoting::Quoted,
            (Quoting::AfterQuote, _) => return true,
        };
    }
    matches!(state, Quoting::Quoted)
}

/// Each non-empty entry must be between `min` and `max` bytes long.
///
/// Only `,` and `|` are accepted as delimiters; anything else falls back to
/// `,`. Surrounding whitespace is part of the entry. A value the reader cannot
/// tokenize, or one with no records at all, fails with `delimiter_min[min]`.
/// Quoting is strict: a `"` inside an unquoted entry, text after a closing
/// quote, or an unclosed quote also fails with `delimiter_min[min]`. Only the
/// first record (line) is length-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CsvEntryStrLen {
    pub delimiter: u8,
    pub min: usize,
    pub max: usize,
}

impl CsvEntryStrLen {
    #[must_use]
    pub fn new(delimiter: char, min: usize, max: usize) -> Self {
        let delimiter = match delimiter {
            '|' => b'|',
            _ => b',',
        };
        Self {
            delimiter,
            min,
            max,
        }
    }

    fn too_short(&self, messages: &MessageCatalog) -> FormError {
        FormError::from_catalog(ErrorKind::DelimiterMin, messages).with_arg(self.min)
    }

    fn too_long(&self, messages: &MessageCatalog) -> FormError {
        FormError::from_catalog(ErrorKind::DelimiterMax, messages).with_arg(self.max)
    }
}

impl Rule for CsvEntryStrLen {
    fn validate(&self, values: &[String], messages: &MessageCatalog) -> Result<(), FormError> {
        let value = first_value(values);
        if value.is_empty() {
            return Ok(());
        }

        if has_malformed_quotes(value, char::from(self.delimiter)) {
            return Err(self.too_short(messages));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .delimiter(self.delimiter)
            .from_reader(value.as_bytes());

        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| self.too_short(messages))?;

        let Some(first) = records.first() else {
            return Err(self.too_short(messages));
        };

        for entry in first.iter().filter(|e| !e.is_empty()) {
            if entry.len() < self.min {
                return Err(self.too_short(messages));
            }
            if entry.len() > self.max {
                return Err(self.too_long(messages));
            }
        }

        Ok(())
    }
}
