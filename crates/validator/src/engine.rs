//! Validation engine
//!
//! A [`FormValidator`] binds one [`RuleChain`] to each field name and runs
//! every chain against a submitted [`Form`]. All rules of a chain run, every
//! failure is collected, and a failing field never stops the others.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::prelude::*;
//! use indexmap::IndexMap;
//!
//! let mut rules = IndexMap::new();
//! rules.insert("Username".to_owned(), chain![Required, AlphaNumeric, StrLen::new(2, 50)]);
//! rules.insert("Age".to_owned(), chain![IntRange::new(18, 100)]);
//! let validator = FormValidator::new(rules)?;
//!
//! let mut form = Form::from_urlencoded(b"Username=a&Age=12");
//! let result = validator.validate(&mut form);
//! assert!(!result.is_valid());
//! assert_eq!(form.get("Username"), "");
//! ```

use indexmap::IndexMap;

use crate::foundation::{EngineError, FormError, MessageCatalog, RuleChain};
use crate::form::Form;

// ============================================================================
// FORM VALIDATOR
// ============================================================================

/// Field rules, message catalog and the blank-on-error flag.
///
/// The field rules are fixed at construction. The engine holds no per-pass
/// state, so one validator can serve concurrent passes over separate forms.
#[derive(Debug)]
pub struct FormValidator {
    rules: IndexMap<String, RuleChain>,
    messages: MessageCatalog,
    blank_on_error: bool,
}

impl FormValidator {
    /// Builds a validator with the default message catalog and
    /// blank-on-error enabled.
    ///
    /// A field name given twice keeps the later chain.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoFields`] when `rules` is empty
    /// - [`EngineError::EmptyFieldName`] when a field name is `""`
    /// - [`EngineError::EmptyChain`] when a chain holds no rules; a field
    ///   meant to accept anything still needs a rule such as `StrLen::new(0, usize::MAX)`
    pub fn new<I, K>(rules: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (K, RuleChain)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (field, chain) in rules {
            let field = field.into();
            if field.is_empty() {
                return Err(EngineError::EmptyFieldName);
            }
            if chain.is_empty() {
                return Err(EngineError::EmptyChain { field });
            }
            map.insert(field, chain);
        }

        if map.is_empty() {
            return Err(EngineError::NoFields);
        }

        Ok(Self {
            rules: map,
            messages: MessageCatalog::default(),
            blank_on_error: true,
        })
    }

    /// Replaces the whole message catalog. Kinds missing from `messages`
    /// render as `""`.
    pub fn set_messages(&mut self, messages: MessageCatalog) {
        self.messages = messages;
    }

    /// Whether failed fields are blanked in the submitted form.
    pub fn set_blank_on_error(&mut self, blank: bool) {
        self.blank_on_error = blank;
    }

    #[must_use]
    pub fn blank_on_error(&self) -> bool {
        self.blank_on_error
    }

    /// Template for an error key, or `""` when the catalog has none.
    #[must_use]
    pub fn message(&self, key: &str) -> &str {
        self.messages.get(key)
    }

    #[must_use]
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Declared field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Runs every chain without touching the form.
    #[must_use]
    pub fn check(&self, form: &Form) -> Validation {
        let mut errors = IndexMap::with_capacity(self.rules.len());

        for (field, chain) in &self.rules {
            let failures = chain.run(form.values(field), &self.messages);
            for failure in &failures {
                tracing::trace!(field = %field, kind = %failure.kind, "rule failed");
            }
            errors.insert(field.clone(), failures);
        }

        let validation = Validation { errors };
        tracing::debug!(
            fields = validation.len(),
            failed = validation.failed_fields().count(),
            "validation pass finished"
        );
        validation
    }

    /// Runs every chain and, when blank-on-error is enabled, replaces each
    /// failed field in `form` with a single empty value.
    pub fn validate(&self, form: &mut Form) -> Validation {
        let validation = self.check(form);
        if self.blank_on_error {
            redact(form, &validation);
        }
        validation
    }

    /// Like [`validate`](Self::validate), but leaves `form` untouched and
    /// returns the redacted copy instead.
    #[must_use]
    pub fn validate_redacted(&self, form: &Form) -> (Validation, Form) {
        let mut copy = form.clone();
        let validation = self.validate(&mut copy);
        (validation, copy)
    }
}

fn redact(form: &mut Form, validation: &Validation) {
    for field in validation.failed_fields() {
        form.set(field, "");
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Per-field errors of one pass.
///
/// Every declared field has an entry, empty when the field passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    errors: IndexMap<String, Vec<FormError>>,
}

impl Validation {
    /// `true` iff no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Errors of `field`, empty when it passed or was not declared.
    #[must_use]
    pub fn errors(&self, field: &str) -> &[FormError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Rendered messages of `field`.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<String> {
        self.errors(field).iter().map(FormError::render).collect()
    }

    /// Names of fields with at least one error.
    pub fn failed_fields(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(field, _)| field.as_str())
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<FormError>> {
        self.errors.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<FormError>> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Validation {
    type Item = (&'a String, &'a Vec<FormError>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<FormError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::rules::{AlphaNumeric, InListMultiple, IntRange, Required, StrLen};

    fn validator() -> FormValidator {
        FormValidator::new([
            (
                "Username",
                crate::chain![Required, AlphaNumeric, StrLen::new(2, 5)],
            ),
            ("Age", crate::chain![IntRange::new(18, 100)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_errors() {
        let none: Vec<(String, RuleChain)> = Vec::new();
        assert_eq!(FormValidator::new(none).unwrap_err(), EngineError::NoFields);
        assert_eq!(
            FormValidator::new([("", crate::chain![Required])]).unwrap_err(),
            EngineError::EmptyFieldName
        );
        assert_eq!(
            FormValidator::new([("Name", RuleChain::new())]).unwrap_err(),
            EngineError::EmptyChain {
                field: "Name".to_owned()
            }
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_types_are_send_sync() {
        assert_send_sync::<FormValidator>();
        assert_send_sync::<RuleChain>();
        assert_send_sync::<crate::reference::ReferenceSets>();
        assert_send_sync::<Validation>();
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let validator = FormValidator::new([
            ("Zip", crate::chain![Required]),
            ("Age", crate::chain![IntRange::new(18, 100)]),
            ("Zip", crate::chain![AlphaNumeric]),
        ])
        .unwrap();
        assert_eq!(validator.fields().collect::<Vec<_>>(), ["Zip", "Age"]);

        let result = validator.check(&Form::new());
        assert!(result.is_valid(), "later Zip chain replaces Required");
    }

    #[test]
    fn test_into_inner_keeps_declaration_order() {
        let result = validator().check(&Form::from_pairs([("Age", "12")]));
        let errors = result.into_inner();
        let names: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(names, ["Username", "Age"]);
        assert_eq!(errors["Username"][0].kind, ErrorKind::Required);
        assert_eq!(errors["Age"][0].kind, ErrorKind::IntRange);
    }

    #[test]
    fn test_every_declared_field_is_reported() {
        let mut form = Form::from_pairs([("Username", "bob"), ("Age", "30")]);
        let result = validator().validate(&mut form);
        assert!(result.is_valid());
        assert_eq!(result.len(), 2);
        assert!(result.errors("Username").is_empty());
        assert!(result.errors("Age").is_empty());
        assert_eq!(form.get("Username"), "bob");
    }

    #[test]
    fn test_all_rules_of_a_chain_run() {
        let mut form = Form::from_pairs([("Username", "a!"), ("Age", "30")]);
        let result = validator().validate(&mut form);
        let kinds: Vec<_> = result.errors("Username").iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ErrorKind::AlphaNum]);

        let mut form = Form::from_pairs([("Username", "!"), ("Age", "30")]);
        let result = validator().validate(&mut form);
        let kinds: Vec<_> = result.errors("Username").iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ErrorKind::AlphaNum, ErrorKind::StringMin]);
    }

    #[test]
    fn test_absent_field_is_empty_sequence() {
        let mut form = Form::new();
        let result = validator().validate(&mut form);
        assert_eq!(result.errors("Username")[0].kind, ErrorKind::Required);
        assert!(result.errors("Age").is_empty());
        assert_eq!(result.failed_fields().collect::<Vec<_>>(), ["Username"]);
    }

    #[test]
    fn test_blank_on_error() {
        let mut form = Form::from_pairs([("Username", "bob"), ("Age", "12")]);
        let validator = validator();
        let result = validator.validate(&mut form);
        assert!(!result.is_valid());
        assert_eq!(form.values("Age"), [""]);
        assert_eq!(form.get("Username"), "bob");
    }

    #[test]
    fn test_blank_on_error_disabled_keeps_values() {
        let mut form = Form::from_pairs([("Username", "bob"), ("Age", "12")]);
        let mut validator = validator();
        validator.set_blank_on_error(false);
        let result = validator.validate(&mut form);
        assert!(!result.is_valid());
        assert_eq!(form.get("Age"), "12");
    }

    #[test]
    fn test_validate_redacted_leaves_source_untouched() {
        let form = Form::from_pairs([("Username", "bob"), ("Age", "12")]);
        let (result, redacted) = validator().validate_redacted(&form);
        assert!(!result.is_valid());
        assert_eq!(form.get("Age"), "12");
        assert_eq!(redacted.get("Age"), "");
    }

    #[test]
    fn test_blanking_a_multi_valued_field() {
        let mut form = Form::from_pairs([("Fav", "red"), ("Fav", "red")]);
        let validator =
            FormValidator::new([("Fav", crate::chain![InListMultiple::new(["red", "blue"])])])
                .unwrap();
        let result = validator.validate(&mut form);
        assert_eq!(result.errors("Fav")[0].kind, ErrorKind::Duplicate);
        assert_eq!(form.values("Fav"), [""]);
    }

    #[test]
    fn test_set_messages_replaces_wholesale() {
        let mut validator = validator();
        validator.set_messages(MessageCatalog::from_iter([(
            "required",
            "Please fill this in.",
        )]));
        assert_eq!(validator.message("required"), "Please fill this in.");
        assert_eq!(validator.message("alpha_num"), "");
        assert_eq!(validator.message("no_such_key"), "");

        let result = validator.check(&Form::from_pairs([("Username", "a!")]));
        assert_eq!(result.messages("Username")[0], "");
    }

    #[test]
    fn test_rendered_messages_use_arguments() {
        let result = validator().check(&Form::from_pairs([("Age", "12"), ("Username", "x")]));
        assert_eq!(result.messages("Age"), ["This field must be between 18 - 100."]);
        assert_eq!(
            result.messages("Username"),
            ["This field must be at least 2 characters long."]
        );
    }
}
