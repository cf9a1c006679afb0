//! Submitted form data
//!
//! A [`Form`] maps field names to every value submitted under that name, in
//! submission order. Checkbox groups and multi-selects produce several
//! values; text inputs produce one.

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Multi-valued form fields, keyed case-sensitively by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: IndexMap<String, Vec<String>>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from `(name, value)` pairs, appending repeated names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            form.add(name, value);
        }
        form
    }

    /// Parses an `application/x-www-form-urlencoded` body or query string.
    ///
    /// Decoding never fails: invalid percent-escapes are kept literally and
    /// invalid UTF-8 is replaced.
    #[must_use]
    pub fn from_urlencoded(input: &[u8]) -> Self {
        Self::from_pairs(
            url::form_urlencoded::parse(input).map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    /// The first value submitted for `name`, or `""`.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.values(name).first().map_or("", String::as_str)
    }

    /// Every value submitted for `name`; empty when the field is absent.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map_or(&[], Vec::as_slice)
    }

    /// Replaces all values of `name` with a single `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), vec![value.into()]);
    }

    /// Appends `value` to the values of `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces all values of `name`.
    pub fn set_values(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.fields.insert(name.into(), values);
    }

    /// Removes `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.fields.shift_remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Form {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl From<IndexMap<String, Vec<String>>> for Form {
    fn from(fields: IndexMap<String, Vec<String>>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_value_or_blank() {
        let form = Form::from_pairs([("colour", "red"), ("colour", "blue")]);
        assert_eq!(form.get("colour"), "red");
        assert_eq!(form.get("missing"), "");
        assert_eq!(form.values("colour"), ["red", "blue"]);
        assert!(form.values("missing").is_empty());
    }

    #[test]
    fn test_set_replaces_and_add_appends() {
        let mut form = Form::new();
        form.add("tags", "a");
        form.add("tags", "b");
        assert_eq!(form.values("tags").len(), 2);

        form.set("tags", "");
        assert_eq!(form.values("tags"), [""]);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_set_values_replaces_every_value() {
        let mut form = Form::from_pairs([("fav", "red"), ("fav", "blue")]);
        form.set_values("fav", vec!["green".to_owned()]);
        assert_eq!(form.values("fav"), ["green"]);

        form.set_values("fav", Vec::new());
        assert!(form.contains("fav"));
        assert!(form.values("fav").is_empty());
        assert_eq!(form.get("fav"), "");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let form = Form::from_pairs([("Email", "a@b.com")]);
        assert!(form.contains("Email"));
        assert!(!form.contains("email"));
    }

    #[test]
    fn test_from_urlencoded() {
        let form = Form::from_urlencoded(b"name=J%C3%B8rn+Smith&fav=red&fav=blue&empty=");
        assert_eq!(form.get("name"), "Jørn Smith");
        assert_eq!(form.values("fav"), ["red", "blue"]);
        assert_eq!(form.values("empty"), [""]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut form = Form::from_pairs([("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(form.remove("b"), Some(vec!["2".to_owned()]));
        let names: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }
}
