//! Named placeholders and the per-build parameter table.

use crate::error::{SqlGenError, SqlGenResult};
use indexmap::IndexMap;

/// Characters allowed in a placeholder name.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// The part of `field` usable in a placeholder name. Quoting and other
/// punctuation are dropped, so `` `order` `` yields `order`.
pub fn param_stem(field: &str) -> String {
    field.chars().filter(|&c| is_name_char(c)).collect()
}

/// Reject fields that leave nothing to name a placeholder after.
pub(crate) fn check_field_names<'a, I>(fields: I) -> SqlGenResult<()>
where
    I: IntoIterator<Item = &'a String>,
{
    match fields.into_iter().find(|f| param_stem(f).is_empty()) {
        Some(field) => Err(SqlGenError::UnnamedField(field.clone())),
        None => Ok(()),
    }
}

/// Render a named placeholder for `field` at `index`: `:field_index`.
pub fn named_param(field: &str, index: usize) -> String {
    format!(":{}_{index}", param_stem(field))
}

/// Render an equality predicate against a named placeholder:
/// `field = :field_index`.
pub fn named_condition(field: &str, index: usize) -> String {
    format!("{field} = {}", named_param(field, index))
}

/// Placeholder name -> bound value, accumulated during one statement build.
///
/// The table owns the build's placeholder counter. Every call to [`bind`]
/// consumes the next index, whichever clause the placeholder ends up in, so
/// names stay unique even when a field recurs across rows or across
/// `WHERE`/`SET`.
///
/// [`bind`]: ParamTable::bind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTable {
    index: usize,
    values: IndexMap<String, String>,
}

impl ParamTable {
    /// Create an empty table whose first placeholder gets index 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` under the next placeholder for `field` and return the
    /// placeholder text (`:field_n`, built from [`param_stem`]).
    pub fn bind(&mut self, field: &str, value: impl Into<String>) -> String {
        self.index += 1;
        let placeholder = named_param(field, self.index);
        self.values
            .insert(placeholder[1..].to_string(), value.into());
        placeholder
    }

    /// Bind `value` and return the equality predicate `field = :field_n`.
    pub fn bind_eq(&mut self, field: &str, value: impl Into<String>) -> String {
        let placeholder = self.bind(field, value);
        format!("{field} = {placeholder}")
    }

    /// Look up the value bound under `name` (without the leading `:`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index handed to the most recent placeholder (0 before the first bind).
    pub fn last_index(&self) -> usize {
        self.index
    }

    /// Iterate `(name, value)` pairs in bind order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholder_and_condition() {
        assert_eq!(named_param("user_id", 3), ":user_id_3");
        assert_eq!(named_condition("user_id", 3), "user_id = :user_id_3");
    }

    #[test]
    fn quoted_field_gets_a_clean_placeholder() {
        assert_eq!(param_stem("`order`"), "order");
        assert_eq!(param_stem("t.col"), "t.col");
        assert_eq!(named_condition("`order`", 2), "`order` = :order_2");

        let mut params = ParamTable::new();
        assert_eq!(params.bind_eq("`key`", "v"), "`key` = :key_1");
        assert_eq!(params.get("key_1"), Some("v"));
    }

    #[test]
    fn field_without_name_chars_is_rejected() {
        let fields = vec!["a".to_string(), "``".to_string()];
        assert_eq!(
            check_field_names(&fields),
            Err(SqlGenError::UnnamedField("``".into()))
        );
        assert_eq!(check_field_names(&fields[..1]), Ok(()));
    }

    #[test]
    fn bind_uses_one_counter_for_every_field() {
        let mut params = ParamTable::new();
        assert_eq!(params.bind("a", "1"), ":a_1");
        assert_eq!(params.bind("b", "2"), ":b_2");
        assert_eq!(params.bind_eq("a", "3"), "a = :a_3");

        assert_eq!(params.len(), 3);
        assert_eq!(params.last_index(), 3);
        assert_eq!(params.get("a_1"), Some("1"));
        assert_eq!(params.get("a_3"), Some("3"));
        assert_eq!(params.get(":a_1"), None);
    }

    #[test]
    fn iter_keeps_bind_order() {
        let mut params = ParamTable::new();
        params.bind("z", "first");
        params.bind("a", "second");

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z_1", "a_2"]);
    }
}
