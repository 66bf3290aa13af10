//! Named placeholder expansion.
//!
//! Builders produce SQL with `:name` placeholders plus a [`ParamTable`]. The
//! driver wants positional `?` markers and an ordered argument list; this
//! module does that translation.
//!
//! Scanning rules:
//!
//! - `:name`, where `name` is made of alphanumerics, `_` and `.`, becomes `?`
//!   and contributes one argument (a name used twice contributes two).
//! - `::` is an escaped colon and is emitted as a single `:`.
//! - A `:` followed by anything else (`:=`, whitespace, end of input) is kept.
//! - A name running straight into another `:` is rejected.

use crate::builder::StatementKind;
use crate::error::{SqlGenError, SqlGenResult};
use crate::param::{ParamTable, is_name_char};

/// SQL text with named placeholders and the values bound to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedQuery {
    pub kind: StatementKind,
    pub table: String,
    pub sql: String,
    pub params: ParamTable,
}

/// Driver-ready SQL with `?` markers and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundQuery {
    pub kind: StatementKind,
    pub table: String,
    pub sql: String,
    pub args: Vec<String>,
}

impl NamedQuery {
    /// Expand placeholders into `?` markers and ordered arguments.
    pub fn expand(&self) -> SqlGenResult<BoundQuery> {
        let (sql, args) = expand_named(&self.sql, &self.params)?;
        Ok(BoundQuery {
            kind: self.kind,
            table: self.table.clone(),
            sql,
            args,
        })
    }
}

impl BoundQuery {
    /// Split into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.args)
    }
}

/// Turn `:name` placeholders into positional `?` markers.
///
/// `args[i]` is the value of the `i`-th placeholder occurrence, reading left
/// to right.
pub fn expand_named(sql: &str, params: &ParamTable) -> SqlGenResult<(String, Vec<String>)> {
    let mut out = String::with_capacity(sql.len());
    let mut args = Vec::new();
    let mut chars = sql.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if c != ':' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some((_, ':')) => {
                chars.next();
                out.push(':');
            }
            Some((_, next)) if is_name_char(next) => {
                let start = pos + 1;
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }

                if let Some(&(i, ':')) = chars.peek() {
                    return Err(SqlGenError::MalformedPlaceholder { position: i });
                }

                let name = &sql[start..end];
                let value = params
                    .get(name)
                    .ok_or_else(|| SqlGenError::MissingParam(name.to_string()))?;
                out.push('?');
                args.push(value.to_string());
            }
            _ => out.push(':'),
        }
    }

    Ok((out, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> ParamTable {
        let mut params = ParamTable::new();
        for (field, value) in pairs {
            params.bind(field, *value);
        }
        params
    }

    #[test]
    fn keeps_textual_order() {
        let params = table(&[("a", "x"), ("b", "y")]);
        let (sql, args) = expand_named("x = :b_2 AND y = :a_1", &params).unwrap();
        assert_eq!(sql, "x = ? AND y = ?");
        assert_eq!(args, ["y", "x"]);
    }

    #[test]
    fn repeated_name_gets_one_slot_per_occurrence() {
        let params = table(&[("a", "x")]);
        let (sql, args) = expand_named("(:a_1, :a_1)", &params).unwrap();
        assert_eq!(sql, "(?, ?)");
        assert_eq!(args, ["x", "x"]);
    }

    #[test]
    fn placeholder_at_end_of_input() {
        let params = table(&[("id", "7")]);
        let (sql, args) = expand_named("id = :id_1", &params).unwrap();
        assert_eq!(sql, "id = ?");
        assert_eq!(args, ["7"]);
    }

    #[test]
    fn double_colon_is_literal_colon() {
        let params = ParamTable::new();
        let (sql, args) = expand_named("SELECT '12::30'", &params).unwrap();
        assert_eq!(sql, "SELECT '12:30'");
        assert!(args.is_empty());
    }

    #[test]
    fn bare_colon_is_kept() {
        let params = ParamTable::new();
        let (sql, _) = expand_named("SET @x := 1, y = ': '", &params).unwrap();
        assert_eq!(sql, "SET @x := 1, y = ': '");
    }

    #[test]
    fn missing_param_is_an_error() {
        let params = table(&[("a", "x")]);
        let err = expand_named("a = :a_2", &params).unwrap_err();
        assert_eq!(err, SqlGenError::MissingParam("a_2".to_string()));
        assert!(err.is_internal());
    }

    #[test]
    fn name_running_into_colon_is_malformed() {
        let params = table(&[("a", "x")]);
        let err = expand_named("a = :a_1::int", &params).unwrap_err();
        assert_eq!(err, SqlGenError::MalformedPlaceholder { position: 8 });
    }
}
