use super::traits::{NamedStatement, StatementKind};
use super::{and_terms, collect_pairs};
use crate::config::GeneratorConfig;
use crate::error::{SqlGenError, SqlGenResult};
use crate::named::NamedQuery;
use crate::param::{ParamTable, check_field_names};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// SELECT over a flat set of equality conditions.
///
/// ```ignore
/// let mut spec = SelectSpec::new("users");
/// spec.fields(["id", "name"]).and_eq("status", "active");
/// // SELECT id, name FROM `users` WHERE status = :status_1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectSpec {
    /// Table name
    pub table: String,
    /// Selected fields, emitted in this order
    #[serde(default)]
    pub fields: Vec<String>,
    /// Equality conditions (field -> value), joined with AND
    #[serde(default, rename = "where")]
    pub conditions: IndexMap<String, String>,
}

impl SelectSpec {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Append a selected field.
    pub fn field(&mut self, field: impl Into<String>) -> &mut Self {
        self.fields.push(field.into());
        self
    }

    /// Append selected fields.
    pub fn fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add an equality condition. A repeated field replaces the earlier value.
    pub fn and_eq(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    /// Add several equality conditions.
    pub fn and_eq_all<I, K, V>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.conditions.extend(collect_pairs(conditions));
        self
    }
}

impl NamedStatement for SelectSpec {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn validate(&self) -> SqlGenResult<()> {
        if self.fields.is_empty() {
            return Err(SqlGenError::EmptyClause("select fields"));
        }
        if self.conditions.is_empty() {
            return Err(SqlGenError::EmptyClause("where"));
        }
        check_field_names(self.conditions.keys())
    }

    fn build_named(&self, config: &GeneratorConfig) -> SqlGenResult<NamedQuery> {
        self.validate()?;

        let mut params = ParamTable::new();
        let predicates = and_terms(&mut params, &self.conditions);
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            self.fields.join(", "),
            config.table_ref(&self.table),
            predicates
        );

        Ok(NamedQuery {
            kind: StatementKind::Select,
            table: self.table.clone(),
            sql,
            params,
        })
    }
}
