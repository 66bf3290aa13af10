use super::insert::{Row, check_rows, render_insert};
use super::traits::{NamedStatement, StatementKind};
use crate::config::GeneratorConfig;
use crate::error::{SqlGenError, SqlGenResult};
use crate::named::NamedQuery;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Conflict resolution applied to one field by `ON DUPLICATE KEY UPDATE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRule {
    /// `field = VALUES(field)`
    #[default]
    Overwrite,
    /// `field = field + VALUES(field)`
    Increment,
    /// `field = field - VALUES(field)`
    Decrement,
    /// `field = <expr>`; the expression is trusted and emitted verbatim.
    Conditional(String),
}

impl MergeRule {
    /// Build a rule from a discriminator (`overwrite`, `inc`, `dec`, `cond`
    /// or their long forms) and, for `cond`, its expression.
    pub fn parse(kind: &str, condition: Option<&str>) -> SqlGenResult<Self> {
        match kind {
            "cond" | "conditional" => match condition {
                Some(expr) if !expr.trim().is_empty() => Ok(Self::Conditional(expr.to_string())),
                _ => Err(SqlGenError::EmptyClause("conditional merge expression")),
            },
            other => other.parse(),
        }
    }

    /// The assignment this rule emits for `field`.
    pub fn clause(&self, field: &str) -> String {
        match self {
            MergeRule::Overwrite => format!("{field} = VALUES({field})"),
            MergeRule::Increment => format!("{field} = {field} + VALUES({field})"),
            MergeRule::Decrement => format!("{field} = {field} - VALUES({field})"),
            MergeRule::Conditional(expr) => format!("{field} = {expr}"),
        }
    }
}

impl FromStr for MergeRule {
    type Err = SqlGenError;

    /// Parse a rule without an expression; `cond` needs [`MergeRule::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(Self::Overwrite),
            "inc" | "increment" => Ok(Self::Increment),
            "dec" | "decrement" => Ok(Self::Decrement),
            "cond" | "conditional" => Err(SqlGenError::EmptyClause("conditional merge expression")),
            other => Err(SqlGenError::UnknownMergeRule(other.to_string())),
        }
    }
}

/// A field and the rule that merges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEntry {
    pub field: String,
    #[serde(default)]
    pub rule: MergeRule,
}

/// Bulk INSERT with `ON DUPLICATE KEY UPDATE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertSpec {
    /// Table name
    pub table: String,
    /// Column names
    #[serde(default)]
    pub fields: Vec<String>,
    /// Rows, in insertion order
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Order rows by the `id` field before emitting them
    #[serde(default)]
    pub optimize: bool,
    /// Merge entries, emitted in this order
    #[serde(default)]
    pub merge: Vec<MergeEntry>,
}

impl UpsertSpec {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set whether rows are ordered by the `id` field.
    pub fn optimize(&mut self, optimize: bool) -> &mut Self {
        self.optimize = optimize;
        self
    }

    /// Append column names.
    pub fn fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Append a row.
    pub fn add<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(Row::new(values));
        self
    }

    /// Append a merge entry.
    pub fn merge(&mut self, field: impl Into<String>, rule: MergeRule) -> &mut Self {
        self.merge.push(MergeEntry {
            field: field.into(),
            rule,
        });
        self
    }
}

impl NamedStatement for UpsertSpec {
    fn kind(&self) -> StatementKind {
        StatementKind::Upsert
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn validate(&self) -> SqlGenResult<()> {
        check_rows(&self.fields, &self.rows)?;
        if self.merge.is_empty() {
            return Err(SqlGenError::EmptyClause("on duplicate key update"));
        }
        for entry in &self.merge {
            if let MergeRule::Conditional(expr) = &entry.rule
                && expr.trim().is_empty()
            {
                return Err(SqlGenError::EmptyClause("conditional merge expression"));
            }
        }
        Ok(())
    }

    fn build_named(&self, config: &GeneratorConfig) -> SqlGenResult<NamedQuery> {
        self.validate()?;

        let (mut sql, params) = render_insert(
            config,
            &self.table,
            false,
            &self.fields,
            &self.rows,
            self.optimize,
        );

        // Conditional expressions must come out of expansion untouched, so
        // their colons are escaped as `::`.
        let assignments: Vec<String> = self
            .merge
            .iter()
            .map(|entry| entry.rule.clause(&entry.field).replace(':', "::"))
            .collect();

        sql.push_str(" ON DUPLICATE KEY UPDATE ");
        sql.push_str(&assignments.join(", "));

        Ok(NamedQuery {
            kind: StatementKind::Upsert,
            table: self.table.clone(),
            sql,
            params,
        })
    }
}
