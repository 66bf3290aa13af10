use super::traits::{NamedStatement, StatementKind};
use super::{and_terms, collect_pairs};
use crate::config::GeneratorConfig;
use crate::error::{SqlGenError, SqlGenResult};
use crate::named::NamedQuery;
use crate::param::{ParamTable, check_field_names};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logical row update: assign `set` where every `conditions` entry matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePair {
    pub set: IndexMap<String, String>,
    #[serde(rename = "where")]
    pub conditions: IndexMap<String, String>,
}

/// Batched UPDATE: many logical row updates in a single statement.
///
/// Every pair becomes a `WHEN (...)` branch in a per-field `CASE`, and the
/// pairs' conditions are OR-ed into the statement's `WHERE`:
///
/// ```text
/// UPDATE `t` SET
///   name = CASE WHEN (id = :id_1) THEN :name_2 WHEN (id = :id_3) THEN :name_4 ELSE name END
/// WHERE (id = :id_1) OR (id = :id_3)
/// ```
///
/// `CASE` expressions are emitted in field-name order and their branches in
/// pair order, so identical input always gives identical SQL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSpec {
    /// Table name
    pub table: String,
    #[serde(default)]
    pub pairs: Vec<UpdatePair>,
}

impl UpdateSpec {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            pairs: Vec::new(),
        }
    }

    /// Append a `(set, where)` pair.
    pub fn add<S, W, K1, V1, K2, V2>(&mut self, set: S, conditions: W) -> &mut Self
    where
        S: IntoIterator<Item = (K1, V1)>,
        K1: Into<String>,
        V1: Into<String>,
        W: IntoIterator<Item = (K2, V2)>,
        K2: Into<String>,
        V2: Into<String>,
    {
        self.pairs.push(UpdatePair {
            set: collect_pairs(set),
            conditions: collect_pairs(conditions),
        });
        self
    }
}

impl NamedStatement for UpdateSpec {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn validate(&self) -> SqlGenResult<()> {
        if self.pairs.is_empty() {
            return Err(SqlGenError::EmptyClause("update pairs"));
        }
        for pair in &self.pairs {
            if pair.set.is_empty() {
                return Err(SqlGenError::EmptyClause("set"));
            }
            if pair.conditions.is_empty() {
                return Err(SqlGenError::EmptyClause("where"));
            }
            check_field_names(pair.set.keys().chain(pair.conditions.keys()))?;
        }
        Ok(())
    }

    fn build_named(&self, config: &GeneratorConfig) -> SqlGenResult<NamedQuery> {
        self.validate()?;

        let mut params = ParamTable::new();
        let mut when_clauses: Vec<String> = Vec::with_capacity(self.pairs.len());
        // field -> (when clause index, placeholder), branches in pair order
        let mut cases: BTreeMap<&str, Vec<(usize, String)>> = BTreeMap::new();

        for pair in &self.pairs {
            let when = format!("({})", and_terms(&mut params, &pair.conditions));
            let when_idx = when_clauses.len();
            when_clauses.push(when);

            for (field, value) in &pair.set {
                let placeholder = params.bind(field, value.as_str());
                cases
                    .entry(field.as_str())
                    .or_default()
                    .push((when_idx, placeholder));
            }
        }

        let set_parts: Vec<String> = cases
            .iter()
            .map(|(field, branches)| {
                let mut case = format!("{field} = CASE");
                for (when_idx, placeholder) in branches {
                    case.push_str(" WHEN ");
                    case.push_str(&when_clauses[*when_idx]);
                    case.push_str(" THEN ");
                    case.push_str(placeholder);
                }
                case.push_str(" ELSE ");
                case.push_str(field);
                case.push_str(" END");
                case
            })
            .collect();

        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            config.table_ref(&self.table),
            set_parts.join(", "),
            when_clauses.join(" OR ")
        );

        Ok(NamedQuery {
            kind: StatementKind::Update,
            table: self.table.clone(),
            sql,
            params,
        })
    }
}
