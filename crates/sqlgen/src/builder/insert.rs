use super::traits::{NamedStatement, StatementKind};
use crate::config::GeneratorConfig;
use crate::error::{SqlGenError, SqlGenResult};
use crate::named::NamedQuery;
use crate::param::{ParamTable, check_field_names};
use serde::{Deserialize, Serialize};

/// Field whose value orders rows when `optimize` is set (matched
/// case-insensitively). If several fields match, the last one wins.
pub const ID_FIELD: &str = "id";

/// One row of values, positionally matching the field list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub values: Vec<String>,
}

impl Row {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for Row {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

/// Bulk INSERT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertSpec {
    /// Table name
    pub table: String,
    /// Emit `INSERT IGNORE`
    #[serde(default)]
    pub ignore: bool,
    /// Column names
    #[serde(default)]
    pub fields: Vec<String>,
    /// Rows, in insertion order
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Order rows by the `id` field before emitting them
    #[serde(default)]
    pub optimize: bool,
}

impl InsertSpec {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set whether to emit `INSERT IGNORE`.
    pub fn ignore(&mut self, ignore: bool) -> &mut Self {
        self.ignore = ignore;
        self
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

    /// Append a row. Its length is checked when the statement is built.
    pub fn add<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(Row::new(values));
        self
    }
}

impl NamedStatement for InsertSpec {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn validate(&self) -> SqlGenResult<()> {
        check_rows(&self.fields, &self.rows)
    }

    fn build_named(&self, config: &GeneratorConfig) -> SqlGenResult<NamedQuery> {
        self.validate()?;

        let (sql, params) = render_insert(
            config,
            &self.table,
            self.ignore,
            &self.fields,
            &self.rows,
            self.optimize,
        );

        Ok(NamedQuery {
            kind: StatementKind::Insert,
            table: self.table.clone(),
            sql,
            params,
        })
    }
}

/// Reject empty field lists, empty row sets, ragged rows and fields that
/// cannot name a placeholder.
pub(crate) fn check_rows(fields: &[String], rows: &[Row]) -> SqlGenResult<()> {
    if fields.is_empty() {
        return Err(SqlGenError::EmptyClause("insert fields"));
    }
    if rows.is_empty() {
        return Err(SqlGenError::EmptyClause("insert rows"));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != fields.len() {
            return Err(SqlGenError::mismatch(i, fields.len(), row.len()));
        }
    }
    check_field_names(fields)
}

/// Render `INSERT [IGNORE] INTO ... VALUES ...`. Rows must have passed
/// [`check_rows`].
pub(crate) fn render_insert(
    config: &GeneratorConfig,
    table: &str,
    ignore: bool,
    fields: &[String],
    rows: &[Row],
    optimize: bool,
) -> (String, ParamTable) {
    let mut params = ParamTable::new();
    let values = values_clause(&mut params, fields, rows, optimize);
    let verb = if ignore { "INSERT IGNORE INTO" } else { "INSERT INTO" };
    let sql = format!(
        "{verb} {} ({}) VALUES {}",
        config.table_ref(table),
        fields.join(", "),
        values
    );
    (sql, params)
}

/// A row's rendered tuple plus the identifier it sorts by.
struct Tuple<'a> {
    id: Option<&'a str>,
    sql: String,
}

/// Bind every value and render `(p1, p2, ...), (...)`.
///
/// Placeholders are numbered in insertion order. With `optimize`, tuples are
/// then stably sorted by the `id` value as a plain string; the caller's
/// row order is left alone.
fn values_clause(
    params: &mut ParamTable,
    fields: &[String],
    rows: &[Row],
    optimize: bool,
) -> String {
    let id_position = if optimize {
        fields.iter().rposition(|f| f.eq_ignore_ascii_case(ID_FIELD))
    } else {
        None
    };

    let mut tuples = Vec::with_capacity(rows.len());
    for row in rows {
        let mut placeholders = Vec::with_capacity(fields.len());
        for (field, value) in fields.iter().zip(&row.values) {
            placeholders.push(params.bind(field, value.as_str()));
        }
        tuples.push(Tuple {
            id: id_position.and_then(|k| row.values.get(k)).map(String::as_str),
            sql: format!("({})", placeholders.join(", ")),
        });
    }

    if id_position.is_some() {
        tuples.sort_by(|a, b| a.id.cmp(&b.id));
    }

    tuples
        .into_iter()
        .map(|t| t.sql)
        .collect::<Vec<_>>()
        .join(", ")
}
