use crate::config::GeneratorConfig;
use crate::error::SqlGenResult;
use crate::named::{BoundQuery, NamedQuery};
use std::fmt;

/// The kind of statement a `*Spec` record builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT with equality conditions
    Select,
    /// Bulk INSERT (optionally IGNORE)
    Insert,
    /// Batched CASE-based UPDATE
    Update,
    /// INSERT ... ON DUPLICATE KEY UPDATE
    Upsert,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Upsert => "upsert",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for statement specs.
pub trait NamedStatement {
    /// Which statement this record builds.
    fn kind(&self) -> StatementKind;

    /// Target table.
    fn table(&self) -> &str;

    /// Validate record state. Runs before any SQL is rendered.
    fn validate(&self) -> SqlGenResult<()> {
        Ok(())
    }

    /// Build SQL with named placeholders and the values bound to them.
    fn build_named(&self, config: &GeneratorConfig) -> SqlGenResult<NamedQuery>;

    /// Build and expand into `?` SQL with positional arguments.
    fn build(&self, config: &GeneratorConfig) -> SqlGenResult<BoundQuery> {
        self.build_named(config)?.expand()
    }

    /// Debug helper: named SQL under the default configuration.
    fn to_sql(&self) -> SqlGenResult<String> {
        Ok(self.build_named(&GeneratorConfig::default())?.sql)
    }
}
