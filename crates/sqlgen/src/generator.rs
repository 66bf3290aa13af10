//! Statement generator facade.

use crate::builder::{InsertSpec, NamedStatement, SelectSpec, UpdateSpec, UpsertSpec};
use crate::config::GeneratorConfig;
use crate::error::SqlGenResult;
use crate::log::log_statement;
use crate::named::BoundQuery;

/// Generates driver-ready statements for a MySQL-style dialect.
///
/// Holds only configuration; every call builds from scratch, so one generator
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MysqlSqlGenerator {
    config: GeneratorConfig,
}

impl MysqlSqlGenerator {
    /// Create a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build any statement record, expand its placeholders and log the result.
    pub fn generate<S>(&self, spec: &S) -> SqlGenResult<BoundQuery>
    where
        S: NamedStatement + ?Sized,
    {
        let query = spec.build(&self.config)?;
        log_statement(&self.config, &query);
        Ok(query)
    }

    /// `SELECT ... FROM ... WHERE a = ? AND b = ?`
    pub fn select_sql(&self, spec: &SelectSpec) -> SqlGenResult<BoundQuery> {
        self.generate(spec)
    }

    /// `INSERT [IGNORE] INTO ... VALUES (...), (...)`
    pub fn insert_sql(&self, spec: &InsertSpec) -> SqlGenResult<BoundQuery> {
        self.generate(spec)
    }

    /// Batched `UPDATE ... SET f = CASE WHEN ... END WHERE (...) OR (...)`
    pub fn update_sql(&self, spec: &UpdateSpec) -> SqlGenResult<BoundQuery> {
        self.generate(spec)
    }

    /// `INSERT ... ON DUPLICATE KEY UPDATE ...`
    pub fn upsert_sql(&self, spec: &UpsertSpec) -> SqlGenResult<BoundQuery> {
        self.generate(spec)
    }
}
