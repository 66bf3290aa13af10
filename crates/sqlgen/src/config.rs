//! Generator configuration.

use crate::error::{SqlGenError, SqlGenResult};
use serde::Deserialize;

/// Level used for the per-statement log event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

#[cfg(feature = "tracing")]
impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Configuration for [`MysqlSqlGenerator`](crate::MysqlSqlGenerator).
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// quote_table = true
/// log_sql = true
/// log_level = "info"
/// max_sql_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Wrap the table name in backticks.
    pub quote_table: bool,
    /// Emit a log event for every generated statement.
    pub log_sql: bool,
    /// Level of the log event.
    pub log_level: LogLevel,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` logs it whole.
    pub max_sql_length: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            quote_table: true,
            log_sql: true,
            log_level: LogLevel::Debug,
            max_sql_length: Some(200),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> SqlGenResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| SqlGenError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set whether the table name is wrapped in backticks.
    pub fn quote_table(mut self, quote: bool) -> Self {
        self.quote_table = quote;
        self
    }

    /// Enable or disable statement logging.
    pub fn log_sql(mut self, enabled: bool) -> Self {
        self.log_sql = enabled;
        self
    }

    /// Set the log event level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> SqlGenResult<()> {
        if self.max_sql_length == Some(0) {
            return Err(SqlGenError::config(
                "max_sql_length must be greater than zero (omit it to disable truncation)",
            ));
        }
        Ok(())
    }

    /// Render a table name for the statement header.
    pub(crate) fn table_ref(&self, table: &str) -> String {
        if self.quote_table {
            format!("`{table}`")
        } else {
            table.to_string()
        }
    }
}
