//! Error types for sqlgen

use thiserror::Error;

/// Result type alias for sqlgen operations
pub type SqlGenResult<T> = Result<T, SqlGenError>;

/// Error types for statement generation and placeholder expansion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlGenError {
    /// A row carries a different number of values than there are fields
    #[error("Field/value mismatch in row {row}: expected {expected} values, got {actual}")]
    FieldValueMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A clause that needs at least one entry was empty
    #[error("Empty clause: {0} requires at least one entry")]
    EmptyClause(&'static str),

    /// A placeholder in the SQL text has no bound value.
    ///
    /// Builders always register what they emit, so hitting this from a
    /// builder is a bug rather than bad input.
    #[error("Missing param: no value bound for placeholder ':{0}'")]
    MissingParam(String),

    /// A `:` appeared while a placeholder name was being read
    #[error("Malformed placeholder at byte {position}")]
    MalformedPlaceholder { position: usize },

    /// A field name has no characters a placeholder name can be built from
    #[error("Field {0:?} cannot name a placeholder")]
    UnnamedField(String),

    /// Unrecognized merge rule discriminator
    #[error("Unknown merge rule: {0:?}")]
    UnknownMergeRule(String),

    /// Invalid generator configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlGenError {
    /// Create a field/value mismatch error for a row
    pub fn mismatch(row: usize, expected: usize, actual: usize) -> Self {
        Self::FieldValueMismatch {
            row,
            expected,
            actual,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a field/value mismatch error
    pub fn is_field_value_mismatch(&self) -> bool {
        matches!(self, Self::FieldValueMismatch { .. })
    }

    /// Check if this is an empty clause error
    pub fn is_empty_clause(&self) -> bool {
        matches!(self, Self::EmptyClause(_))
    }

    /// Check if this is a missing param error
    pub fn is_missing_param(&self) -> bool {
        matches!(self, Self::MissingParam(_))
    }

    /// Whether the error points at a defect in generated SQL rather than
    /// at caller input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::MissingParam(_) | Self::MalformedPlaceholder { .. }
        )
    }
}
