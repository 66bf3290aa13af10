//! # sqlgen
//!
//! Parameterized SQL generation for a MySQL-style dialect with
//! `ON DUPLICATE KEY UPDATE` and named placeholders.
//!
//! ## Features
//!
//! - **Four statement kinds**: SELECT over equality conditions, bulk INSERT
//!   (optionally IGNORE), batched CASE-based UPDATE, and UPSERT with per-field
//!   merge rules
//! - **Unique placeholders**: `:field_n` with one counter per build
//! - **Driver-ready output**: named SQL is expanded to `?` markers and an
//!   ordered argument list
//! - **Deterministic**: identical input always produces identical SQL
//! - **Safe defaults**: empty clauses and ragged rows are errors, never
//!   malformed SQL
//!
//! ## Example
//!
//! ```ignore
//! use sqlgen::{InsertSpec, MysqlSqlGenerator};
//!
//! let mut spec = InsertSpec::new("t");
//! spec.fields(["a", "b"]).add(["1", "2"]).add(["3", "4"]);
//!
//! let query = MysqlSqlGenerator::new().insert_sql(&spec)?;
//! assert_eq!(query.sql, "INSERT INTO `t` (a, b) VALUES (?, ?), (?, ?)");
//! assert_eq!(query.args, ["1", "2", "3", "4"]);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod named;
pub mod param;

mod log;

pub use builder::{
    InsertSpec, MergeEntry, MergeRule, NamedStatement, Row, SelectSpec, StatementKind, UpdatePair,
    UpdateSpec, UpsertSpec,
};
pub use config::{GeneratorConfig, LogLevel};
pub use error::{SqlGenError, SqlGenResult};
pub use generator::MysqlSqlGenerator;
pub use named::{BoundQuery, NamedQuery, expand_named};
pub use param::{ParamTable, named_condition, named_param, param_stem};
