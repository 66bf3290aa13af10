//! Statement specs and their builders.
//!
//! Each `*Spec` record describes one statement. Building it produces SQL with
//! named placeholders (`:field_n`) plus a [`ParamTable`]; expanding that
//! yields driver-ready `?` SQL and positional arguments.
//!
//! ## Design
//!
//! - Specs are plain values. Building never mutates them and keeps no state
//!   between calls, so the same record can be built from several threads.
//! - One placeholder counter per build, shared by every clause.
//! - Structural problems (empty clauses, ragged rows) fail before any SQL
//!   text is produced.

pub mod insert;
pub mod select;
pub mod traits;
pub mod update;
pub mod upsert;

pub use insert::{InsertSpec, Row};
pub use select::SelectSpec;
pub use traits::{NamedStatement, StatementKind};
pub use update::{UpdatePair, UpdateSpec};
pub use upsert::{MergeEntry, MergeRule, UpsertSpec};

use crate::param::ParamTable;
use indexmap::IndexMap;

/// Bind every condition and join the predicates with `AND`.
pub(crate) fn and_terms(params: &mut ParamTable, conditions: &IndexMap<String, String>) -> String {
    let terms: Vec<String> = conditions
        .iter()
        .map(|(field, value)| params.bind_eq(field, value.as_str()))
        .collect();
    terms.join(" AND ")
}

/// Collect `(field, value)` pairs into an ordered condition map.
pub(crate) fn collect_pairs<I, K, V>(pairs: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
