//! Property tests for placeholder accounting and determinism.

use proptest::prelude::*;
use sqlgen::{GeneratorConfig, InsertSpec, NamedStatement, UpdateSpec};
use std::collections::HashSet;

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,8}"
}

/// Fields (possibly repeated) and rows that match their width.
fn insert_input() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    prop::collection::vec(field_name(), 1..5).prop_flat_map(|fields| {
        let width = fields.len();
        let rows = prop::collection::vec(prop::collection::vec(value(), width), 1..6);
        (Just(fields), rows)
    })
}

fn assignments() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((field_name(), value()), 1..4)
}

fn update_input() -> impl Strategy<Value = Vec<(Vec<(String, String)>, Vec<(String, String)>)>> {
    prop::collection::vec((assignments(), assignments()), 1..5)
}

fn build_update(pairs: &[(Vec<(String, String)>, Vec<(String, String)>)]) -> UpdateSpec {
    let mut spec = UpdateSpec::new("t");
    for (set, conditions) in pairs {
        spec.add(set.iter().cloned(), conditions.iter().cloned());
    }
    spec
}

proptest! {
    #[test]
    fn insert_counts_are_rows_times_fields((fields, rows) in insert_input(), optimize in any::<bool>()) {
        let mut spec = InsertSpec::new("t");
        spec.optimize(optimize).fields(fields.iter().cloned());
        for row in &rows {
            spec.add(row.iter().cloned());
        }
        let expected = fields.len() * rows.len();

        let named = spec.build_named(&GeneratorConfig::default()).unwrap();
        prop_assert_eq!(named.params.len(), expected);
        prop_assert_eq!(named.sql.matches(':').count(), expected);

        let bound = named.expand().unwrap();
        prop_assert_eq!(bound.sql.matches('?').count(), expected);
        prop_assert_eq!(bound.args.len(), expected);
    }

    #[test]
    fn insert_params_are_unique((fields, rows) in insert_input()) {
        let mut spec = InsertSpec::new("t");
        spec.fields(fields.iter().cloned());
        for row in &rows {
            spec.add(row.iter().cloned());
        }

        let named = spec.build_named(&GeneratorConfig::default()).unwrap();
        let names: HashSet<&str> = named.params.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(names.len(), fields.len() * rows.len());
        prop_assert_eq!(named.params.len(), named.params.last_index());
    }

    #[test]
    fn insert_without_optimize_keeps_row_order((fields, rows) in insert_input()) {
        let mut spec = InsertSpec::new("t");
        spec.fields(fields.iter().cloned());
        for row in &rows {
            spec.add(row.iter().cloned());
        }

        let bound = spec.build(&GeneratorConfig::default()).unwrap();
        let flat: Vec<String> = rows.into_iter().flatten().collect();
        prop_assert_eq!(bound.args, flat);
    }

    #[test]
    fn update_is_byte_identical_across_builds(pairs in update_input()) {
        let first = build_update(&pairs).build(&GeneratorConfig::default()).unwrap();
        let second = build_update(&pairs).build(&GeneratorConfig::default()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.sql.matches('?').count(), first.args.len());
    }

    #[test]
    fn update_params_are_unique(pairs in update_input()) {
        let named = build_update(&pairs).build_named(&GeneratorConfig::default()).unwrap();
        // every bind got a fresh name: nothing was overwritten
        prop_assert_eq!(named.params.len(), named.params.last_index());
    }
}
