use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlgen::{GeneratorConfig, InsertSpec, NamedStatement, UpdateSpec, expand_named};

/// Build an insert with `n` rows of four columns:
/// INSERT INTO `t` (id, a, b, c) VALUES (:id_1, :a_2, :b_3, :c_4), ...
fn build_insert(n: usize, optimize: bool) -> InsertSpec {
    let mut spec = InsertSpec::new("t");
    spec.optimize(optimize).fields(["id", "a", "b", "c"]);
    for i in (0..n).rev() {
        spec.add([i.to_string(), format!("a{i}"), format!("b{i}"), format!("c{i}")]);
    }
    spec
}

/// Build a batched update with `n` pairs, each setting two fields.
fn build_update(n: usize) -> UpdateSpec {
    let mut spec = UpdateSpec::new("t");
    for i in 0..n {
        spec.add(
            [("name", format!("name{i}")), ("score", i.to_string())],
            [("id", i.to_string())],
        );
    }
    spec
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert");
    let config = GeneratorConfig::default();

    for n in [1, 10, 100, 1000] {
        let spec = build_insert(n, false);
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, spec| {
            b.iter(|| black_box(spec.build(&config).unwrap()));
        });
    }

    group.finish();
}

fn bench_insert_optimized(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert_optimized");
    let config = GeneratorConfig::default();

    for n in [10, 100, 1000] {
        let spec = build_insert(n, true);
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, spec| {
            b.iter(|| black_box(spec.build(&config).unwrap()));
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/update");
    let config = GeneratorConfig::default();

    for n in [1, 10, 100, 500] {
        let spec = build_update(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, spec| {
            b.iter(|| black_box(spec.build(&config).unwrap()));
        });
    }

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/expand");
    let config = GeneratorConfig::default();

    for n in [10, 100, 1000] {
        let named = build_insert(n, false).build_named(&config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &named, |b, named| {
            b.iter(|| black_box(expand_named(&named.sql, &named.params).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_optimized,
    bench_update,
    bench_expand
);
criterion_main!(benches);
