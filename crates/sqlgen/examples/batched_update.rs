//! Example generating each statement kind and printing the driver-ready output.
//!
//! Run with:
//!   RUST_LOG=sqlgen=debug cargo run --example batched_update -p sqlgen

use sqlgen::{
    InsertSpec, MergeRule, MysqlSqlGenerator, NamedStatement, SelectSpec, SqlGenResult,
    UpdateSpec, UpsertSpec,
};

fn print(label: &str, spec: &dyn NamedStatement, generator: &MysqlSqlGenerator) -> SqlGenResult<()> {
    let named = spec.build_named(generator.config())?;
    let bound = generator.generate(spec)?;

    println!("== {label}");
    println!("named: {}", named.sql);
    println!("sql:   {}", bound.sql);
    println!("args:  {:?}", bound.args);
    println!();
    Ok(())
}

fn main() -> SqlGenResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let generator = MysqlSqlGenerator::new();

    let mut select = SelectSpec::new("products");
    select
        .fields(["id", "name", "price"])
        .and_eq("category", "books")
        .and_eq("in_stock", "1");
    print("select", &select, &generator)?;

    let mut insert = InsertSpec::new("products");
    insert
        .optimize(true)
        .fields(["id", "name", "price"])
        .add(["30", "Dune", "9.99"])
        .add(["10", "Emma", "4.50"])
        .add(["20", "Ulysses", "12.00"]);
    print("insert (optimized)", &insert, &generator)?;

    // Three price changes, one round trip.
    let mut update = UpdateSpec::new("products");
    update
        .add([("price", "8.99")], [("id", "30")])
        .add([("price", "4.00"), ("name", "Emma (annotated)")], [("id", "10")])
        .add([("price", "11.50")], [("id", "20")]);
    print("batched update", &update, &generator)?;

    let mut upsert = UpsertSpec::new("inventory");
    upsert
        .fields(["sku", "qty", "reserved", "last_price"])
        .add(["A-1", "5", "1", "9.99"])
        .add(["B-2", "2", "0", "4.50"])
        .merge("qty", MergeRule::Increment)
        .merge("reserved", MergeRule::Decrement)
        .merge(
            "last_price",
            MergeRule::Conditional("IF(VALUES(last_price) > 0, VALUES(last_price), last_price)".into()),
        );
    print("upsert", &upsert, &generator)?;

    Ok(())
}
