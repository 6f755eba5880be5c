use criterion::{black_box, criterion_group, criterion_main, Criterion};

use survey_analytics::analytics::{
    encode_categorical, filter, frequency, summary_mean, summary_mode, Predicate,
};
use survey_analytics::table::{Cell, Table};

const AGES: [&str; 3] = ["13-15", "16-18", "19+"];
const DEVICES: [&str; 4] = ["Phone", "Laptop", "Tablet", "TV"];

/// Synthetic survey table; a real export is a few hundred rows, benched here
/// at a few orders of magnitude more to make scan costs visible.
fn synthetic_table(rows: usize) -> Table {
    let table_rows = (0..rows)
        .map(|i| {
            vec![
                Cell::text(AGES[i % AGES.len()]),
                Cell::text(DEVICES[i % DEVICES.len()]),
                if i % 17 == 0 {
                    Cell::text("sometimes")
                } else {
                    Cell::text(((i % 5) + 1).to_string())
                },
            ]
        })
        .collect();
    Table::new(["age", "device", "focus"], table_rows)
}

fn bench_aggregation(c: &mut Criterion) {
    let table = synthetic_table(50_000);

    c.bench_function("frequency/50k", |b| {
        b.iter(|| frequency(black_box(&table), "device").unwrap())
    });

    let preds = [Predicate::new("age", ["16-18"]), Predicate::new("device", ["Phone", "Laptop"])];
    c.bench_function("filter/50k", |b| {
        b.iter(|| filter(black_box(&table), black_box(&preds)).unwrap())
    });

    c.bench_function("summary_mean/50k", |b| {
        b.iter(|| summary_mean(black_box(&table), "focus").unwrap())
    });

    c.bench_function("summary_mode/50k", |b| {
        b.iter(|| summary_mode(black_box(&table), "device").unwrap())
    });

    c.bench_function("encode_categorical/50k", |b| {
        b.iter(|| encode_categorical(black_box(&table), "age").unwrap())
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
