use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use merchplan_core::planning::engine::upsert_forecast;
use merchplan_core::{gross_margin_series, materialize, Calendar};
use merchplan_domain::{ForecastInput, PlanningCollection, Sku, Store};

fn sample_stores(count: usize) -> Vec<Store> {
    (0..count)
        .map(|idx| Store {
            id: format!("store-{idx}"),
            name: format!("Store {idx}"),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
        })
        .collect()
}

fn sample_skus(count: usize) -> Vec<Sku> {
    (0..count)
        .map(|idx| Sku {
            id: format!("sku{idx}"),
            sku: format!("SKU {idx}"),
            price: 20.0 + idx as f64,
            cost: 8.0,
        })
        .collect()
}

/// Roughly a quarter of the cells carry a forecast.
fn sample_planning(stores: &[Store], skus: &[Sku], calendar: &Calendar) -> PlanningCollection {
    let mut planning = PlanningCollection::new();
    for (s, store) in stores.iter().enumerate() {
        for (k, sku) in skus.iter().enumerate() {
            for (w, week) in calendar.weeks().iter().enumerate() {
                if (s + k + w) % 4 != 0 {
                    continue;
                }
                upsert_forecast(
                    &mut planning,
                    &ForecastInput {
                        store_id: store.id.clone(),
                        sku_id: sku.id.clone(),
                        week_id: week.week.clone(),
                        sales_units: (w + 1) as f64,
                        price: sku.price,
                        cost: sku.cost,
                    },
                );
            }
        }
    }
    planning
}

fn bench_materialize(c: &mut Criterion) {
    let calendar = Calendar::default();
    let mut group = c.benchmark_group("materialize");

    for (store_count, sku_count) in [(5, 3), (25, 40), (100, 100)] {
        let stores = sample_stores(store_count);
        let skus = sample_skus(sku_count);
        let planning = sample_planning(&stores, &skus, &calendar);

        group.bench_with_input(
            BenchmarkId::new("grid", format!("{store_count}x{sku_count}")),
            &(stores, skus, planning),
            |b, (stores, skus, planning)| {
                b.iter(|| {
                    let rows = materialize(
                        black_box(stores),
                        black_box(skus),
                        black_box(planning),
                        calendar.weeks(),
                    );
                    black_box(gross_margin_series(&rows, calendar.weeks()))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_materialize);
criterion_main!(benches);
