use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockledger_inventory::InventoryManager;
use stockledger_products::{NewProduct, Product};

/// Build a catalog of `len` products with spread-out stock levels.
fn catalog(len: usize) -> InventoryManager {
    let mut manager = InventoryManager::new();
    for i in 0..len {
        // Deterministic but non-monotonic stock distribution.
        let stock = ((i * 7919) % 100_000) as i64;
        let sku = format!("SKU{i}");
        manager
            .add_product(
                Product::create(NewProduct::new(sku.clone(), sku, 1_000).with_initial_stock(stock))
                    .unwrap(),
            )
            .unwrap();
    }
    manager
}

/// Baseline: sort the whole catalog and truncate, O(len · log len).
fn top_n_full_sort(manager: &InventoryManager, n: usize) -> Vec<i64> {
    let mut stocks: Vec<i64> = manager
        .list_products()
        .iter()
        .map(|p| p.current_stock())
        .collect();
    stocks.sort_unstable_by(|a, b| b.cmp(a));
    stocks.truncate(n);
    stocks
}

fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n_by_stock");

    for catalog_size in [100, 1_000, 10_000] {
        let manager = catalog(catalog_size);
        group.throughput(Throughput::Elements(catalog_size as u64));

        group.bench_with_input(
            BenchmarkId::new("bounded_heap", catalog_size),
            &manager,
            |b, manager| b.iter(|| manager.top_n_by_stock(black_box(10))),
        );

        group.bench_with_input(
            BenchmarkId::new("full_sort", catalog_size),
            &manager,
            |b, manager| b.iter(|| top_n_full_sort(manager, black_box(10))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_top_n);
criterion_main!(benches);
