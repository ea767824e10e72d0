use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use warehouse_core::ItemId;
use warehouse_inventory::{ElectronicItem, InventoryRepository, SharedRepository};

fn item(id: i64) -> ElectronicItem {
    ElectronicItem::new(ItemId::new(id), "Laptop", 5, "Asus", 50)
}

fn populated(size: i64) -> InventoryRepository<ElectronicItem> {
    let mut repo = InventoryRepository::new();
    for id in 0..size {
        repo.insert(item(id)).unwrap();
    }
    repo
}

fn bench_insert_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_throughput");

    for size in [100i64, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }

    group.finish();
}

fn bench_update_quantity_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quantity_latency");
    group.sample_size(1000);

    group.bench_function("owned_repository", |b| {
        let mut repo = populated(1_000);
        let mut qty = 0i64;
        b.iter(|| {
            qty = (qty + 1) % 1_000;
            repo.update_quantity(black_box(ItemId::new(500)), qty).unwrap();
        });
    });

    group.bench_function("shared_repository_adjust", |b| {
        let repo = SharedRepository::from_repository(populated(1_000));
        b.iter(|| {
            repo.adjust_quantity(black_box(ItemId::new(500)), 1).unwrap();
        });
    });

    group.finish();
}

fn bench_list_all_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all_snapshot");

    for size in [100i64, 10_000].iter() {
        let repo = populated(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &repo, |b, repo| {
            b.iter(|| black_box(repo.list_all()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_throughput,
    bench_update_quantity_latency,
    bench_list_all_snapshot
);
criterion_main!(benches);
