use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use contactbook::{contact::ContactDraft, index::NameIndex, store::sqlite::ContactStore};

fn draft(name: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        ..ContactDraft::default()
    }
}

fn bench_creates(c: &mut Criterion) {
    c.bench_function("store_create_1k", |b| {
        b.iter(|| {
            let mut store = ContactStore::open_in_memory().expect("open");
            for i in 0..1_000u32 {
                let _ = store.create(&draft(&format!("Contact {i}"))).expect("create");
            }
        });
    });
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    let names: Vec<String> = (0..5_000).map(|i| format!("First{i} Last{i}")).collect();
    let index = NameIndex::from_names(names);

    for prefix in ["", "first1", "last4999"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), &prefix, |b, prefix| {
            b.iter(|| {
                let _ = index.suggest(prefix);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_creates, bench_suggest);
criterion_main!(benches);
