use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listcycle::cs::graph::has_cycle;
use listcycle::cs::list::LinkedList;

fn bench_floyd_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_cycle");

    for &len in &[10usize, 100, 1000, 10_000] {
        let values: Vec<i32> = (0..len as i32).collect();

        let acyclic = LinkedList::from_values(values.clone()).unwrap();
        group.bench_with_input(BenchmarkId::new("acyclic", len), &acyclic, |b, list| {
            b.iter(|| has_cycle(black_box(list.head())))
        });

        let rho = LinkedList::from_values(values.clone())
            .unwrap()
            .with_cycle_at(len / 2)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("cycle_at_middle", len), &rho, |b, list| {
            b.iter(|| has_cycle(black_box(list.head())))
        });

        let ring = LinkedList::from_values(values)
            .unwrap()
            .with_cycle_at(0)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("cycle_at_head", len), &ring, |b, list| {
            b.iter(|| has_cycle(black_box(list.head())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_floyd_cycle);
criterion_main!(benches);
