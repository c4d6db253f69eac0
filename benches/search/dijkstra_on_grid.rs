use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::{
    graph::Graph, search::dijkstra::Dijkstra, util::test_graphs::generate_grid_graph,
};

criterion_group!(benches, corner_to_corner, random_queries);
criterion_main!(benches);

pub fn corner_to_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_to_corner");
    for size in [10, 50, 100].iter() {
        let g = generate_grid_graph(*size, *size);
        let target = format!("{}:{}", size - 1, size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search("0:0", &target)).ok();
            })
        });
    }
    group.finish();
}

fn random_queries(c: &mut Criterion) {
    const SIZE: usize = 100;
    let g: Graph = generate_grid_graph(SIZE, SIZE);

    let mut rng: StdRng = SeedableRng::seed_from_u64(187);
    let queries: Vec<(String, String)> = (0..100)
        .map(|_| {
            let (x, y) = (rng.gen_range(0..SIZE - 1), rng.gen_range(0..SIZE - 1));
            let (tx, ty) = (rng.gen_range(0..SIZE), rng.gen_range(0..SIZE));
            (format!("{}:{}", x, y), format!("{}:{}", tx, ty))
        })
        .collect();

    c.bench_with_input(
        BenchmarkId::new("random_queries", stringify!(SIZE)),
        &g,
        |b, g| {
            b.iter(|| {
                for (source, target) in &queries {
                    let mut dijkstra = Dijkstra::new(g);
                    black_box(dijkstra.search(source, target)).ok();
                }
            })
        },
    );
}
