// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Backend, Container, LinearScan, QuadTree, Rect};

const AREA: f64 = 10_000.0;

fn extent() -> Rect<f64> {
    Rect::new(0.0, 0.0, AREA, AREA)
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, cell * 0.8, cell * 0.8));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn gen_random_rects(count: usize, min_side: f64, max_side: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.range(0.0, AREA);
        let y0 = rng.range(0.0, AREA);
        let w = rng.range(min_side, max_side);
        let h = rng.range(min_side, max_side);
        out.push(Rect::new(x0, y0, w, h));
    }
    out
}

fn gen_viewports(count: usize, side: f64) -> Vec<Rect<f64>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            Rect::new(
                rng.range(0.0, AREA - side),
                rng.range(0.0, AREA - side),
                side,
                side,
            )
        })
        .collect()
}

fn load<B: Backend<f64, u32>>(mut backend: B, rects: &[Rect<f64>]) -> B {
    for (i, r) in rects.iter().copied().enumerate() {
        backend.insert(r, i as u32);
    }
    backend
}

fn query_all<B: Backend<f64, u32>>(backend: &B, queries: &[Rect<f64>], out: &mut Vec<u32>) -> usize {
    let mut total = 0;
    for q in queries {
        out.clear();
        backend.query_rect_into(q, out);
        total += out.len();
    }
    total
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, AREA / n as f64);
        let query = Rect::new(1000.0, 1000.0, 4000.0, 4000.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::new(extent(), 8).unwrap(),
                |tree| {
                    let tree = load(tree, &rects);
                    black_box(tree.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("linear_n{}", n), |b| {
            b.iter_batched(
                || LinearScan::<f64, u32>::with_capacity(rects.len()),
                |scan| {
                    let scan = load(scan, &rects);
                    black_box(scan.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let rects = gen_random_rects(100_000, 0.1, 10.0);
    for &side in &[100.0_f64, 1000.0, 5000.0] {
        let views = gen_viewports(64, side);
        let tree = load(QuadTree::<f64, u32>::new(extent(), 8).unwrap(), &rects);
        let scan = load(LinearScan::<f64, u32>::with_capacity(rects.len()), &rects);
        let mut out = Vec::new();
        group.throughput(Throughput::Elements(views.len() as u64));

        group.bench_function(format!("quadtree_view{}", side), |b| {
            b.iter(|| black_box(query_all(&tree, &views, &mut out)))
        });
        group.bench_function(format!("linear_view{}", side), |b| {
            b.iter(|| black_box(query_all(&scan, &views, &mut out)))
        });
    }
    group.finish();
}

fn bench_depth_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_sweep");
    let rects = gen_random_rects(50_000, 0.1, 50.0);
    let views = gen_viewports(64, 500.0);
    for &depth in &[1usize, 2, 4, 6, 8, 10] {
        let tree = load(QuadTree::<f64, u32>::new(extent(), depth).unwrap(), &rects);
        let mut out = Vec::new();
        group.bench_function(format!("max_depth{}", depth), |b| {
            b.iter(|| black_box(query_all(&tree, &views, &mut out)))
        });
    }
    group.finish();
}

fn bench_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("container");
    let rects = gen_random_rects(100_000, 0.1, 10.0);
    let views = gen_viewports(64, 1000.0);
    let mut objects: Container<f64, [u8; 32]> = Container::new(extent(), 8).unwrap();
    objects.extend(rects.iter().map(|r| ([0_u8; 32], *r)));

    group.bench_function("search_values", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for v in &views {
                total += objects.search_values(v).count();
            }
            black_box(total);
        })
    });
    group.bench_function("scan", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for v in &views {
                total += objects.scan(v).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_query_heavy,
    bench_depth_sweep,
    bench_container,
);
criterion_main!(benches);
