// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{QuadTree, Rect};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, cell * 0.9, cell * 0.9));
        }
    }
    out
}

fn to_rstar_rects(v: &[Rect<f64>]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.x, r.y], [r.max_x(), r.max_y()]))
        .collect()
}

fn bench_rstar_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[64usize, 128] {
        let cell = 10.0;
        let rects = gen_grid_rects(n, cell);
        let extent = Rect::new(0.0, 0.0, n as f64 * cell, n as f64 * cell);
        let query = Rect::new(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::new(extent, 8).unwrap(),
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    black_box(tree.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners([query.x, query.y], [query.max_x(), query.max_y()]);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare_f64);
criterion_main!(benches);
