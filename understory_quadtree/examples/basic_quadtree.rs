// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: bulk load, query, inspect, clear.

use understory_quadtree::{Container, Rect};

fn main() {
    let mut objects: Container<f32, u32> =
        Container::new(Rect::new(0.0, 0.0, 1000.0, 1000.0), 6).expect("valid extent");

    // A small grid of boxes, plus one straddling the centre.
    for i in 0..100_u32 {
        let x = (i % 10) as f32 * 100.0 + 10.0;
        let y = (i / 10) as f32 * 100.0 + 10.0;
        let _ = objects.insert(i, Rect::new(x, y, 20.0, 20.0));
    }
    let centre = objects.insert(1000, Rect::new(490.0, 490.0, 20.0, 20.0));

    let view = Rect::new(400.0, 400.0, 200.0, 200.0);
    let hits: Vec<_> = objects.search_values(&view).map(|(_, v)| *v).collect();
    println!("hits in {view:?}: {hits:?}");
    println!("tree: {:?}", objects.index().stats());

    objects.clear();
    println!("after clear, centre resolves to {:?}", objects.get(centre));
}
