// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window example using container rectangle search.
//!
//! Run:
//! - `cargo run -p understory_demos --example visible_rows`

use understory_quadtree::{Container, Rect};

const ROW_H: f64 = 20.0;
const WIDTH: f64 = 200.0;

fn main() {
    let rows = 1000_usize;
    // Wide rows never fit a narrow quadrant, so they settle near the root.
    let extent = Rect::new(0.0, 0.0, WIDTH * 2.5, rows as f64 * ROW_H);
    let mut list: Container<f64, usize> = Container::new(extent, 10).expect("list extent has area");
    for i in 0..rows {
        let y0 = i as f64 * ROW_H;
        let _ = list.insert(i, Rect::new(0.0, y0, WIDTH, ROW_H));
    }
    println!("{:?}", list.index().stats());

    // Simulate a few scroll positions by changing the viewport rectangle
    for scroll in [0.0, 30.0, 200.0, 600.0] {
        let viewport = Rect::new(0.0, scroll, WIDTH, 100.0);
        let mut indices: Vec<usize> = list.search_values(&viewport).map(|(_, i)| *i).collect();
        indices.sort_unstable();
        println!("scroll={scroll:.1} -> visible indices: {:?}", indices);
    }
}
