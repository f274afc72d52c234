// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static quadtree demo.
//!
//! Generates a large random set of rectangles, then flies a camera over them and
//! reports how long it takes to find the visible ones, by linear scan or through
//! the quadtree.
//!
//! Run:
//! - `cargo run --release -p understory_demos -- --mode alternate --count 1000000`
//! - `RUST_LOG=debug cargo run -p understory_demos -- --config demo.toml`

use std::path::PathBuf;

use clap::Parser;
use log::info;

mod camera;
mod config;
mod dataset;
mod frame;

use config::DemoConfig;
use frame::Mode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file; defaults are used if it does not exist.
    #[arg(short, long, default_value = "demo.toml")]
    config: PathBuf,

    /// Query strategy, overriding `run.mode`.
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Number of rectangles, overriding `dataset.count`.
    #[arg(long)]
    count: Option<usize>,

    /// Number of frames, overriding `run.frames`.
    #[arg(long)]
    frames: Option<usize>,

    /// Quadtree depth, overriding `index.max_depth`.
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = DemoConfig::load(&args.config)?;
    if let Some(mode) = args.mode {
        config.run.mode = mode;
    }
    if let Some(count) = args.count {
        config.dataset.count = count;
    }
    if let Some(frames) = args.frames {
        config.run.frames = frames;
    }
    if let Some(max_depth) = args.max_depth {
        config.index.max_depth = max_depth;
    }
    config.validate()?;

    info!("Static quadtree demo v{}", env!("CARGO_PKG_VERSION"));
    info!("  World: {0}x{0}", config.world.area);
    info!("  Objects: {}", config.dataset.count);
    info!("  Max depth: {}", config.index.max_depth);
    info!("  Mode: {:?}", config.run.mode);

    let objects = dataset::load(&config, dataset::generate(&config))?;
    let summary = frame::run(&config, &objects);

    for (label, totals) in [("Linear", summary.linear), ("Quadtree", summary.quadtree)] {
        if let Some(mean) = totals.mean() {
            info!(
                "{label}: {} frames, mean {:.6}s, {} objects drawn",
                totals.frames,
                mean.as_secs_f64(),
                totals.visible
            );
        }
    }
    Ok(())
}
