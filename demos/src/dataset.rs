// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seeded random rectangle datasets.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_quadtree::{Container, Rect};

use crate::config::DemoConfig;

/// A coloured rectangle, the demo's payload type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Object2d {
    pub pos: (f64, f64),
    pub size: (f64, f64),
    pub colour: [u8; 3],
}

impl Object2d {
    pub fn bounds(&self) -> Rect<f64> {
        Rect::new(self.pos.0, self.pos.1, self.size.0, self.size.1)
    }
}

/// Generate `config.dataset.count` objects uniformly over the world.
pub fn generate(config: &DemoConfig) -> Vec<Object2d> {
    let d = &config.dataset;
    let area = config.world.area;
    let mut rng = StdRng::seed_from_u64(d.seed);
    (0..d.count)
        .map(|_| Object2d {
            pos: (rng.random_range(0.0..area), rng.random_range(0.0..area)),
            size: (
                rng.random_range(d.min_size..d.max_size),
                rng.random_range(d.min_size..d.max_size),
            ),
            colour: rng.random(),
        })
        .collect()
}

/// Bulk load `objects` into a container over the configured world.
pub fn load(config: &DemoConfig, objects: Vec<Object2d>) -> anyhow::Result<Container<f64, Object2d>> {
    let area = config.world.area;
    let mut container = Container::new(Rect::new(0.0, 0.0, area, area), config.index.max_depth)?;
    container.extend(objects.into_iter().map(|o| (o, o.bounds())));
    let stats = container.index().stats();
    info!(
        "Loaded {} objects into {} nodes (deepest level {})",
        container.len(),
        stats.nodes,
        stats.deepest
    );
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> DemoConfig {
        let mut config = DemoConfig::default();
        config.dataset.count = 500;
        config.world.area = 1000.0;
        config
    }

    #[test]
    fn same_seed_same_dataset() {
        let config = small();
        assert_eq!(generate(&config), generate(&config));
        let mut other = small();
        other.dataset.seed += 1;
        assert_ne!(generate(&config), generate(&other));
    }

    #[test]
    fn objects_respect_configured_ranges() {
        let config = small();
        for o in generate(&config) {
            assert!((0.0..1000.0).contains(&o.pos.0) && (0.0..1000.0).contains(&o.pos.1));
            assert!((0.1..100.0).contains(&o.size.0) && (0.1..100.0).contains(&o.size.1));
        }
    }

    #[test]
    fn load_keeps_every_object() {
        let config = small();
        let objects = generate(&config);
        let container = load(&config, objects.clone()).unwrap();
        assert_eq!(container.len(), objects.len());
        let stored: Vec<Object2d> = container.values().copied().collect();
        assert_eq!(stored, objects);
    }
}
