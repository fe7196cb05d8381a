// Host-side tests for color-grouped draw batches.

use app_core::sampler::sample_heart;
use app_core::{batch_by_color, Particle, Rgba};
use glam::Vec2;
use rand::prelude::*;

fn particle(color: Rgba) -> Particle {
    Particle::at_origin(Vec2::ZERO, 1.0, color, 0.0)
}

#[test]
fn batches_partition_the_store() {
    let red = Rgba::rgb(255, 0, 0);
    let white = Rgba::rgb(255, 255, 255);
    let pink = Rgba::rgb(255, 153, 204);
    let particles = vec![
        particle(red),
        particle(white),
        particle(red),
        particle(pink),
        particle(red),
    ];

    let batches = batch_by_color(&particles);
    let mut seen = vec![false; particles.len()];
    for batch in &batches {
        for &i in &batch.indices {
            assert!(!seen[i], "index {i} appeared in two batches");
            seen[i] = true;
            assert_eq!(particles[i].color, batch.color);
        }
    }
    assert!(seen.into_iter().all(|s| s), "some particle was unbatched");
}

#[test]
fn batches_keep_first_seen_color_order() {
    let a = Rgba::rgb(1, 0, 0);
    let b = Rgba::rgb(0, 1, 0);
    let c = Rgba::rgb(0, 0, 1);
    let particles = vec![particle(a), particle(b), particle(a), particle(c)];

    let batches = batch_by_color(&particles);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].color, a);
    assert_eq!(batches[1].color, b);
    assert_eq!(batches[2].color, c);
    assert_eq!(batches[0].indices, vec![0, 2]);
}

#[test]
fn heart_store_batches_no_wider_than_the_palette() {
    let palette = vec![
        Rgba::rgb(139, 0, 0),
        Rgba::rgb(255, 0, 0),
        Rgba::rgb(255, 153, 204),
        Rgba::rgb(234, 76, 137),
        Rgba::rgb(255, 255, 255),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    let particles = sample_heart(1024.0, 768.0, &palette, &mut rng).unwrap();

    let batches = batch_by_color(&particles);
    assert!(!batches.is_empty());
    assert!(batches.len() <= palette.len());
    let total: usize = batches.iter().map(|b| b.indices.len()).sum();
    assert_eq!(total, particles.len());
}

#[test]
fn empty_store_produces_no_batches() {
    assert!(batch_by_color(&[]).is_empty());
}
