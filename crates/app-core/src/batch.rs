//! Color-grouped draw batches.
//!
//! Particle colors are fixed at sampling time, so the grouping is rebuilt
//! only when the store is replaced. Each frame the renderer walks the
//! indices into the live store and issues one fill per batch, which
//! amortizes fill-style changes across thousands of points.

use fnv::FnvHashMap;

use crate::color::Rgba;
use crate::particle::Particle;

pub struct ColorBatch {
    pub color: Rgba,
    pub indices: Vec<usize>,
}

/// Group particle indices by color in first-seen order.
pub fn batch_by_color(particles: &[Particle]) -> Vec<ColorBatch> {
    let mut batches: Vec<ColorBatch> = Vec::new();
    let mut slots: FnvHashMap<Rgba, usize> = FnvHashMap::default();
    for (i, p) in particles.iter().enumerate() {
        let slot = *slots.entry(p.color).or_insert_with(|| {
            batches.push(ColorBatch {
                color: p.color,
                indices: Vec::new(),
            });
            batches.len() - 1
        });
        batches[slot].indices.push(i);
    }
    batches
}
