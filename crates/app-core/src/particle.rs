//! The particle store element.

use glam::Vec2;

use crate::color::Rgba;

/// One simulated point.
///
/// `origin` is the fixed target offset from the viewport center, set once at
/// sampling time; `size`, `color` and `phase` are likewise immutable. Only
/// `pos` mutates, once per frame. `phase` is a per-particle angle in
/// [0, 2π) that decorrelates the ambient jitter so the field shimmers
/// instead of vibrating in lockstep.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub origin: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub phase: f32,
}

impl Particle {
    /// Spawn at the origin target; the easing step animates it from there.
    pub fn at_origin(origin: Vec2, size: f32, color: Rgba, phase: f32) -> Self {
        Self {
            pos: origin,
            origin,
            size,
            color,
            phase,
        }
    }
}
