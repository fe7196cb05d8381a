//! Per-frame particle physics: beat-driven pulse, pointer repulsion,
//! ambient jitter and exponential easing toward the shape.
//!
//! The clock advances by a fixed increment per rendered frame rather than by
//! wall time, so the pulse tempo is frame-rate-coupled. That keeps every
//! frame deterministic for a given input sequence and is an accepted
//! trade-off for this kind of ornamental animation.

use glam::Vec2;

use crate::constants::*;
use crate::particle::Particle;

/// Smoothed pointer activation consumed by the simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer {
    pub pos: Vec2,
    /// Most recent raw device signal.
    pub active: bool,
    /// Interaction intensity in [0, 1]. Ramped toward `active` through a
    /// first-order low-pass filter, so engagement and release never pop
    /// visually the way a step function would.
    pub force: f32,
}

impl Pointer {
    /// One filter step: `force += (target - force) * ramp`.
    pub fn update_force(&mut self, ramp: f32) {
        let target = if self.active { 1.0 } else { 0.0 };
        self.force += (target - self.force) * ramp;
    }
}

/// Tuning knobs with defaults from `constants`; tests freeze the clock or
/// silence the jitter through these.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    pub clock_step: f32,
    pub easing: f32,
    pub interaction_radius: f32,
    pub push_scale: f32,
    pub force_ramp: f32,
    pub jitter_amplitude: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            clock_step: CLOCK_STEP,
            easing: EASING,
            interaction_radius: INTERACTION_RADIUS,
            push_scale: PUSH_SCALE,
            force_ramp: FORCE_RAMP,
            jitter_amplitude: JITTER_AMPLITUDE,
        }
    }
}

/// Owned per-frame state: the particle store, the clock accumulator and the
/// smoothed pointer. The frame loop owns one of these and threads it through
/// the step and the renderer; there are no ambient globals.
pub struct SimState {
    pub particles: Vec<Particle>,
    pub pointer: Pointer,
    pub params: SimParams,
    pub clock: f32,
    /// Viewport center in css px; the pulse scales the shape around it.
    pub center: Vec2,
}

impl SimState {
    pub fn new(center: Vec2) -> Self {
        Self {
            particles: Vec::new(),
            pointer: Pointer::default(),
            params: SimParams::default(),
            clock: 0.0,
            center,
        }
    }

    /// Replace the store wholesale after a reshape. Identity is not
    /// preserved; new particles spawn at their own origins.
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn pulse_scale(&self) -> f32 {
        pulse_scale(self.clock)
    }

    /// Advance one frame: clock, pulse, pointer force, then every particle.
    pub fn step(&mut self) {
        self.clock += self.params.clock_step;
        let scale = pulse_scale(self.clock);
        self.pointer.update_force(self.params.force_ramp);

        let radius = self.params.interaction_radius;
        let radius_sq = radius * radius;
        let repel = self.pointer.force > FORCE_EPSILON;
        let jitter_arg = JITTER_RATE * self.clock;

        for p in &mut self.particles {
            let mut target = self.center + p.origin * scale;

            if repel {
                // Squared-distance compare first; the common case is "far
                // away, no effect" and needs no square root.
                let d = target - self.pointer.pos;
                let dist_sq = d.length_squared();
                if dist_sq < radius_sq {
                    let dist = dist_sq.sqrt();
                    let angle = d.y.atan2(d.x);
                    let falloff = (radius - dist) / radius;
                    let push = falloff * self.params.push_scale * self.pointer.force;
                    target += Vec2::new(angle.cos(), angle.sin()) * push;
                }
            }

            let phase = jitter_arg + p.phase;
            target += Vec2::new(phase.sin(), phase.cos()) * self.params.jitter_amplitude;

            p.pos += (target - p.pos) * self.params.easing;
        }
    }
}

/// Frame-global scale multiplier: sharp systolic spike plus a smooth
/// secondary breathing wave.
pub fn pulse_scale(clock: f32) -> f32 {
    1.0 + beat(clock) + breath(clock)
}

/// Narrow once-per-cycle spike; the high even power flattens the baseline
/// between pulses.
pub fn beat(clock: f32) -> f32 {
    BEAT_AMPLITUDE * clock.sin().powi(BEAT_SHARPNESS)
}

/// Smooth modulation at twice the clock rate, layered under the beat.
pub fn breath(clock: f32) -> f32 {
    BREATH_AMPLITUDE * (clock * BREATH_RATE).sin()
}
