//! Core simulation logic for pulsa: shape sampling, per-frame particle
//! physics, color-batched drawing lists and reshape debouncing.
//!
//! Everything here is plain Rust with no platform APIs, so it runs on both
//! the web target and the native test suite.

pub mod batch;
pub mod color;
pub mod constants;
pub mod debounce;
pub mod particle;
pub mod sampler;
pub mod simulation;

pub use batch::*;
pub use color::*;
pub use debounce::*;
pub use particle::*;
pub use sampler::*;
pub use simulation::*;
