/// Simulation and sampling tuning constants shared between the core and the
/// web frontend.
///
/// These express intended behavior (pulse shape, interaction reach, device
/// budgets) and keep magic numbers out of the code.
// Simulation clock: fixed per-frame increment, not wall time. The pulse is
// frame-rate-coupled on purpose; see the simulation module docs.
pub const CLOCK_STEP: f32 = 0.04;

// Pulse shape
pub const BEAT_AMPLITUDE: f32 = 0.15;
pub const BEAT_SHARPNESS: i32 = 50; // high even power -> narrow spike on a flat baseline
pub const BREATH_AMPLITUDE: f32 = 0.05;
pub const BREATH_RATE: f32 = 2.0;

// Pointer interaction
pub const FORCE_RAMP: f32 = 0.1; // first-order low-pass coefficient per frame
pub const FORCE_EPSILON: f32 = 0.01; // below this the repulsion pass is skipped
pub const INTERACTION_RADIUS: f32 = 180.0; // css px
pub const PUSH_SCALE: f32 = 150.0;

// Motion
pub const EASING: f32 = 0.15; // exponential approach toward the target per frame
pub const JITTER_RATE: f32 = 3.0; // ambient oscillation frequency vs the clock
pub const JITTER_AMPLITUDE: f32 = 1.5; // css px

// Device classes
pub const COMPACT_WIDTH_PX: f32 = 768.0;

// Heart sampling
pub const HEART_COUNT_COMPACT: usize = 800;
pub const HEART_COUNT_FULL: usize = 2000;
pub const HEART_DIVISOR_COMPACT: f32 = 35.0; // curve drawn relatively larger on phones
pub const HEART_DIVISOR_FULL: f32 = 45.0;
pub const RIM_BIAS_PROBABILITY: f64 = 0.6;
pub const RIM_JITTER_MIN: f32 = 0.9;
pub const RIM_JITTER_MAX: f32 = 1.1;
pub const FILL_JITTER_MIN: f32 = 0.6;
pub const FILL_JITTER_MAX: f32 = 1.2;
pub const HEART_SIZE_MAX_COMPACT: f32 = 2.0;
pub const HEART_SIZE_MAX_FULL: f32 = 3.0;

// Bitmap scanning
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const SCAN_STRIDE_COMPACT: u32 = 4;
pub const SCAN_STRIDE_FULL: u32 = 3;
pub const TEXT_ALPHA_MIN: u8 = 128;
pub const IMAGE_ALPHA_MIN: u8 = 50; // photos have more translucent edges than glyphs
pub const LUMA_BRIGHT_MIN: u8 = 200;
pub const TEXT_CAP_COMPACT: usize = 1500;
pub const TEXT_CAP_FULL: usize = 3000;
pub const IMAGE_CAP_COMPACT: usize = 2000;
pub const IMAGE_CAP_FULL: usize = 4000;
pub const SCAN_SIZE_MAX_COMPACT: f32 = 2.0;
pub const SCAN_SIZE_MAX_FULL: f32 = 2.5;

// Text layout
pub const DEFAULT_TEXT: &str = "LOVE";
pub const TEXT_MAX_CHARS: usize = 10;
pub const TEXT_WIDTH_FACTOR: f32 = 0.6; // width budget per character
pub const TEXT_FONT_MAX_COMPACT: f32 = 120.0;
pub const TEXT_FONT_MAX_FULL: f32 = 200.0;

// Image layout
pub const IMAGE_FIT_FRACTION: f32 = 0.7; // of the smaller viewport dimension

// Rendering
pub const TRAIL_ALPHA: f32 = 0.1; // background repaint opacity; lower leaves longer trails

// Reshape
pub const RESIZE_DEBOUNCE_MS: u64 = 150;
