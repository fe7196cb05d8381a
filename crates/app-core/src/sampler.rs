//! Shape sampling: turns a shape request into a set of particle origins.
//!
//! Heart mode is generated directly from the parametric curve. Text and
//! image modes scan an RGBA bitmap the frontend rasterized offscreen; the
//! scanning, thresholds and downsampling all live here so they can be tested
//! natively. Samplers are pure over their inputs apart from the RNG draws.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use thiserror::Error;

use crate::color::Rgba;
use crate::constants::*;
use crate::particle::Particle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// Nothing in the bitmap cleared the alpha threshold; callers degrade to
    /// heart mode rather than showing an empty field.
    #[error("no pixels above the alpha threshold")]
    NoVisiblePixels,
    #[error("palette is empty")]
    EmptyPalette,
}

/// Coarse device class; fewer points below the width threshold protects
/// frame rate on constrained devices.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceClass {
    Compact,
    Full,
}

impl DeviceClass {
    pub fn from_width(viewport_width: f32) -> Self {
        if viewport_width < COMPACT_WIDTH_PX {
            Self::Compact
        } else {
            Self::Full
        }
    }
}

/// Position on the heart curve for parameter `t`, unscaled:
/// `x = 16 sin³ t`, `y = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)`.
pub fn heart_point(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos()
        - 5.0 * (2.0 * t).cos()
        - 2.0 * (3.0 * t).cos()
        - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Curve scale for a viewport.
pub fn heart_scale(width: f32, height: f32) -> f32 {
    let divisor = match DeviceClass::from_width(width) {
        DeviceClass::Compact => HEART_DIVISOR_COMPACT,
        DeviceClass::Full => HEART_DIVISOR_FULL,
    };
    width.min(height) / divisor
}

/// Sample the heart curve into exactly the device-class particle count.
///
/// The radial jitter draws from two ranges, a tight one around the outline
/// most of the time and a wide interior one otherwise, which gives the shape
/// a dense rim and a soft sparse fill.
pub fn sample_heart(
    width: f32,
    height: f32,
    palette: &[Rgba],
    rng: &mut impl Rng,
) -> Result<Vec<Particle>, SampleError> {
    if palette.is_empty() {
        return Err(SampleError::EmptyPalette);
    }
    let device = DeviceClass::from_width(width);
    let (count, size_max) = match device {
        DeviceClass::Compact => (HEART_COUNT_COMPACT, HEART_SIZE_MAX_COMPACT),
        DeviceClass::Full => (HEART_COUNT_FULL, HEART_SIZE_MAX_FULL),
    };
    let scale = heart_scale(width, height);

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let t = rng.gen_range(0.0..TAU);
        let jitter = if rng.gen_bool(RIM_BIAS_PROBABILITY) {
            rng.gen_range(RIM_JITTER_MIN..RIM_JITTER_MAX)
        } else {
            rng.gen_range(FILL_JITTER_MIN..FILL_JITTER_MAX)
        };
        let origin = heart_point(t) * scale * jitter;
        let color = palette[rng.gen_range(0..palette.len())];
        let size = rng.gen_range(PARTICLE_SIZE_MIN..size_max);
        particles.push(Particle::at_origin(origin, size, color, rng.gen_range(0.0..TAU)));
    }
    log::info!(
        "[sampler] heart: {} particles at scale {:.1}",
        particles.len(),
        scale
    );
    Ok(particles)
}

/// RGBA8 pixel buffer handed over by the frontend rasterizer.
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }
}

/// How scanned pixels pick their display color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorPolicy {
    /// Every visible pixel takes a palette color (text silhouettes).
    Palette,
    /// Bright pixels take a palette color so highlights stay vivid; darker
    /// pixels keep their sampled color so the image stays recognizable.
    KeepDark,
}

#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    pub stride: u32,
    pub alpha_min: u8,
    pub policy: ColorPolicy,
    pub cap: usize,
    pub size_max: f32,
}

impl ScanOptions {
    pub fn text(device: DeviceClass) -> Self {
        let (stride, cap, size_max) = match device {
            DeviceClass::Compact => (SCAN_STRIDE_COMPACT, TEXT_CAP_COMPACT, SCAN_SIZE_MAX_COMPACT),
            DeviceClass::Full => (SCAN_STRIDE_FULL, TEXT_CAP_FULL, SCAN_SIZE_MAX_FULL),
        };
        Self {
            stride,
            alpha_min: TEXT_ALPHA_MIN,
            policy: ColorPolicy::Palette,
            cap,
            size_max,
        }
    }

    pub fn image(device: DeviceClass) -> Self {
        let (stride, cap, size_max) = match device {
            DeviceClass::Compact => (SCAN_STRIDE_COMPACT, IMAGE_CAP_COMPACT, SCAN_SIZE_MAX_COMPACT),
            DeviceClass::Full => (SCAN_STRIDE_FULL, IMAGE_CAP_FULL, SCAN_SIZE_MAX_FULL),
        };
        Self {
            stride,
            alpha_min: IMAGE_ALPHA_MIN,
            policy: ColorPolicy::KeepDark,
            cap,
            size_max,
        }
    }
}

/// Scan a bitmap on a fixed stride and emit one particle per pixel whose
/// alpha clears the threshold.
///
/// `top_left` is the offset of the bitmap's (0,0) pixel from the viewport
/// center, so emitted origins are already center-relative. When the visible
/// count exceeds the cap, the result is decimated by even striding, never by
/// random discard, to keep the silhouette intact.
pub fn scan_bitmap(
    bitmap: &Bitmap,
    top_left: Vec2,
    opts: ScanOptions,
    palette: &[Rgba],
    rng: &mut impl Rng,
) -> Result<Vec<Particle>, SampleError> {
    if palette.is_empty() {
        return Err(SampleError::EmptyPalette);
    }
    let stride = opts.stride.max(1);
    let mut particles = Vec::new();

    let mut y = 0;
    while y < bitmap.height {
        let mut x = 0;
        while x < bitmap.width {
            let px = bitmap.pixel(x, y);
            if px.a > opts.alpha_min {
                let color = match opts.policy {
                    ColorPolicy::Palette => palette[rng.gen_range(0..palette.len())],
                    ColorPolicy::KeepDark => {
                        if px.luma() > LUMA_BRIGHT_MIN {
                            palette[rng.gen_range(0..palette.len())]
                        } else {
                            Rgba::rgb(px.r, px.g, px.b)
                        }
                    }
                };
                let origin = top_left + Vec2::new(x as f32, y as f32);
                let size = rng.gen_range(PARTICLE_SIZE_MIN..opts.size_max);
                particles.push(Particle::at_origin(origin, size, color, rng.gen_range(0.0..TAU)));
            }
            x += stride;
        }
        y += stride;
    }

    if particles.is_empty() {
        return Err(SampleError::NoVisiblePixels);
    }
    let visible = particles.len();
    let particles = decimate(particles, opts.cap);
    log::info!(
        "[sampler] bitmap scan: {} visible, {} kept",
        visible,
        particles.len()
    );
    Ok(particles)
}

/// Even-stride downsample to `cap`, preserving order and coverage.
pub fn decimate(particles: Vec<Particle>, cap: usize) -> Vec<Particle> {
    if cap == 0 || particles.len() <= cap {
        return particles;
    }
    let step = particles.len() as f32 / cap as f32;
    (0..cap)
        .map(|i| particles[(i as f32 * step) as usize].clone())
        .collect()
}

/// Requested text normalized for rasterization: trimmed, clamped to the
/// maximum length, defaulting when effectively empty.
pub fn effective_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        trimmed.chars().take(TEXT_MAX_CHARS).collect()
    }
}

/// Largest font size that fits the per-character width budget, capped by the
/// device class.
pub fn text_font_px(text: &str, viewport_width: f32) -> f32 {
    let cap = match DeviceClass::from_width(viewport_width) {
        DeviceClass::Compact => TEXT_FONT_MAX_COMPACT,
        DeviceClass::Full => TEXT_FONT_MAX_FULL,
    };
    let chars = text.chars().count().max(1) as f32;
    (viewport_width / (chars * TEXT_WIDTH_FACTOR)).min(cap)
}

/// Scaled dimensions for an image occupying the fit fraction of the smaller
/// viewport dimension, aspect ratio preserved.
pub fn image_fit(img_w: f32, img_h: f32, viewport_w: f32, viewport_h: f32) -> (f32, f32) {
    if img_w <= 0.0 || img_h <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = ((viewport_w * IMAGE_FIT_FRACTION) / img_w)
        .min((viewport_h * IMAGE_FIT_FRACTION) / img_h);
    (img_w * scale, img_h * scale)
}
