// Host-side tests for shape sampling: curve law, device budgets, bitmap
// scanning thresholds and downsampling.

use std::f32::consts::TAU;

use app_core::sampler::*;
use app_core::{constants::*, Rgba};
use glam::Vec2;
use rand::prelude::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn palette() -> Vec<Rgba> {
    vec![
        Rgba::rgb(139, 0, 0),
        Rgba::rgb(255, 0, 0),
        Rgba::rgb(255, 153, 204),
        Rgba::rgb(255, 255, 255),
    ]
}

#[test]
fn heart_point_matches_parametric_equations() {
    for k in 0..2048 {
        let t = k as f32 / 2048.0 * TAU;
        let p = heart_point(t);
        let x = 16.0 * t.sin().powi(3);
        let y = -(13.0 * t.cos()
            - 5.0 * (2.0 * t).cos()
            - 2.0 * (3.0 * t).cos()
            - (4.0 * t).cos());
        assert!((p.x - x).abs() < 1e-4, "x mismatch at t={t}");
        assert!((p.y - y).abs() < 1e-4, "y mismatch at t={t}");
    }
}

#[test]
fn heart_count_is_exact_per_device_class() {
    let particles = sample_heart(1024.0, 768.0, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), HEART_COUNT_FULL);

    let particles = sample_heart(500.0, 700.0, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), HEART_COUNT_COMPACT);
}

#[test]
fn heart_origins_stay_inside_the_jittered_bounding_box() {
    let (w, h) = (1024.0, 768.0);
    let scale = heart_scale(w, h);
    let particles = sample_heart(w, h, &palette(), &mut rng()).unwrap();
    // Curve extrema: |x| <= 16, |y| <= 17; radial jitter tops out at 1.2.
    let x_bound = 16.0 * FILL_JITTER_MAX * scale + 1e-3;
    let y_bound = 17.0 * FILL_JITTER_MAX * scale + 1e-3;
    for p in &particles {
        assert!(p.origin.x.abs() <= x_bound, "origin x {} out of bounds", p.origin.x);
        assert!(p.origin.y.abs() <= y_bound, "origin y {} out of bounds", p.origin.y);
        // Spawn position equals origin.
        assert_eq!(p.pos, p.origin);
    }
}

#[test]
fn heart_uses_only_palette_colors() {
    let colors = palette();
    let particles = sample_heart(1024.0, 768.0, &colors, &mut rng()).unwrap();
    for p in &particles {
        assert!(colors.contains(&p.color));
    }
}

#[test]
fn heart_rejects_empty_palette() {
    let err = sample_heart(1024.0, 768.0, &[], &mut rng()).unwrap_err();
    assert_eq!(err, SampleError::EmptyPalette);
}

#[test]
fn heart_scale_is_larger_relative_to_compact_viewports() {
    // Same min dimension, but the compact divisor draws the curve bigger.
    assert!(heart_scale(500.0, 700.0) > 500.0 / HEART_DIVISOR_FULL);
    assert!((heart_scale(1024.0, 768.0) - 768.0 / HEART_DIVISOR_FULL).abs() < 1e-5);
}

#[test]
fn device_class_splits_at_the_width_threshold() {
    assert_eq!(DeviceClass::from_width(320.0), DeviceClass::Compact);
    assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Compact);
    assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Full);
    assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Full);
}

// ---------------- bitmap scanning ----------------

fn blank_bitmap(w: u32, h: u32) -> Bitmap {
    Bitmap::new(w, h, vec![0u8; (w * h * 4) as usize])
}

fn put_pixel(bitmap: &mut Bitmap, x: u32, y: u32, rgba: [u8; 4]) {
    let i = ((y * bitmap.width + x) * 4) as usize;
    bitmap.data[i..i + 4].copy_from_slice(&rgba);
}

fn fill_rect(bitmap: &mut Bitmap, x0: u32, y0: u32, x1: u32, y1: u32, rgba: [u8; 4]) {
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(bitmap, x, y, rgba);
        }
    }
}

fn scan_opts(stride: u32, alpha_min: u8, policy: ColorPolicy) -> ScanOptions {
    ScanOptions {
        stride,
        alpha_min,
        policy,
        cap: usize::MAX,
        size_max: 2.5,
    }
}

#[test]
fn scan_emits_one_particle_per_visible_strided_pixel() {
    let mut bitmap = blank_bitmap(32, 32);
    fill_rect(&mut bitmap, 0, 0, 10, 10, [255, 255, 255, 255]);
    let opts = scan_opts(1, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    let particles = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), 100);

    let opts = scan_opts(2, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    let particles = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), 25);
}

#[test]
fn scan_origins_are_center_relative() {
    let mut bitmap = blank_bitmap(16, 16);
    put_pixel(&mut bitmap, 4, 6, [255, 255, 255, 255]);
    let top_left = Vec2::new(-8.0, -8.0);
    let opts = scan_opts(1, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    let particles = scan_bitmap(&bitmap, top_left, opts, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), 1);
    assert_eq!(particles[0].origin, Vec2::new(-4.0, -2.0));
}

#[test]
fn scan_respects_the_alpha_threshold() {
    let mut bitmap = blank_bitmap(8, 8);
    put_pixel(&mut bitmap, 2, 2, [255, 255, 255, 100]);

    // Text threshold (128) rejects the translucent pixel entirely.
    let opts = scan_opts(1, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    let err = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap_err();
    assert_eq!(err, SampleError::NoVisiblePixels);

    // Image threshold (50) keeps it.
    let opts = scan_opts(1, IMAGE_ALPHA_MIN, ColorPolicy::Palette);
    let particles = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), 1);
}

#[test]
fn fully_transparent_bitmap_reports_no_visible_pixels() {
    let bitmap = blank_bitmap(64, 64);
    let opts = scan_opts(1, IMAGE_ALPHA_MIN, ColorPolicy::KeepDark);
    let err = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap_err();
    assert_eq!(err, SampleError::NoVisiblePixels);
}

#[test]
fn keep_dark_policy_splits_on_luma() {
    let mut bitmap = blank_bitmap(8, 8);
    put_pixel(&mut bitmap, 0, 0, [255, 255, 255, 255]); // bright highlight
    put_pixel(&mut bitmap, 2, 0, [80, 0, 0, 255]); // dark native color
    let green = [Rgba::rgb(0, 255, 0)];
    let opts = scan_opts(2, IMAGE_ALPHA_MIN, ColorPolicy::KeepDark);
    let particles = scan_bitmap(&bitmap, Vec2::ZERO, opts, &green, &mut rng()).unwrap();
    assert_eq!(particles.len(), 2);
    // Row-major scan order: bright pixel first.
    assert_eq!(particles[0].color, Rgba::rgb(0, 255, 0));
    assert_eq!(particles[1].color, Rgba::rgb(80, 0, 0));
}

#[test]
fn scan_caps_by_even_striding() {
    let mut bitmap = blank_bitmap(40, 40);
    fill_rect(&mut bitmap, 0, 0, 40, 40, [255, 255, 255, 255]);
    let mut opts = scan_opts(1, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    opts.cap = 100;
    let particles = scan_bitmap(&bitmap, Vec2::ZERO, opts, &palette(), &mut rng()).unwrap();
    assert_eq!(particles.len(), 100);
}

#[test]
fn decimate_preserves_order_and_coverage() {
    let colors = palette();
    let particles: Vec<_> = (0..100)
        .map(|i| {
            app_core::Particle::at_origin(Vec2::new(i as f32, 0.0), 1.0, colors[0], 0.0)
        })
        .collect();
    let kept = decimate(particles, 10);
    assert_eq!(kept.len(), 10);
    assert_eq!(kept[0].origin.x, 0.0);
    for pair in kept.windows(2) {
        assert!(pair[0].origin.x < pair[1].origin.x, "order not preserved");
    }
    // Even striding reaches the tail of the list, not just its head.
    assert!(kept[9].origin.x >= 90.0);
}

#[test]
fn decimate_is_identity_under_the_cap() {
    let particles = vec![app_core::Particle::at_origin(
        Vec2::ZERO,
        1.0,
        Rgba::rgb(1, 2, 3),
        0.0,
    )];
    assert_eq!(decimate(particles, 10).len(), 1);
}

#[test]
fn glyph_like_silhouette_is_approximated() {
    // Block letters "HI": two bars plus a crossbar, then a separate bar.
    let mut bitmap = blank_bitmap(48, 40);
    fill_rect(&mut bitmap, 10, 10, 14, 30, [255, 255, 255, 255]);
    fill_rect(&mut bitmap, 22, 10, 26, 30, [255, 255, 255, 255]);
    fill_rect(&mut bitmap, 14, 18, 22, 22, [255, 255, 255, 255]);
    fill_rect(&mut bitmap, 34, 10, 38, 30, [255, 255, 255, 255]);

    let top_left = Vec2::new(-24.0, -20.0);
    let opts = scan_opts(2, TEXT_ALPHA_MIN, ColorPolicy::Palette);
    let particles = scan_bitmap(&bitmap, top_left, opts, &palette(), &mut rng()).unwrap();
    assert!(!particles.is_empty());

    // Every origin sits on an inked pixel region, and both letters appear.
    let has_left_bar = particles.iter().any(|p| p.origin.x < top_left.x + 15.0);
    let has_i_bar = particles.iter().any(|p| p.origin.x > top_left.x + 33.0);
    assert!(has_left_bar && has_i_bar, "silhouette lost a letter");
    for p in &particles {
        assert!(p.origin.y >= top_left.y + 10.0 && p.origin.y < top_left.y + 30.0);
    }
}

// ---------------- text normalization and layout ----------------

#[test]
fn empty_text_defaults_to_love() {
    assert_eq!(effective_text(""), DEFAULT_TEXT);
    assert_eq!(effective_text("   "), DEFAULT_TEXT);
}

#[test]
fn text_is_trimmed_and_clamped() {
    assert_eq!(effective_text("  HI  "), "HI");
    assert_eq!(effective_text("ABCDEFGHIJKLMNOP"), "ABCDEFGHIJ");
    assert_eq!(effective_text("ABCDEFGHIJ").chars().count(), TEXT_MAX_CHARS);
}

#[test]
fn font_size_honours_the_width_budget_and_device_cap() {
    // Short text on a full viewport hits the device cap.
    assert!((text_font_px("HI", 1024.0) - TEXT_FONT_MAX_FULL).abs() < 1e-3);
    // Compact cap is lower.
    assert!((text_font_px("HI", 500.0) - TEXT_FONT_MAX_COMPACT).abs() < 1e-3);
    // Long text falls below the cap: width / (len * 0.6).
    let expected = 1024.0 / (10.0 * TEXT_WIDTH_FACTOR);
    assert!((text_font_px("ABCDEFGHIJ", 1024.0) - expected).abs() < 1e-3);
}

#[test]
fn image_fit_preserves_aspect_ratio_at_seventy_percent() {
    let (w, h) = image_fit(400.0, 200.0, 1000.0, 1000.0);
    assert!((w / h - 2.0).abs() < 1e-4);
    assert!((w - 700.0).abs() < 1e-3);

    // Degenerate sources scale to nothing instead of dividing by zero.
    assert_eq!(image_fit(0.0, 100.0, 1000.0, 1000.0), (0.0, 0.0));
}
