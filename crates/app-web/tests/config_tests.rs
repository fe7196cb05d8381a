// Host-side tests for the scene configuration cell.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
fn display_mode_from_str_parsing() {
    assert_eq!(DisplayMode::from_str("heart"), Some(DisplayMode::Heart));
    assert_eq!(DisplayMode::from_str("HEART"), Some(DisplayMode::Heart));
    assert_eq!(DisplayMode::from_str("text"), Some(DisplayMode::Text));
    assert_eq!(DisplayMode::from_str("image"), Some(DisplayMode::Image));
    assert_eq!(DisplayMode::from_str("hologram"), None);
    assert_eq!(DisplayMode::from_str(""), None);
}

#[test]
fn display_mode_names_round_trip() {
    for mode in [DisplayMode::Heart, DisplayMode::Text, DisplayMode::Image] {
        assert_eq!(DisplayMode::from_str(mode.name()), Some(mode));
    }
}

#[test]
fn default_config_is_heart_with_the_default_theme() {
    let cell = ConfigCell::default();
    assert_eq!(cell.config().mode, DisplayMode::Heart);
    assert_eq!(cell.config().theme_id, "love");
    assert!(cell.config().text.is_empty());
    assert!(cell.config().image_url.is_none());
}

#[test]
fn a_change_requests_exactly_one_resample() {
    let mut cell = ConfigCell::default();
    assert!(!cell.take_dirty(), "fresh cell must not be dirty");

    cell.set_mode(DisplayMode::Text);
    assert!(cell.take_dirty());
    assert!(!cell.take_dirty(), "dirty flag must be consumed");
}

#[test]
fn a_burst_of_changes_coalesces_into_one_resample() {
    let mut cell = ConfigCell::default();
    cell.set_mode(DisplayMode::Text);
    cell.set_text("HI");
    cell.set_theme_id("ocean");
    assert!(cell.take_dirty());
    assert!(!cell.take_dirty());
    assert_eq!(cell.config().mode, DisplayMode::Text);
    assert_eq!(cell.config().text, "HI");
    assert_eq!(cell.config().theme_id, "ocean");
}

#[test]
fn equal_assignments_are_not_changes() {
    let mut cell = ConfigCell::default();
    cell.set_mode(DisplayMode::Heart);
    cell.set_theme_id("love");
    cell.set_text("");
    cell.set_image_url(None);
    assert!(!cell.take_dirty(), "no-op assignments must not resample");
}

#[test]
fn image_url_changes_are_tracked() {
    let mut cell = ConfigCell::default();
    cell.set_image_url(Some("blob:photo".to_string()));
    assert!(cell.take_dirty());
    cell.set_image_url(Some("blob:photo".to_string()));
    assert!(!cell.take_dirty());
    cell.set_image_url(None);
    assert!(cell.take_dirty());
}
