// Sanity checks over the tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod web_constants {
    include!("../src/constants.rs");
}

use core_constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_range_is_ordered() {
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < MAX_ZOOM);
    assert!(ZOOM_INTENSITY > 0.0);
    assert!(!ZOOM_DURATION.is_zero());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_sane() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(CAMERA_START_Z < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_is_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_MAX_SPEED > 0.0 && PARTICLE_MAX_SPEED < PARTICLE_BOUND);
    assert!(BURST_EXTENT <= PARTICLE_BOUND);
    assert!(BURST_CUBE_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_encloses_panel() {
    assert!(OUTLINE_SCALE > 1.0);
    assert!(PANEL_WIDTH > 0.0 && PANEL_HEIGHT > 0.0);
    assert!(SPHERE_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colours_fit_in_24_bits() {
    for c in [
        BACKGROUND_COLOR,
        SPHERE_COLOR,
        OUTLINE_COLOR,
        BAMBOO_COLOR,
        CUBE_COLOR,
        PANEL_TINT,
    ] {
        assert!(c <= 0xFF_FF_FF);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ua_markers_are_lowercase() {
    for m in MOBILE_UA_MARKERS {
        assert_eq!(m, m.to_ascii_lowercase());
    }
    assert!(!CANVAS_ID.is_empty() && !START_BUTTON_ID.is_empty());
}
