// Host-side tests for scene composition and the CPU-side meshes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use particles::Boundary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::{SceneComposer, SceneParams};

fn build_default() -> SceneComposer {
    SceneComposer::build(SceneParams::default(), StdRng::seed_from_u64(42))
}

#[test]
fn default_scene_matches_page_layout() {
    let scene = build_default();
    assert_eq!(scene.sphere.radius, 5.0);
    assert_eq!(scene.sphere.segments, 32);
    assert_eq!(scene.sphere.rotation_y, 0.0);
    assert_eq!(scene.bamboo.len(), 1000);
    assert_eq!(scene.bamboo.boundary(), Boundary::Reflect(250.0));
    assert!(scene.panel.is_none());
    assert!(scene.burst.is_none());
    assert!(scene.is_running());
}

#[test]
fn sphere_spins_a_fixed_step_per_frame() {
    let mut scene = build_default();
    for _ in 0..3 {
        scene.advance_frame();
    }
    assert!((scene.sphere.rotation_y - 0.03).abs() < 1e-6);
}

#[test]
fn advance_frame_moves_bamboo() {
    let mut scene = build_default();
    let before = scene.bamboo.positions().to_vec();
    scene.advance_frame();
    assert_ne!(scene.bamboo.positions(), before.as_slice());
}

#[test]
fn burst_spawns_once() {
    let mut scene = build_default();
    assert!(scene.start_burst());
    let first = scene.burst.as_ref().map(|b| b.positions().to_vec());
    assert!(!scene.start_burst());
    let second = scene.burst.as_ref().map(|b| b.positions().to_vec());
    assert_eq!(first, second);

    let burst = scene.burst.as_ref().unwrap();
    assert_eq!(burst.len(), 100);
    assert_eq!(burst.boundary(), Boundary::Unbounded);
    for p in burst.positions() {
        assert!(p.abs().max_element() <= 200.0);
    }
}

#[test]
fn burst_drifts_with_frames() {
    let mut scene = build_default();
    scene.start_burst();
    let before = scene.burst.as_ref().unwrap().positions().to_vec();
    let vel = scene.burst.as_ref().unwrap().velocities().to_vec();
    scene.advance_frame();
    let after = scene.burst.as_ref().unwrap().positions();
    for i in 0..after.len() {
        assert!((after[i] - (before[i] + vel[i])).length() < 1e-4);
    }
}

#[test]
fn image_panel_attaches_once_with_defaults() {
    let mut scene = build_default();
    scene.attach_image_panel();
    let panel = scene.panel.clone().unwrap();
    assert_eq!((panel.width, panel.height), (5.0, 3.0));
    assert_eq!(panel.z, -1.0);
    assert!((panel.outline_scale - 1.1).abs() < 1e-6);

    scene.panel.as_mut().unwrap().z = -2.0;
    scene.attach_image_panel();
    assert_eq!(scene.panel.as_ref().unwrap().z, -2.0);
}

#[test]
fn stopped_scene_is_frozen() {
    let mut scene = build_default();
    scene.start_burst();
    scene.advance_frame();
    scene.stop();
    assert!(!scene.is_running());

    let spin = scene.sphere.rotation_y;
    let bamboo = scene.bamboo.positions().to_vec();
    scene.advance_frame();
    assert_eq!(scene.sphere.rotation_y, spin);
    assert_eq!(scene.bamboo.positions(), bamboo.as_slice());
}

#[test]
fn static_params_build_a_still_cloud() {
    let params = SceneParams {
        static_particles: true,
        particle_count: 50,
        ..SceneParams::default()
    };
    let mut scene = SceneComposer::build(params, StdRng::seed_from_u64(1));
    assert!(scene.bamboo.is_static());
    let before = scene.bamboo.positions().to_vec();
    scene.advance_frame();
    assert_eq!(scene.bamboo.positions(), before.as_slice());
    // the sphere keeps spinning
    assert!(scene.sphere.rotation_y > 0.0);
}

#[test]
fn sphere_wireframe_edge_count_and_radius() {
    let verts = geometry::sphere_wireframe(5.0, 32, 32);
    // 32 meridians * 32 rows, 31 latitude rings, 30 diagonal rows
    assert_eq!(verts.len(), 2 * (32 * 32 + 32 * 31 + 32 * 30));
    assert_eq!(verts.len(), 5952);
    for v in &verts {
        let [x, y, z] = v.position;
        let r = (x * x + y * y + z * z).sqrt();
        assert!((r - 5.0).abs() < 1e-4, "vertex off sphere: {r}");
    }
}

#[test]
fn plane_quad_spans_requested_size() {
    let verts = geometry::plane_quad(5.0, 3.0);
    assert_eq!(verts.len(), 6);
    for v in &verts {
        assert_eq!(v.position[0].abs(), 2.5);
        assert_eq!(v.position[1].abs(), 1.5);
        assert_eq!(v.position[2], 0.0);
    }
}

#[test]
fn cube_is_closed_and_centred() {
    let verts = geometry::cube_triangles(5.0);
    assert_eq!(verts.len(), 36);
    for v in &verts {
        for c in v.position {
            assert_eq!(c.abs(), 2.5);
        }
    }
    // every triangle faces away from the centre
    for tri in verts.chunks(3) {
        let a = glam::Vec3::from(tri[0].position);
        let b = glam::Vec3::from(tri[1].position);
        let c = glam::Vec3::from(tri[2].position);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0);
    }
}

#[test]
fn hex_colours_convert_to_linear() {
    assert_eq!(geometry::hex_to_linear_rgba(0x000000), [0.0, 0.0, 0.0, 1.0]);
    let white = geometry::hex_to_linear_rgba(0xFFFFFF);
    for c in &white[..3] {
        assert!((c - 1.0).abs() < 1e-6);
    }
    let green = geometry::hex_to_linear_rgba(0x00FF00);
    assert_eq!(green[0], 0.0);
    assert!((green[1] - 1.0).abs() < 1e-6);
    // mid grey is darker in linear space
    assert!(geometry::srgb_to_linear(0.5) < 0.25);
}

#[test]
fn resumed_scene_advances_again() {
    let mut scene = build_default();
    scene.start_burst();
    scene.stop();
    scene.advance_frame();
    assert_eq!(scene.sphere.rotation_y, 0.0);

    scene.resume();
    assert!(scene.is_running());
    let bamboo = scene.bamboo.positions().to_vec();
    scene.advance_frame();
    assert!((scene.sphere.rotation_y - 0.01).abs() < 1e-6);
    assert_ne!(scene.bamboo.positions(), bamboo.as_slice());
    // the burst survives a stop/resume cycle
    assert_eq!(scene.burst.as_ref().map(|b| b.len()), Some(100));
}

#[test]
fn resume_on_running_scene_is_harmless() {
    let mut scene = build_default();
    scene.resume();
    scene.advance_frame();
    assert!((scene.sphere.rotation_y - 0.01).abs() < 1e-6);
}
