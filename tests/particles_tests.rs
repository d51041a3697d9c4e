// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec3;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BOUND: f32 = 250.0;

fn out_of_range(c: f32, bound: f32) -> bool {
    c < -bound || c > bound
}

#[test]
fn initialize_spawns_inside_domain() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::initialize(1000, BOUND, &mut rng);
    assert_eq!(field.len(), 1000);
    assert_eq!(field.velocities().len(), 1000);
    assert_eq!(field.boundary(), Boundary::Reflect(BOUND));
    for p in field.positions() {
        assert!(p.abs().max_element() <= BOUND, "spawned outside: {p:?}");
    }
    for v in field.velocities() {
        assert!(v.abs().max_element() <= 1.0, "velocity out of range: {v:?}");
    }
}

#[test]
fn tick_reflects_only_axes_that_left_the_domain() {
    let mut field = ParticleField::from_parts(
        vec![Vec3::new(249.5, 0.0, -249.5)],
        vec![Vec3::new(1.0, 0.5, -1.0)],
        Boundary::Reflect(BOUND),
    );
    field.tick();
    assert_eq!(field.positions()[0], Vec3::new(250.5, 0.5, -250.5));
    assert_eq!(field.velocities()[0], Vec3::new(-1.0, 0.5, 1.0));

    // Overshoot is kept for one frame, then the particle heads back in
    field.tick();
    assert_eq!(field.positions()[0], Vec3::new(249.5, 1.0, -249.5));
    assert_eq!(field.velocities()[0], Vec3::new(-1.0, 0.5, 1.0));
}

#[test]
fn landing_exactly_on_the_bound_does_not_reflect() {
    let mut field = ParticleField::from_parts(
        vec![Vec3::new(249.0, -249.0, 0.0)],
        vec![Vec3::new(1.0, -1.0, 0.0)],
        Boundary::Reflect(BOUND),
    );
    field.tick();
    assert_eq!(field.positions()[0], Vec3::new(250.0, -250.0, 0.0));
    assert_eq!(field.velocities()[0], Vec3::new(1.0, -1.0, 0.0));
}

#[test]
fn velocity_flips_iff_updated_position_is_out_of_range() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut field = ParticleField::initialize(2000, BOUND, &mut rng);
    for _ in 0..300 {
        let before: Vec<Vec3> = field.velocities().to_vec();
        field.tick();
        for (i, (p, v)) in field
            .positions()
            .iter()
            .zip(field.velocities())
            .enumerate()
        {
            let old = before[i];
            for (pc, vc, oc) in [(p.x, v.x, old.x), (p.y, v.y, old.y), (p.z, v.z, old.z)] {
                if out_of_range(pc, BOUND) {
                    assert_eq!(vc, -oc, "particle {i} should have reflected");
                } else {
                    assert_eq!(vc, oc, "particle {i} reflected while in range");
                }
            }
        }
    }
}

#[test]
fn one_tick_moves_each_axis_by_velocity_magnitude() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = ParticleField::initialize(1000, BOUND, &mut rng);
    let prev_pos = field.positions().to_vec();
    let prev_vel = field.velocities().to_vec();
    field.tick();

    for i in 0..field.len() {
        let moved = (field.positions()[i] - prev_pos[i]).abs();
        let speed = prev_vel[i].abs();
        assert!(
            (moved - speed).abs().max_element() < 1e-3,
            "particle {i}: moved {moved:?}, speed {speed:?}"
        );
        assert_eq!(field.velocities()[i].abs(), speed);
        assert!(field.positions()[i].abs().max_element() <= BOUND + 1.0);
    }
}

#[test]
fn long_runs_stay_within_one_step_of_the_bound() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::initialize(500, BOUND, &mut rng);
    for _ in 0..2000 {
        field.tick();
    }
    for p in field.positions() {
        assert!(p.abs().max_element() <= BOUND + 1.0, "escaped: {p:?}");
    }
}

#[test]
fn static_cloud_never_moves() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::static_cloud(200, BOUND, &mut rng);
    assert!(field.is_static());
    assert!(field.velocities().is_empty());
    assert!(field.take_dirty());
    let before = field.positions().to_vec();
    for _ in 0..10 {
        field.tick();
    }
    assert_eq!(field.positions(), before.as_slice());
    assert!(!field.take_dirty());
}

#[test]
fn tick_marks_positions_dirty() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::initialize(10, BOUND, &mut rng);
    assert!(field.take_dirty(), "fresh field needs an upload");
    assert!(!field.take_dirty());
    field.tick();
    assert!(field.take_dirty());
    assert!(!field.take_dirty());
}

#[test]
fn drifting_field_never_reflects() {
    let mut field = ParticleField::from_parts(
        vec![Vec3::new(1000.0, -1000.0, 0.0)],
        vec![Vec3::new(1.0, -1.0, 0.5)],
        Boundary::Unbounded,
    );
    for _ in 0..10 {
        field.tick();
    }
    assert_eq!(field.positions()[0], Vec3::new(1010.0, -1010.0, 5.0));
    assert_eq!(field.velocities()[0], Vec3::new(1.0, -1.0, 0.5));
}

#[test]
fn drifting_spawn_uses_its_own_extent() {
    let mut rng = StdRng::seed_from_u64(17);
    let field = ParticleField::drifting(100, 200.0, &mut rng);
    assert_eq!(field.len(), 100);
    assert_eq!(field.boundary(), Boundary::Unbounded);
    for p in field.positions() {
        assert!(p.abs().max_element() <= 200.0);
    }
}

#[test]
fn empty_field_is_fine() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::initialize(0, BOUND, &mut rng);
    assert!(field.is_empty());
    field.tick();
    assert!(field.positions().is_empty());
}
