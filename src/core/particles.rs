use super::constants::PARTICLE_MAX_SPEED;
use glam::Vec3;
use rand::Rng;

/// What happens when a particle leaves the spawn domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    /// Negate the velocity component on any axis whose updated coordinate
    /// lies outside `[-bound, bound]`. Positions are never clamped.
    Reflect(f32),
    /// Particles drift without limit.
    Unbounded,
}

/// Positions and per-particle velocities for a point cloud.
///
/// Positions are kept as a flat `Vec<Vec3>` so the renderer can upload them
/// directly as an instance buffer; `tick` marks that buffer dirty.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    boundary: Boundary,
    dirty: bool,
}

impl ParticleField {
    /// Animated field reflecting off a cube of half-extent `bound`.
    pub fn initialize<R: Rng + ?Sized>(count: usize, bound: f32, rng: &mut R) -> Self {
        let positions = random_points(count, bound, rng);
        let velocities = random_points(count, PARTICLE_MAX_SPEED, rng);
        Self {
            positions,
            velocities,
            boundary: Boundary::Reflect(bound),
            dirty: true,
        }
    }

    /// Static cloud: same spawn distribution, no motion.
    pub fn static_cloud<R: Rng + ?Sized>(count: usize, bound: f32, rng: &mut R) -> Self {
        Self {
            positions: random_points(count, bound, rng),
            velocities: Vec::new(),
            boundary: Boundary::Reflect(bound),
            dirty: true,
        }
    }

    /// Unbounded drift, spawned inside `[-extent, extent]^3`.
    pub fn drifting<R: Rng + ?Sized>(count: usize, extent: f32, rng: &mut R) -> Self {
        let positions = random_points(count, extent, rng);
        let velocities = random_points(count, PARTICLE_MAX_SPEED, rng);
        Self {
            positions,
            velocities,
            boundary: Boundary::Unbounded,
            dirty: true,
        }
    }

    /// Build a field from explicit state. `velocities` may be empty for a
    /// static cloud; otherwise it must match `positions` in length.
    pub fn from_parts(positions: Vec<Vec3>, velocities: Vec<Vec3>, boundary: Boundary) -> Self {
        debug_assert!(velocities.is_empty() || velocities.len() == positions.len());
        Self {
            positions,
            velocities,
            boundary,
            dirty: true,
        }
    }

    /// Advance every particle by one step.
    pub fn tick(&mut self) {
        if self.velocities.is_empty() {
            return;
        }
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v;
            if let Boundary::Reflect(bound) = self.boundary {
                reflect_axis(p.x, &mut v.x, bound);
                reflect_axis(p.y, &mut v.y, bound);
                reflect_axis(p.z, &mut v.z, bound);
            }
        }
        self.dirty = true;
    }

    /// Returns whether positions changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.velocities.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }
}

// Sign check runs on the already-updated coordinate.
#[inline]
fn reflect_axis(coord: f32, vel: &mut f32, bound: f32) {
    if coord < -bound || coord > bound {
        *vel = -*vel;
    }
}

fn random_points<R: Rng + ?Sized>(count: usize, extent: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            )
        })
        .collect()
}
