use super::constants::*;
use super::particles::ParticleField;
use rand::rngs::StdRng;

/// Scene-level tuning. `Default` mirrors the shipped page.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particle_count: usize,
    pub particle_bound: f32,
    /// Build the bamboo field as a static cloud instead of an animated one.
    pub static_particles: bool,
    pub burst_count: usize,
    pub burst_extent: f32,
    pub sphere_spin: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_bound: PARTICLE_BOUND,
            static_particles: false,
            burst_count: BURST_COUNT,
            burst_extent: BURST_EXTENT,
            sphere_spin: SPHERE_SPIN_PER_FRAME,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
    pub segments: u32,
    pub rotation_y: f32,
}

/// Photo plane plus its enlarged back-facing outline.
#[derive(Clone, Debug)]
pub struct ImagePanel {
    pub width: f32,
    pub height: f32,
    pub z: f32,
    pub outline_scale: f32,
}

impl Default for ImagePanel {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            z: PANEL_Z,
            outline_scale: OUTLINE_SCALE,
        }
    }
}

/// Owns all scene content and advances it once per frame.
pub struct SceneComposer {
    pub params: SceneParams,
    pub sphere: Sphere,
    pub panel: Option<ImagePanel>,
    pub bamboo: ParticleField,
    pub burst: Option<ParticleField>,
    running: bool,
    rng: StdRng,
}

impl SceneComposer {
    pub fn build(params: SceneParams, mut rng: StdRng) -> Self {
        let bamboo = if params.static_particles {
            ParticleField::static_cloud(params.particle_count, params.particle_bound, &mut rng)
        } else {
            ParticleField::initialize(params.particle_count, params.particle_bound, &mut rng)
        };
        log::info!(
            "[scene] built: sphere r={} bamboo={} (static={})",
            SPHERE_RADIUS,
            bamboo.len(),
            bamboo.is_static()
        );
        Self {
            params,
            sphere: Sphere {
                radius: SPHERE_RADIUS,
                segments: SPHERE_SEGMENTS,
                rotation_y: 0.0,
            },
            panel: None,
            bamboo,
            burst: None,
            running: true,
            rng,
        }
    }

    /// Called once the photo texture has arrived.
    pub fn attach_image_panel(&mut self) {
        if self.panel.is_none() {
            self.panel = Some(ImagePanel::default());
        }
    }

    /// Spawn the cube burst. Later calls leave the existing burst alone.
    pub fn start_burst(&mut self) -> bool {
        if self.burst.is_some() {
            return false;
        }
        let burst =
            ParticleField::drifting(self.params.burst_count, self.params.burst_extent, &mut self.rng);
        log::info!("[scene] cube burst: {} cubes", burst.len());
        self.burst = Some(burst);
        true
    }

    pub fn advance_frame(&mut self) {
        if !self.running {
            return;
        }
        self.sphere.rotation_y += self.params.sphere_spin;
        self.bamboo.tick();
        if let Some(b) = self.burst.as_mut() {
            b.tick();
        }
    }

    /// Dispose hook: freezes the scene; the frame loop stops drawing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Undo `stop`, e.g. when the page comes back from the back/forward cache.
    pub fn resume(&mut self) {
        self.running = true;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
