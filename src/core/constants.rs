use std::time::Duration;

// Simulation and camera tuning shared by the frame loop and the input handlers.

// Bamboo particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_BOUND: f32 = 250.0; // half-extent of the cubical domain
pub const PARTICLE_MAX_SPEED: f32 = 1.0; // per-axis velocity range is [-max, max]

// Cube burst (no reflection, drifts forever)
pub const BURST_COUNT: usize = 100;
pub const BURST_EXTENT: f32 = 200.0;
pub const BURST_CUBE_SIZE: f32 = 5.0;

// Sphere
pub const SPHERE_RADIUS: f32 = 5.0;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_SPIN_PER_FRAME: f32 = 0.01; // radians about +Y

// Image panel and outline
pub const PANEL_WIDTH: f32 = 5.0;
pub const PANEL_HEIGHT: f32 = 3.0;
pub const PANEL_Z: f32 = -1.0;
pub const OUTLINE_SCALE: f32 = 1.1;

// Camera
pub const CAMERA_START_Z: f32 = 100.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Interaction
pub const ROTATE_SPEED: f32 = 0.005; // radians per pixel
pub const PAN_SPEED: f32 = 0.01; // world units per pixel
pub const ZOOM_INTENSITY: f32 = 0.5; // world units per wheel delta unit
pub const MIN_ZOOM: f32 = 5.0;
pub const MAX_ZOOM: f32 = 15.0;

// Zoom easing
pub const ZOOM_DURATION: Duration = Duration::from_millis(500);
