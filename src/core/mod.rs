pub mod camera;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod particles;
pub mod scene;
pub mod viewer;
pub mod zoom;

pub use camera::*;
pub use controller::*;
pub use particles::*;
pub use scene::*;
pub use viewer::*;
pub use zoom::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
