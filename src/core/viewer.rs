use super::camera::CameraRig;
use super::controller::{ControlMode, InteractionController};
use super::zoom::ZoomAnimator;
use std::time::Duration;

/// Camera plus everything that drives it. Input handlers and the frame loop
/// share a single `Viewer` so there is exactly one zoom task per camera.
#[derive(Clone, Debug, Default)]
pub struct Viewer {
    pub camera: CameraRig,
    pub controls: InteractionController,
    pub zoom: ZoomAnimator,
}

impl Viewer {
    pub fn new(camera: CameraRig) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.controls.on_drag_start(x, y);
    }

    pub fn drag_move(&mut self, x: f32, y: f32) {
        self.controls.on_drag_move(x, y, &mut self.camera);
    }

    pub fn drag_end(&mut self) {
        self.controls.on_drag_end();
    }

    pub fn toggle_mode(&mut self) -> ControlMode {
        let mode = self.controls.on_toggle_mode();
        log::info!("[input] mode -> {:?}", mode);
        mode
    }

    pub fn wheel(&mut self, delta_y: f32, now: Duration) -> f32 {
        self.controls
            .on_wheel(delta_y, &self.camera, &mut self.zoom, now)
    }

    /// Per-frame update; applies the eased depth while a zoom is in flight.
    pub fn update(&mut self, now: Duration) {
        if let Some(z) = self.zoom.step(now) {
            self.camera.set_depth(z);
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }
}
