use super::camera::CameraRig;
use super::zoom::ZoomAnimator;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    #[default]
    Pan,
    Rotate,
}

impl ControlMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Pan => ControlMode::Rotate,
            ControlMode::Rotate => ControlMode::Pan,
        }
    }
}

/// Last pointer sample of an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub last_x: f32,
    pub last_y: f32,
}

/// Turns drag deltas and wheel steps into camera operations.
///
/// Drag state (`Idle` / `Dragging`) and the pan/rotate mode are independent:
/// the mode may flip mid-drag and the next move uses the new mode.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    drag: Option<DragSession>,
    mode: ControlMode,
}

impl InteractionController {
    pub fn new(mode: ControlMode) -> Self {
        Self { drag: None, mode }
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn on_drag_start(&mut self, x: f32, y: f32) {
        self.drag = Some(DragSession {
            last_x: x,
            last_y: y,
        });
    }

    pub fn on_drag_move(&mut self, x: f32, y: f32, camera: &mut CameraRig) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let delta_x = x - session.last_x;
        let delta_y = y - session.last_y;
        match self.mode {
            ControlMode::Rotate => camera.rotate(delta_x, delta_y),
            ControlMode::Pan => camera.pan(delta_x, delta_y),
        }
        session.last_x = x;
        session.last_y = y;
    }

    pub fn on_drag_end(&mut self) {
        self.drag = None;
    }

    pub fn on_toggle_mode(&mut self) -> ControlMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Start an eased zoom towards the clamped target; returns that target.
    pub fn on_wheel(
        &mut self,
        delta_y: f32,
        camera: &CameraRig,
        zoom: &mut ZoomAnimator,
        now: Duration,
    ) -> f32 {
        let target = camera.zoom_target(delta_y);
        zoom.start(camera.depth(), target, now);
        target
    }
}
