use super::constants::{
    CAMERA_FOVY_DEG, CAMERA_START_Z, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_ZOOM, MIN_ZOOM, PAN_SPEED,
    ROTATE_SPEED, ZOOM_INTENSITY,
};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Free-flying perspective camera: a position plus pitch (`rotation.x`) and
/// yaw (`rotation.y`), composed in XYZ Euler order.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub rotation: Vec2,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            rotation: Vec2::ZERO,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl CameraRig {
    /// Translate in the screen plane. Screen y grows downwards, world y up.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.position.x -= delta_x * PAN_SPEED;
        self.position.y += delta_y * PAN_SPEED;
    }

    /// Rotation is left unclamped.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.rotation.y -= delta_x * ROTATE_SPEED;
        self.rotation.x -= delta_y * ROTATE_SPEED;
    }

    /// Depth a wheel step of `delta_y` should ease towards, clamped to the zoom range.
    pub fn zoom_target(&self, delta_y: f32) -> f32 {
        (self.position.z - delta_y * ZOOM_INTENSITY).clamp(MIN_ZOOM, MAX_ZOOM)
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.position.z
    }

    #[inline]
    pub fn set_depth(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World to view: inverse of the camera's own placement.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Edge of a world-space billboard that projects to the same height as a
    /// size-attenuated point of `point_size` (pixels at half-viewport distance).
    #[inline]
    pub fn world_sprite_size(&self, point_size: f32) -> f32 {
        point_size * (self.fovy_radians * 0.5).tan()
    }

    /// Camera-space right and up axes in world space, used to face sprites.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let q = self.orientation();
        (q * Vec3::X, q * Vec3::Y)
    }
}
