//! Perspective camera with a rotate-only orbit around its target.

use glam::{Mat4, Vec3};

use crate::config::{CameraConfig, OrbitLimits};

/// Size of the visible region, in world units, on the plane through the
/// camera target that faces the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn at_distance(fov_y_deg: f32, aspect: f32, distance: f32) -> Self {
        let height = 2.0 * (fov_y_deg.to_radians() * 0.5).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    config: CameraConfig,
    limits: OrbitLimits,
    radius: f32,
    /// Angle from +Y, radians.
    polar: f32,
    /// Angle around Y measured from +Z, radians.
    azimuth: f32,
    aspect: f32,
}

impl Camera {
    pub fn new(config: CameraConfig, limits: OrbitLimits) -> Self {
        let offset = config.position - config.target;
        let radius = offset.length().max(f32::EPSILON);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            config,
            limits,
            radius,
            polar: polar.clamp(limits.min_polar, limits.max_polar),
            azimuth,
            aspect: 1.0,
        }
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels on a surface
    /// `surface_height` pixels tall. A drag of the full height turns the
    /// camera by `2π * rotate_speed`.
    pub fn orbit_drag(&mut self, dx: f32, dy: f32, surface_height: f32) {
        if !(surface_height > 0.0) {
            return;
        }
        let k = std::f32::consts::TAU * self.limits.rotate_speed / surface_height;
        self.azimuth -= dx * k;
        self.polar = (self.polar - dy * k).clamp(self.limits.min_polar, self.limits.max_polar);
    }

    pub fn position(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.config.target + Vec3::new(sp * sa, cp, sp * ca) * self.radius
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.config.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.config.fov_y.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Visible extent at the target distance.
    pub fn viewport(&self) -> Viewport {
        Viewport::at_distance(self.config.fov_y, self.aspect, self.radius)
    }
}
