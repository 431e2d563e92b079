//! Orbit camera for the decay scene.
//!
//! Z-up to match the heave axis; the default pose looks at the sphere from
//! (0, 30, 0), side-on to the free surface.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera uniform data sent to the GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix
    pub view_proj: [[f32; 4]; 4],
    /// Camera position for lighting
    pub camera_pos: [f32; 4],
}

/// Orbit camera around a target point, Z-up
pub struct Camera {
    /// Target point (m)
    pub target: Vec3,
    /// Distance from target (m)
    pub distance: f32,
    /// Rotation around the Z axis (radians)
    pub azimuth: f32,
    /// Elevation above the horizontal (radians)
    pub elevation: f32,
    /// Field of view (radians)
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 30.0,
            azimuth: std::f32::consts::FRAC_PI_2,
            elevation: 0.0,
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 500.0,
            aspect,
        }
    }

    /// Camera position from the orbital parameters
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.elevation.cos() * self.azimuth.cos();
        let y = self.distance * self.elevation.cos() * self.azimuth.sin();
        let z = self.distance * self.elevation.sin();
        self.target + Vec3::new(x, y, z)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.position(), self.target, Vec3::Z);
        let proj = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        let pos = self.position();
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
            camera_pos: [pos.x, pos.y, pos.z, 1.0],
        }
    }

    /// Orbit by delta angles (mouse drag)
    pub fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth += delta_azimuth;
        self.elevation = (self.elevation + delta_elevation).clamp(
            -std::f32::consts::FRAC_PI_2 + 0.05,
            std::f32::consts::FRAC_PI_2 - 0.05,
        );
    }

    /// Zoom by changing distance
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(8.0, 200.0);
    }

    /// Reset to the default side-on pose
    pub fn reset(&mut self) {
        self.azimuth = std::f32::consts::FRAC_PI_2;
        self.elevation = 0.0;
        self.distance = 30.0;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose_is_side_on() {
        let camera = Camera::new(4.0 / 3.0);
        let pos = camera.position();
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.y - 30.0).abs() < 1e-4);
        assert!(pos.z.abs() < 1e-4);
    }

    #[test]
    fn test_elevation_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.elevation < std::f32::consts::FRAC_PI_2);
    }
}
