//! Perspective camera looking at the cloud.

use glam::{Mat4, Vec3};

/// Fixed perspective camera.
///
/// Only the aspect ratio changes after construction, on resize.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width divided by height of the output.
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl PerspectiveCamera {
    /// Create a camera at `z = 3` looking at the origin, 45° vertical FOV.
    pub fn new() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
        }
    }

    /// Update the aspect ratio from output dimensions.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_from_dimensions() {
        let mut camera = PerspectiveCamera::new();
        camera.set_aspect(400, 300);
        assert_eq!(camera.aspect, 400.0 / 300.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = PerspectiveCamera::new();
        let clip = camera.projection_matrix() * camera.view_matrix() * glam::Vec4::W;
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
