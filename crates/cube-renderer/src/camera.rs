//! Perspective camera for the 3D viewport

use glam::{Mat4, Vec2, Vec3, Vec4};

use cube_core::{Ray, RayCaster, Viewport};

use crate::config::CameraConfig;

/// Perspective camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width over height
    pub aspect: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        Self::from_config(&CameraConfig::default(), aspect)
    }

    /// Create a camera from configuration
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let config = config.clone().sanitized();
        let mut camera = Self {
            position: Vec3::from(config.eye),
            target: Vec3::from(config.target),
            up: Vec3::Y,
            fov: 0.0,
            aspect,
            near: 0.1,
            far: 1000.0,
        };
        camera.set_fov_degrees(config.fov_degrees);
        camera.set_near(config.near_plane);
        camera.set_far(config.far_plane);
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    /// Unit vector pointing from the eye to the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Unit vector pointing to the right of the view
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Convert screen coordinates to world ray
    pub fn screen_to_ray(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Ray {
        let viewport = Viewport::new(screen_width, screen_height);
        self.ray_from_pointer(viewport, Vec2::new(screen_x, screen_y))
    }

    /// Project a world point into viewport pixels
    ///
    /// Returns the screen position and the NDC depth (0 at the near plane,
    /// 1 at the far plane), or `None` for points behind the eye.
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Option<(Vec2, f32)> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some((viewport.from_ndc(ndc.truncate()), ndc.z))
    }
}

impl RayCaster for Camera {
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.view_projection().inverse();

        // Near and far points in NDC (glam uses a 0..1 depth range)
        let near_ndc = Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far_ndc = Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        // Transform to world space
        let near_world = inv_view_proj * near_ndc;
        let far_world = inv_view_proj * far_ndc;
        let near_world = near_world.truncate() / near_world.w;
        let far_world = far_world.truncate() / far_world.w;

        Ray::new(near_world, far_world - near_world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new(4.0 / 3.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(camera.fov_degrees(), 75.0, epsilon = 1e-4);
        assert_relative_eq!(camera.near, 0.1);
        assert_relative_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_center_ray_follows_view_direction() {
        let camera = Camera::new(4.0 / 3.0);
        let ray = camera.screen_to_ray(400.0, 300.0, 800.0, 600.0);

        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.z, 4.9, epsilon = 1e-3);
    }

    #[test]
    fn test_screen_y_points_down() {
        let camera = Camera::new(1.0);
        let ray = camera.screen_to_ray(300.0, 100.0, 600.0, 600.0);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn test_projection_round_trip() {
        let camera = Camera::new(4.0 / 3.0);
        let viewport = Viewport::new(800.0, 600.0);
        let point = Vec3::new(0.5, 2.5, 0.5);

        let (screen, depth) = camera.world_to_screen(point, viewport).unwrap();
        assert!((0.0..1.0).contains(&depth));

        let ray = camera.ray_from_pointer(viewport, screen);
        assert!(ray.distance_to_point(point) < 1e-3);
    }

    #[test]
    fn test_point_behind_camera() {
        let camera = Camera::new(1.0);
        let viewport = Viewport::new(100.0, 100.0);
        assert!(camera.world_to_screen(Vec3::new(0.0, 0.0, 10.0), viewport).is_none());
    }

    #[test]
    fn test_eye_on_target_still_casts_rays() {
        let config = CameraConfig {
            eye: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config, 1.0);
        let ray = camera.screen_to_ray(50.0, 50.0, 100.0, 100.0);
        assert!(ray.origin.is_finite());
        assert!(ray.direction.is_finite());
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_clamps() {
        let mut camera = Camera::new(1.0);
        camera.set_fov_degrees(500.0);
        assert_relative_eq!(camera.fov_degrees(), 120.0, epsilon = 1e-4);
        camera.set_near(-1.0);
        assert_relative_eq!(camera.near, 0.001);
        camera.set_far(0.0);
        assert_relative_eq!(camera.far, 1.001);
    }
}
