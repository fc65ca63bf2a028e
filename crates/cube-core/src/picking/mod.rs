//! Pointer picking
//!
//! Turns a pointer position into a world-space [`Ray`] through a
//! [`RayCaster`] (normally the viewport camera) and finds the nearest
//! pickable object under it. Pickable objects are corner handles and cubes;
//! outlines never are.

pub mod intersect;

use glam::{Vec2, Vec3};

use crate::scene::{CubeId, SceneRegistry};

pub use intersect::{ray_aabb_intersection, ray_sphere_intersection};

/// A half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Closest point on the ray to `point`
    ///
    /// Points behind the origin project onto the origin itself.
    pub fn closest_point_to_point(&self, point: Vec3) -> Vec3 {
        let t = (point - self.origin).dot(self.direction);
        if t < 0.0 { self.origin } else { self.at(t) }
    }

    /// Distance from `point` to the ray
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        point.distance(self.closest_point_to_point(point))
    }
}

/// Distance between a ray and a point
///
/// A non-finite point yields 0.0 rather than a NaN that would poison the
/// resize comparison.
pub fn ray_point_distance(ray: &Ray, point: Vec3) -> f32 {
    if !point.is_finite() {
        return 0.0;
    }
    ray.distance_to_point(point)
}

/// Viewport size in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Convert a pointer position (origin top-left, Y down) to normalized
    /// device coordinates in [-1, 1] with Y up
    pub fn to_ndc(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            (pointer.x / self.width) * 2.0 - 1.0,
            -(pointer.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Inverse of [`Viewport::to_ndc`]
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (1.0 - ndc.y) / 2.0 * self.height,
        )
    }
}

/// Anything that can cast a world ray through a point in NDC space
pub trait RayCaster {
    /// Ray from the eye through `ndc`
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;

    /// Ray through a pointer position in `viewport`
    fn ray_from_pointer(&self, viewport: Viewport, pointer: Vec2) -> Ray {
        self.ray_from_ndc(viewport.to_ndc(pointer))
    }
}

/// What the pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickHit {
    /// A corner handle of `cube`
    Handle { cube: CubeId, corner: usize },
    /// The body of a cube
    Cube(CubeId),
    /// Nothing pickable
    Empty,
}

/// Result of a pick: the ray that was cast and the nearest hit
#[derive(Debug, Clone, Copy)]
pub struct Pick {
    pub ray: Ray,
    pub hit: PickHit,
}

/// Cast a ray through `pointer` and return the nearest pickable hit
pub fn pick<C: RayCaster + ?Sized>(
    caster: &C,
    viewport: Viewport,
    pointer: Vec2,
    registry: &SceneRegistry,
) -> Pick {
    let ray = caster.ray_from_pointer(viewport, pointer);
    Pick {
        ray,
        hit: pick_with_ray(&ray, registry),
    }
}

/// Nearest pickable hit along an existing ray
pub fn pick_with_ray(ray: &Ray, registry: &SceneRegistry) -> PickHit {
    let mut nearest: Option<(f32, PickHit)> = None;
    let mut consider = |t: f32, hit: PickHit| {
        if nearest.is_none_or(|(best, _)| t < best) {
            nearest = Some((t, hit));
        }
    };

    for group in registry.groups() {
        for handle in &group.handles {
            if let Some(t) = ray_sphere_intersection(
                ray.origin,
                ray.direction,
                group.to_world(handle.position),
                handle.radius * group.scale,
            ) {
                consider(
                    t,
                    PickHit::Handle {
                        cube: handle.cube,
                        corner: handle.corner,
                    },
                );
            }
        }

        if let Some(t) = ray_aabb_intersection(
            ray.origin,
            ray.direction,
            group.to_world(group.cube.position),
            group.cube.half_extent() * group.scale,
        ) {
            consider(t, PickHit::Cube(group.cube.id));
        }
    }

    nearest.map_or(PickHit::Empty, |(_, hit)| hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use approx::assert_relative_eq;

    /// Orthographic caster looking down -Z from z = 10
    struct Ortho {
        half_size: f32,
    }

    impl RayCaster for Ortho {
        fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
            let origin = (ndc * self.half_size).extend(10.0);
            Ray::new(origin, Vec3::NEG_Z)
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 800.0)
    }

    /// Pointer position that lands on world (x, y) for the 4-unit ortho view
    fn pointer_at(x: f32, y: f32) -> Vec2 {
        viewport().from_ndc(Vec2::new(x / 4.0, y / 4.0))
    }

    #[test]
    fn test_ndc_conversion() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.from_ndc(Vec2::new(-1.0, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn test_closest_point_clamps_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.closest_point_to_point(Vec3::new(-3.0, 4.0, 0.0)), Vec3::ZERO);
        assert_relative_eq!(ray.distance_to_point(Vec3::new(-3.0, 4.0, 0.0)), 5.0);
        assert_relative_eq!(ray.distance_to_point(Vec3::new(3.0, 4.0, 0.0)), 4.0);
    }

    #[test]
    fn test_distance_to_invalid_point() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray_point_distance(&ray, Vec3::new(f32::NAN, 0.0, 0.0)), 0.0);
        assert_eq!(ray_point_distance(&ray, Vec3::splat(f32::INFINITY)), 0.0);
    }

    #[test]
    fn test_pick_cube_body() {
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let middle = registry.ids()[1];
        let pick = pick(&Ortho { half_size: 4.0 }, viewport(), pointer_at(0.0, 0.0), &registry);
        assert_eq!(pick.hit, PickHit::Cube(middle));
    }

    #[test]
    fn test_pick_handle_beats_cube() {
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let top = registry.ids()[2];
        let pick = pick(&Ortho { half_size: 4.0 }, viewport(), pointer_at(0.5, 2.5), &registry);
        assert!(matches!(pick.hit, PickHit::Handle { cube, .. } if cube == top));
    }

    #[test]
    fn test_pick_empty_space() {
        let registry = SceneRegistry::with_stack(&SceneConfig::default());
        let pick = pick(&Ortho { half_size: 4.0 }, viewport(), pointer_at(3.0, 0.0), &registry);
        assert_eq!(pick.hit, PickHit::Empty);
    }

    #[test]
    fn test_pick_respects_group_scale() {
        let mut registry = SceneRegistry::with_stack(&SceneConfig::default());
        let middle = registry.ids()[1];
        let caster = Ortho { half_size: 4.0 };

        // Just outside the unscaled middle cube
        let pointer = pointer_at(0.8, 0.0);
        assert_eq!(pick(&caster, viewport(), pointer, &registry).hit, PickHit::Empty);

        registry.group_mut(middle).unwrap().scale = 2.0;
        assert_eq!(
            pick(&caster, viewport(), pointer, &registry).hit,
            PickHit::Cube(middle)
        );
    }
}
