//! Ray intersection tests used for picking
//!
//! Both tests only report front-facing hits: a ray starting inside the
//! shape, or a shape entirely behind the ray origin, is a miss.

use glam::Vec3;

/// Ray-sphere intersection test.
///
/// Solves `|origin + t * dir - center|² = radius²` for the smallest `t`.
///
/// # Arguments
///
/// * `ray_origin` - The starting point of the ray.
/// * `ray_dir` - The direction of the ray (need not be normalized).
/// * `center` - The sphere center.
/// * `radius` - The sphere radius.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter of the entry point.
/// * `None` - If the ray misses, or starts inside the sphere.
pub fn ray_sphere_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;

    // Quadratic coefficients: at² + bt + c = 0
    let a = ray_dir.dot(ray_dir);
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    if a <= f32::EPSILON {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Ray versus axis-aligned box (slab method).
///
/// The box is given by its center and half edge length, which is all an
/// unrotated cube needs.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter where the ray enters the box.
/// * `None` - If the ray misses, or starts inside the box.
pub fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    half_extent: f32,
) -> Option<f32> {
    let min = center - Vec3::splat(half_extent);
    let max = center + Vec3::splat(half_extent);

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];

        // Ray parallel to this slab
        if dir.abs() < 1e-8 {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let t1 = (min[axis] - origin) / dir;
        let t2 = (max[axis] - origin) / dir;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));

        if t_near > t_far {
            return None;
        }
    }

    if t_near < 0.0 {
        return None;
    }

    Some(t_near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_sphere() {
        let t = ray_sphere_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert_relative_eq!(t.unwrap(), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_sphere() {
        let t = ray_sphere_intersection(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let t = ray_sphere_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_inside_sphere() {
        let t = ray_sphere_intersection(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_hits_box_front_face() {
        let t = ray_aabb_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 0.5);
        assert_relative_eq!(t.unwrap(), 4.5, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_box() {
        let t = ray_aabb_intersection(
            Vec3::new(0.0, 0.6, 5.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            0.5,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_oblique_ray_hits_box() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let dir = (Vec3::new(0.0, 2.0, 0.0) - origin).normalize();
        let t = ray_aabb_intersection(origin, dir, Vec3::new(0.0, 2.0, 0.0), 0.5);
        let hit = origin + dir * t.unwrap();
        assert_relative_eq!(hit.z, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_ray_inside_box() {
        let t = ray_aabb_intersection(Vec3::ZERO, Vec3::X, Vec3::ZERO, 0.5);
        assert!(t.is_none());
    }
}
