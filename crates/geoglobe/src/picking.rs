use crate::marker::MarkerBox;
use glam::{Affine3A, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length, or zero for a ray that hits nothing.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Markers under the pointer for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverResult<H> {
    /// Every hit, in processing order.
    pub highlighted: Vec<H>,
    /// The marker the tooltip describes: the last one processed, not the
    /// nearest.
    pub tooltip: Option<H>,
}

impl<H> Default for HoverResult<H> {
    fn default() -> Self {
        Self {
            highlighted: Vec::new(),
            tooltip: None,
        }
    }
}

impl<H: PartialEq> HoverResult<H> {
    pub fn is_highlighted(&self, handle: &H) -> bool {
        self.highlighted.contains(handle)
    }

    /// Opacity a marker should have this frame. Markers that were not hit
    /// always drop back to `dim`.
    pub fn opacity_for(&self, handle: &H, dim: f32, highlight: f32) -> f32 {
        if self.is_highlighted(handle) {
            highlight
        } else {
            dim
        }
    }
}

/// Slab test; returns the entry distance along the ray, or 0 when the origin
/// is already inside the box.
pub fn ray_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let (lo, hi) = (min[axis], max[axis]);

        if d.abs() < 1e-12 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (lo - o) * inv;
        let mut t2 = (hi - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_max < t_min {
            return None;
        }
    }

    Some(t_min)
}

/// Intersect `ray` with a marker box placed by `world_from_local`.
///
/// The ray is moved into the marker's local space, so rotation and the pulse
/// scale are honoured. A transform with no volume (a marker pulsed flat)
/// cannot be hit.
pub fn ray_marker_hit(ray: &Ray, world_from_local: &Affine3A, shape: &MarkerBox) -> Option<f32> {
    if ray.direction == Vec3::ZERO {
        return None;
    }
    if world_from_local.matrix3.determinant().abs() <= f32::EPSILON {
        return None;
    }

    let local_from_world = world_from_local.inverse();
    let origin = local_from_world.transform_point3(ray.origin);
    let direction = local_from_world.transform_vector3(ray.direction);

    // Local and world parameters agree because the map is affine.
    ray_aabb(origin, direction, shape.min(), shape.max())
}

/// Hit-test every candidate marker against `ray`.
pub fn pick_markers<H, I>(ray: &Ray, markers: I) -> HoverResult<H>
where
    H: Copy,
    I: IntoIterator<Item = (H, Affine3A, MarkerBox)>,
{
    let mut result = HoverResult::default();
    for (handle, transform, shape) in markers {
        if ray_marker_hit(ray, &transform, &shape).is_some() {
            result.highlighted.push(handle);
            result.tooltip = Some(handle);
        }
    }
    result
}
