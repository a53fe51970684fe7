use glam::{Quat, Vec3};
use std::f64::consts::PI;

/// Signed decimal degrees. North and east are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoord {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_surface_point(&self, radius: f32) -> Vec3 {
        project(self.latitude, self.longitude, radius)
    }
}

/// Position and orientation of something sitting on the sphere surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlacement {
    pub position: Vec3,
    /// Turns local +Z into the outward surface normal.
    pub rotation: Quat,
}

/// Project latitude/longitude (degrees) onto a sphere of `radius` centred at
/// the origin. Longitude 0 lies on +Z, latitude 90 on +Y.
///
/// Inputs must be in range; this is not checked here.
pub fn project(latitude_deg: f64, longitude_deg: f64, radius: f32) -> Vec3 {
    let lat = latitude_deg / 180.0 * PI;
    let lon = longitude_deg / 180.0 * PI;
    let r = radius as f64;

    Vec3::new(
        (r * lat.cos() * lon.sin()) as f32,
        (r * lat.sin()) as f32,
        (r * lat.cos() * lon.cos()) as f32,
    )
}

/// Rotation that points local +Z away from the sphere centre through `point`.
pub fn outward_rotation(point: Vec3) -> Quat {
    let normal = point.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::Z, normal)
}

pub fn surface_placement(coord: GeoCoord, radius: f32) -> SurfacePlacement {
    let position = coord.to_surface_point(radius);
    SurfacePlacement {
        position,
        rotation: outward_rotation(position),
    }
}
