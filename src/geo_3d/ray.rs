use crate::geo_3d::{GeoVector, Point};

/// A ray in the body-local frame.
/// The direction is always stored normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    direction: GeoVector,
}
impl Ray {
    /// Create a new ray, normalizing the direction.
    /// Returns `None` for a zero-length or NaN direction.
    pub fn new(origin: Point, direction: GeoVector) -> Option<Self> {
        let direction = direction.normalize();
        if direction.has_nan() {
            return None;
        }
        Some(Ray{origin, direction})
    }

    /// Get the (unit) direction of the ray.
    pub fn direction(&self) -> GeoVector {
        self.direction
    }

    /// Get the point at distance `t` along the ray.
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Intersect the ray with a sphere of the given radius around the body's center.
    pub fn sphere_intersection(&self, radius: f64) -> Option<Point> {
        line_sphere_intersection(self.origin, self.direction, radius)
    }
}

/// Intersect a ray with a sphere of the given radius centered on the frame's origin.
/// Returns the nearest intersection in front of the ray's origin, or `None` if the ray misses.
/// `direction` must be normalized.
pub fn line_sphere_intersection(origin: Point, direction: GeoVector, radius: f64) -> Option<Point> {
    let offset = GeoVector::from(origin);

    // |o + t*d|^2 = r^2 with |d| = 1 gives t^2 + 2bt + c = 0
    let b = offset.dot(&direction);
    let c = offset.norm_sq() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    let t = if near >= 0.0 {
        near
    } else if far >= 0.0 {
        far
    } else {
        return None;
    };

    Some(origin + direction * t)
}
