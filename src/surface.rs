/*!
 * Resolve where a ray first crosses a bumpy, near-spherical surface.
 *
 * Terrain height is only known by sampling, so the crossing is found by a damped fixed-point iteration:
 * intersect the ray with a sphere at the last known height, measure the real height there, and repeat
 * until the two agree within 1% of the body's relief range.
 */

use tracing::{debug, trace};

use crate::angle;
use crate::coordinates::Coordinates;
use crate::geo_3d::{
    GeoVector,
    Point,
    Ray,
    line_sphere_intersection,
};

/// Iteration cap; discontinuous terrain may never converge.
pub const MAX_ITERATIONS: u32 = 50;

/// Outcome of a surface query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceQuery {
    /// The ray hits the surface at these coordinates (longitude in `(-180, 180]`).
    Found(Coordinates),
    /// The ray misses the body, or the iteration did not converge.
    NotFound,
}
impl SurfaceQuery {
    /// Get the coordinates, if found.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            SurfaceQuery::Found(coordinates) => Some(*coordinates),
            SurfaceQuery::NotFound => None,
        }
    }

    /// Check if the query found a surface point.
    pub fn is_found(&self) -> bool {
        matches!(self, SurfaceQuery::Found(_))
    }
}

/// A surface query together with the number of refinement steps it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub query: SurfaceQuery,
    /// Number of steps that did not terminate the loop.
    pub iterations: u32,
}

/// Resolver for a body whose terrain radius always lies within `[min_radius, max_radius]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePointResolver {
    pub min_radius: f64,
    pub max_radius: f64,
}
impl SurfacePointResolver {
    /// Create a new resolver from the body's terrain radius bounds.
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        SurfacePointResolver{min_radius, max_radius}
    }

    /// Maximum accepted gap between the trial sphere and the measured terrain radius.
    pub fn tolerance(&self) -> f64 {
        (self.max_radius - self.min_radius) / 100.0
    }

    /// Resolve using the built-in ray-sphere intersection.
    /// `height_at` returns the terrain radius (distance from the body's center) at the given coordinates.
    pub fn resolve<H>(&self, ray: &Ray, height_at: H) -> SurfaceQuery
    where H: FnMut(Coordinates) -> f64
    {
        self.resolve_with(ray, height_at, line_sphere_intersection)
    }

    /// Resolve with a caller-supplied sphere intersection.
    pub fn resolve_with<H, S>(&self, ray: &Ray, height_at: H, sphere_intersect: S) -> SurfaceQuery
    where
        H: FnMut(Coordinates) -> f64,
        S: FnMut(Point, GeoVector, f64) -> Option<Point>,
    {
        self.resolve_with_stats(ray, height_at, sphere_intersect).query
    }

    /// Resolve with a caller-supplied sphere intersection, reporting the number of iterations.
    /// `sphere_intersect(origin, direction, radius)` must return the nearest forward hit on a
    /// sphere of that radius around the body's center.
    pub fn resolve_with_stats<H, S>(&self, ray: &Ray, mut height_at: H, mut sphere_intersect: S) -> Resolution
    where
        H: FnMut(Coordinates) -> f64,
        S: FnMut(Point, GeoVector, f64) -> Option<Point>,
    {
        let tolerance = self.tolerance();
        let mut trial_radius = self.max_radius;
        let mut previous_radius = 0.0;
        let mut iterations = 0;

        while iterations < MAX_ITERATIONS {
            match sphere_intersect(ray.origin, ray.direction(), trial_radius) {
                Some(point) => {
                    let coordinates = Coordinates::from_local_point(&point);
                    let actual_radius = height_at(coordinates);
                    let error = (trial_radius - actual_radius).abs();
                    trace!(iterations, trial_radius, actual_radius, error, "Surface refinement step");

                    if error < tolerance {
                        let found = Coordinates::new(coordinates.latitude, angle::clamp_180(coordinates.longitude));
                        debug!(iterations, latitude = found.latitude, longitude = found.longitude, "Surface point found");
                        return Resolution{query: SurfaceQuery::Found(found), iterations};
                    }

                    previous_radius = trial_radius;
                    trial_radius = actual_radius;
                    iterations += 1;
                },
                None => {
                    if iterations == 0 {
                        debug!("Ray misses the outer terrain bound");
                        return Resolution{query: SurfaceQuery::NotFound, iterations};
                    }

                    // Went too low, back off 90% of the way toward the last radius
                    trial_radius = (previous_radius * 9.0 + trial_radius) / 10.0;
                    trace!(iterations, trial_radius, "Trial sphere missed, backing off");
                    iterations += 1;
                },
            }
        }

        debug!(iterations, "Surface refinement did not converge");
        Resolution{query: SurfaceQuery::NotFound, iterations}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 600_000.0;

    fn resolver() -> SurfacePointResolver {
        SurfacePointResolver::new(RADIUS - 1_000.0, RADIUS + 6_000.0)
    }

    fn ray(origin: Point, direction: GeoVector) -> Ray {
        Ray::new(origin, direction).unwrap()
    }

    #[test]
    fn flat_terrain_converges_to_near_side() {
        let origin = Point::new(2.0 * RADIUS, 0.0, 0.0);
        let resolution = resolver().resolve_with_stats(
            &ray(origin, -GeoVector::xhat()),
            |_| RADIUS,
            line_sphere_intersection,
        );

        let coordinates = resolution.query.coordinates().unwrap();
        assert!(coordinates.latitude.abs() < 1e-9);
        assert!(coordinates.longitude.abs() < 1e-9);
        assert!(resolution.iterations < MAX_ITERATIONS);
        assert_eq!(resolution.iterations, 1);
    }

    #[test]
    fn flat_terrain_off_axis() {
        let target = Coordinates::new(20.0, -135.0);
        let normal = target.surface_normal();
        let origin = Point::from(normal * (3.0 * RADIUS));

        let query = resolver().resolve(&ray(origin, -normal), |_| RADIUS);
        let coordinates = query.coordinates().unwrap();
        assert!((coordinates.latitude - 20.0).abs() < 1e-6);
        assert!((coordinates.longitude + 135.0).abs() < 1e-6);
    }

    #[test]
    fn miss_returns_immediately() {
        let origin = Point::new(2.0 * RADIUS, 2.0 * RADIUS, 0.0);
        let mut calls = 0;
        let resolution = resolver().resolve_with_stats(
            &ray(origin, -GeoVector::xhat()),
            |_| RADIUS,
            |origin, direction, radius| {
                calls += 1;
                line_sphere_intersection(origin, direction, radius)
            },
        );
        assert_eq!(resolution.query, SurfaceQuery::NotFound);
        assert_eq!(resolution.iterations, 0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn longitude_is_clamped_on_success() {
        // An intersection primitive reporting an unwrapped longitude
        let wrapped = Coordinates::new(0.0, 350.0).surface_normal();
        let resolver = resolver();
        let query = resolver.resolve_with(
            &ray(Point::new(2.0 * RADIUS, 0.0, 0.0), -GeoVector::xhat()),
            |coordinates| {
                assert!(coordinates.longitude <= 180.0);
                RADIUS
            },
            |_, _, radius| Some(Point::from(wrapped * radius)),
        );
        let coordinates = query.coordinates().unwrap();
        assert!((coordinates.longitude + 10.0).abs() < 1e-9);
    }

    #[test]
    fn grazing_ray_backs_off_toward_previous_radius() {
        // Ray passes 3 km above the mean radius: it hits the outer bound, but the terrain underneath
        // drops to the mean radius, which the ray never reaches.
        let altitude = RADIUS + 3_000.0;
        let origin = Point::new(-2.0 * RADIUS, altitude, 0.0);
        let mut radii = Vec::new();
        let resolution = resolver().resolve_with_stats(
            &ray(origin, GeoVector::xhat()),
            |_| RADIUS,
            |origin, direction, radius| {
                radii.push(radius);
                line_sphere_intersection(origin, direction, radius)
            },
        );

        assert_eq!(radii[0], RADIUS + 6_000.0);
        assert_eq!(radii[1], RADIUS);
        // Damped step: (previous * 9 + trial) / 10
        assert_eq!(radii[2], ((RADIUS + 6_000.0) * 9.0 + RADIUS) / 10.0);
        assert_eq!(resolution.query, SurfaceQuery::NotFound);
        assert_eq!(resolution.iterations, MAX_ITERATIONS);
    }

    #[test]
    fn oscillating_terrain_hits_iteration_cap() {
        let mut flip = false;
        let resolution = resolver().resolve_with_stats(
            &ray(Point::new(2.0 * RADIUS, 0.0, 0.0), -GeoVector::xhat()),
            |_| {
                flip = !flip;
                if flip { RADIUS + 5_000.0 } else { RADIUS - 500.0 }
            },
            line_sphere_intersection,
        );
        assert_eq!(resolution.query, SurfaceQuery::NotFound);
        assert_eq!(resolution.iterations, MAX_ITERATIONS);
    }

    #[test]
    fn bumpy_terrain_lands_within_tolerance() {
        let resolver = resolver();
        let height = |coordinates: Coordinates| {
            RADIUS + 2_000.0 + 1_500.0 * (coordinates.latitude.to_radians() * 3.0).sin()
        };
        let direction = GeoVector::new(-1.0, 0.1, 0.3);
        let origin = Point::new(3.0 * RADIUS, 0.0, 0.0);

        let query = resolver.resolve(&ray(origin, direction), height);
        let coordinates = query.coordinates().unwrap();

        // The found point sits on the ray at the measured terrain radius
        let hit = line_sphere_intersection(origin, direction.normalize(), height(coordinates)).unwrap();
        let hit_coordinates = Coordinates::from_local_point(&hit);
        assert!((hit_coordinates.latitude - coordinates.latitude).abs() < 0.1);
        assert!((hit_coordinates.longitude - coordinates.longitude).abs() < 0.1);
    }
}
