/*!
 * Celestial body description.
 *
 * A body supplies what the surface resolver needs from its host:
 * terrain radius bounds, the terrain height query, and whether it has a surface at all.
 */

mod proc_errors;
mod terrain;
mod location;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::coordinates::Coordinates;
use crate::geo_3d::{Point, Ray};
use crate::surface::{SurfacePointResolver, SurfaceQuery};

// Re-export errors
pub use proc_errors::{
    BodyError,
    ProcResult,
    err_str,
};
// Re-export terrain models
pub use terrain::{
    TerrainChoice,
    TerrainModel,
};
pub use location::GlobalLocation;

/// A celestial body, as loaded from a config file.
/// All distances are in meters from the body's center.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Body {
    pub name: String,
    /// Mean (sea level) radius.
    pub radius: f64,
    /// Lowest possible terrain radius.
    pub min_radius: f64,
    /// Highest possible terrain radius.
    pub max_radius: f64,
    /// Bodies without a surface (stars, gas giants) cannot be picked on.
    #[serde(default = "Body::default_has_surface")]
    pub has_surface: bool,
    #[serde(default)]
    pub terrain: TerrainChoice,
}
impl Body {
    pub fn default_has_surface() -> bool {
        true
    }

    /// Example body used by `vtarget example`.
    pub fn example(terrain: TerrainChoice) -> Self {
        Body{
            name: "Kerbin".to_string(),
            radius: 600_000.0,
            min_radius: 599_000.0,
            max_radius: 606_000.0,
            has_surface: Body::default_has_surface(),
            terrain,
        }
    }

    /// Load and validate a body from a config file (json, toml, or yaml).
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        let body: Body = crate::io::read_cfg_file(cfg_file)?;
        body.validate()?;
        debug!(name = %body.name, terrain = body.terrain.get_model_name(), "Loaded body");
        Ok(body)
    }

    /// Check the radius bounds and terrain parameters.
    pub fn validate(&self) -> ProcResult<()> {
        if !(self.min_radius > 0.0) {
            return err_str(&format!("{}: min_radius must be positive (got {})", self.name, self.min_radius));
        }
        if !(self.min_radius <= self.radius && self.radius <= self.max_radius) {
            return err_str(&format!(
                "{}: radius ({}) must lie within [min_radius, max_radius] ([{}, {}])",
                self.name, self.radius, self.min_radius, self.max_radius,
            ));
        }
        if !(self.max_radius > self.min_radius) {
            return err_str(&format!("{}: max_radius must be above min_radius", self.name));
        }
        self.terrain.validate()
            .map_err(|error| BodyError::StringOnly(format!("{}: {}", self.name, error)))
    }

    /// Get the terrain radius (distance from the center to the ground) at the given coordinates.
    /// Always within `[min_radius, max_radius]`; the mean radius for bodies without a surface.
    /// Bounds that fail `validate` give a meaningless height, but never a panic.
    pub fn height_at(&self, coordinates: Coordinates) -> f64 {
        if !self.has_surface {
            return self.radius;
        }
        self.terrain
            .radius_at(self.radius, coordinates)
            .max(self.min_radius)
            .min(self.max_radius)
    }

    /// Get the terrain altitude above the mean radius. Never negative.
    pub fn terrain_altitude(&self, coordinates: Coordinates) -> f64 {
        if !self.has_surface {
            return 0.0;
        }
        (self.height_at(coordinates) - self.radius).max(0.0)
    }

    /// Get the body-local position at an altitude above the mean radius.
    pub fn surface_position(&self, coordinates: Coordinates, altitude: f64) -> Point {
        Point::from(coordinates.surface_normal() * (self.radius + altitude))
    }

    /// Check if the body blocks the line of sight from `camera` to `position` (both body-local).
    /// Points more than 100 m below the mean radius are always hidden.
    pub fn is_occluding(&self, position: &Point, camera: &Point) -> bool {
        if position.radius() < self.radius - 100.0 {
            return true;
        }

        // Body center behind the point, as seen from the camera
        let to_camera = *camera - *position;
        let to_center = Point::zero() - *position;
        if to_camera.dot(&to_center) < 0.0 {
            return false;
        }

        // Closest approach of the sight line to the body's center
        let sight = (*position - *camera).normalize();
        let center_offset = Point::zero() - *camera;
        let along = center_offset.dot(&sight);
        let miss_distance = (center_offset.norm_sq() - along * along).max(0.0).sqrt();
        miss_distance < self.radius
    }

    /// Get the surface resolver for this body's terrain bounds.
    pub fn resolver(&self) -> SurfacePointResolver {
        SurfacePointResolver::new(self.min_radius, self.max_radius)
    }

    /// Resolve the surface coordinates under a pointer ray.
    /// Always `NotFound` for bodies without a surface.
    pub fn mouse_coordinates(&self, ray: &Ray) -> SurfaceQuery {
        if !self.has_surface {
            return SurfaceQuery::NotFound;
        }
        self.resolver().resolve(ray, |coordinates| self.height_at(coordinates))
    }
}
