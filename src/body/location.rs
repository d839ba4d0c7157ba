use serde::{Serialize, Deserialize};

use crate::body::Body;
use crate::coordinates::Coordinates;
use crate::geo_3d::{GeoVector, Point};

/// A location on or above a body.
/// The altitude is never below the terrain at the coordinates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalLocation {
    /// Name of the body this location is on.
    pub body: String,
    pub coordinates: Coordinates,
    /// Altitude above the body's mean radius.
    pub altitude: f64,
    /// Whether `altitude` is the terrain altitude.
    pub is_on_surface: bool,
}
impl GlobalLocation {
    /// Create a location on the terrain surface.
    pub fn on_surface(body: &Body, coordinates: Coordinates) -> Self {
        GlobalLocation{
            body: body.name.clone(),
            coordinates,
            altitude: body.terrain_altitude(coordinates),
            is_on_surface: true,
        }
    }

    /// Create a location at an altitude, raised to the terrain if it would be underground.
    pub fn at_altitude(body: &Body, coordinates: Coordinates, altitude: f64) -> Self {
        let surface_altitude = body.terrain_altitude(coordinates);
        if surface_altitude >= altitude {
            GlobalLocation{body: body.name.clone(), coordinates, altitude: surface_altitude, is_on_surface: true}
        } else {
            GlobalLocation{body: body.name.clone(), coordinates, altitude, is_on_surface: false}
        }
    }

    /// Get the terrain altitude under this location.
    pub fn surface_altitude(&self, body: &Body) -> f64 {
        if self.is_on_surface {
            self.altitude
        } else {
            body.terrain_altitude(self.coordinates)
        }
    }

    /// Unit vector pointing up from the location, pretending the body is a perfect sphere.
    pub fn surface_up(&self) -> GeoVector {
        self.coordinates.surface_normal()
    }

    /// Get the body-local position of this location.
    pub fn position(&self, body: &Body) -> Point {
        body.surface_position(self.coordinates, self.altitude)
    }
}
