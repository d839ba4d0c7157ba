use std::fmt;
use serde::{Serialize, Deserialize};

use crate::angle::{
    self,
    Degrees,
};
use crate::geo_3d::{GeoVector, Point};

/// Latitude/longitude pair, in degrees.
/// Construction does not normalize: longitude may be outside `(-180, 180]`
/// until it is clamped for display or by the surface resolver.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: Degrees,
    #[serde(alias = "lon")]
    pub longitude: Degrees,
}
impl Coordinates {
    /// Create new coordinates.
    pub fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Coordinates{latitude, longitude}
    }

    /// Get the coordinates of a body-local point (the point's radius is ignored).
    /// The longitude is returned in `(-180, 180]`; a point on the polar axis gets longitude 0.
    pub fn from_local_point(point: &Point) -> Self {
        let radius = point.radius();
        if radius == 0.0 {
            return Coordinates::default();
        }
        let latitude = (point.z / radius).clamp(-1.0, 1.0).asin().to_degrees();
        let longitude = point.y.atan2(point.x).to_degrees();
        Coordinates{latitude, longitude}
    }

    /// Unit vector from the body's center through these coordinates,
    /// pretending the body is a perfect sphere.
    pub fn surface_normal(&self) -> GeoVector {
        let (lat_sin, lat_cos) = self.latitude.to_radians().sin_cos();
        let (lon_sin, lon_cos) = self.longitude.to_radians().sin_cos();
        GeoVector::new(lat_cos * lon_cos, lat_cos * lon_sin, lat_sin)
    }

    /// Longitude clamped into `(-180, 180]`.
    pub fn clamped_longitude(&self) -> Degrees {
        angle::clamp_180(self.longitude)
    }

    /// Format as decimal degrees with hemisphere letters, e.g. `12.345° N, 98.765° W`.
    pub fn to_string_decimal(&self, newline: bool, precision: usize) -> String {
        let longitude = self.clamped_longitude();
        format!(
            "{:.*}° {}{}{:.*}° {}",
            precision, self.latitude.abs(), north_south(self.latitude),
            separator(newline),
            precision, longitude.abs(), east_west(longitude),
        )
    }

    /// Format as degrees/minutes/seconds with hemisphere letters, e.g. `12° 20' 42" N, 98° 45' 54" W`.
    pub fn to_string_dms(&self, newline: bool) -> String {
        let longitude = self.clamped_longitude();
        format!(
            "{} {}{}{} {}",
            angle::format_dms(self.latitude), north_south(self.latitude),
            separator(newline),
            angle::format_dms(longitude), east_west(longitude),
        )
    }

    /// Parse user-typed latitude and longitude, each in decimal or DMS notation.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, String> {
        let latitude = parse_angle(latitude).ok_or_else(|| format!("Invalid latitude: {latitude}"))?;
        let longitude = parse_angle(longitude).ok_or_else(|| format!("Invalid longitude: {longitude}"))?;
        Ok(Coordinates{latitude, longitude})
    }
}
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "{}", self.to_string_decimal(false, precision))
    }
}

/// Parse a single angle written either in DMS notation or as a plain decimal number.
/// Non-finite decimals are rejected.
pub fn parse_angle(text: &str) -> Option<Degrees> {
    if let Some(value) = angle::parse_dms(text) {
        return Some(value);
    }
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// Zero counts as south/west
fn north_south(latitude: Degrees) -> &'static str {
    if latitude > 0.0 { "N" } else { "S" }
}

fn east_west(longitude: Degrees) -> &'static str {
    if longitude > 0.0 { "E" } else { "W" }
}

fn separator(newline: bool) -> &'static str {
    if newline { "\n" } else { ", " }
}
