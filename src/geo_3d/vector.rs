use std::ops::{Add, Sub, Mul, Neg};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::Point;

/// A vector in 3D space.
/// Used for ray directions and surface normals in the body-local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl From<Point> for GeoVector {
    fn from(point: Point) -> Self {
        GeoVector{
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_unit_length() {
        let v = GeoVector::new(3.0, -4.0, 12.0).normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!(!v.has_nan());
    }

    #[test]
    fn zero_vector_normalizes_to_nan() {
        assert!(GeoVector::zero().normalize().has_nan());
    }

    #[test]
    fn surface_offsets() {
        let up = GeoVector::zhat() * 600_000.0;
        let down = -up;
        assert_eq!(up + down, GeoVector::zero());
        assert_eq!((up - down).norm(), 1_200_000.0);
        assert_eq!(GeoVector::from(Point::new(1.0, 2.0, 2.0)).norm_sq(), 9.0);
    }
}
