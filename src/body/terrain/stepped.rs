use serde::{Serialize, Deserialize};

use crate::angle;
use crate::body::terrain::TerrainModel;
use crate::coordinates::Coordinates;

/// Stepped terrain model.
/// A plateau `height` above the mean radius between two longitudes, sheer cliffs at its edges.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    #[serde(default = "Model::default_height")]
    height: f64,
    #[serde(default = "Model::default_west")]
    west: f64,
    #[serde(default = "Model::default_east")]
    east: f64,
}
impl Model {
    pub fn default_height() -> f64 {
        2000.0
    }
    pub fn default_west() -> f64 {
        -30.0
    }
    pub fn default_east() -> f64 {
        30.0
    }
}
impl Default for Model {
    fn default() -> Self {
        Model{
            height: Model::default_height(),
            west: Model::default_west(),
            east: Model::default_east(),
        }
    }
}

impl TerrainModel for Model {
    fn get_model_name(&self) -> &'static str {
        "Stepped"
    }

    fn radius_at(&self, mean_radius: f64, coordinates: Coordinates) -> f64 {
        let longitude = angle::clamp_180(coordinates.longitude);
        if (self.west..=self.east).contains(&longitude) {
            mean_radius + self.height
        } else {
            mean_radius
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.height.is_finite() {
            return Err("Stepped terrain height must be finite".to_string());
        }
        if !(self.west < self.east) {
            return Err(format!("Stepped terrain west edge ({}) must be below east edge ({})", self.west, self.east));
        }
        Ok(())
    }
}
