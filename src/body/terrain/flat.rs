use serde::{Serialize, Deserialize};

use crate::body::terrain::TerrainModel;
use crate::coordinates::Coordinates;

/// Flat terrain model: the surface is the mean-radius sphere.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Model {}

impl TerrainModel for Model {
    fn get_model_name(&self) -> &'static str {
        "Flat"
    }

    fn radius_at(&self, mean_radius: f64, _coordinates: Coordinates) -> f64 {
        mean_radius
    }
}
