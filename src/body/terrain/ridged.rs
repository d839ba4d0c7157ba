use serde::{Serialize, Deserialize};

use crate::body::terrain::TerrainModel;
use crate::coordinates::Coordinates;

/// Ridged terrain model.
/// Height above the mean radius is `offset + amplitude * sin(lat_frequency * lat) * cos(lon_frequency * lon)`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    #[serde(default = "Model::default_amplitude")]
    amplitude: f64,
    #[serde(default = "Model::default_offset")]
    offset: f64,
    #[serde(default = "Model::default_lat_frequency")]
    lat_frequency: f64,
    #[serde(default = "Model::default_lon_frequency")]
    lon_frequency: f64,
}
impl Model {
    pub fn default_amplitude() -> f64 {
        3000.0
    }
    pub fn default_offset() -> f64 {
        1000.0
    }
    pub fn default_lat_frequency() -> f64 {
        4.0
    }
    pub fn default_lon_frequency() -> f64 {
        6.0
    }
}
impl Default for Model {
    fn default() -> Self {
        Model{
            amplitude: Model::default_amplitude(),
            offset: Model::default_offset(),
            lat_frequency: Model::default_lat_frequency(),
            lon_frequency: Model::default_lon_frequency(),
        }
    }
}

impl TerrainModel for Model {
    fn get_model_name(&self) -> &'static str {
        "Ridged"
    }

    fn radius_at(&self, mean_radius: f64, coordinates: Coordinates) -> f64 {
        let lat = coordinates.latitude.to_radians();
        let lon = coordinates.longitude.to_radians();
        mean_radius + self.offset + self.amplitude * (self.lat_frequency * lat).sin() * (self.lon_frequency * lon).cos()
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.amplitude.is_finite() && self.offset.is_finite()) {
            return Err("Ridged terrain amplitude and offset must be finite".to_string());
        }
        if !(self.lat_frequency.is_finite() && self.lon_frequency.is_finite()) {
            return Err("Ridged terrain frequencies must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_sits_at_offset() {
        let model = Model::default();
        let radius = model.radius_at(1000.0, Coordinates::new(0.0, 37.0));
        assert!((radius - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let model: Model = serde_json::from_str(r#"{"amplitude": 10.0}"#).unwrap();
        assert_eq!(model.amplitude, 10.0);
        assert_eq!(model.offset, Model::default_offset());
    }
}
