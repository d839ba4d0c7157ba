/*!
 * This is the terrain models module.
 * Adding new models should be done here.
 *
 * New models need:
 * - A struct implementing `TerrainModel` (with `Default`, used for the example configs)
 * - An enum variant containing that struct in `TerrainChoice`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{
    EnumIter,
    IntoEnumIterator,
    IntoStaticStr,
};

use crate::body;
use crate::coordinates::Coordinates;

//
// ------------------------------------------------------------
// Code that requires modification to add a new terrain model
//      |
//      V
//

// Source files for the terrain models
mod flat;
mod ridged;
mod stepped;

/// Terrain models enum.
/// The variant name (snake_case) is the `model` tag in body config files.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(tag = "model", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[enum_dispatch(TerrainModel)]
pub enum TerrainChoice {
    /// Perfect sphere at the body's mean radius.
    Flat(flat::Model),
    /// Smooth sinusoidal hills and valleys.
    Ridged(ridged::Model),
    /// Raised plateau over a longitude band, with cliff edges.
    Stepped(stepped::Model),
}

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new terrain model
//      |
//      V
//

/// Terrain model trait.
/// This trait defines the functions that all terrain models must implement.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait TerrainModel {
    /// Get the display name of the terrain model.
    fn get_model_name(&self) -> &'static str;

    /// Get the terrain radius at the given coordinates, before clamping to the body's bounds.
    fn radius_at(&self, mean_radius: f64, coordinates: Coordinates) -> f64;

    /// Check the model parameters.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

impl Default for TerrainChoice {
    fn default() -> Self {
        TerrainChoice::Flat(flat::Model::default())
    }
}

impl TerrainChoice {
    /// Get the config name of the model (the `model` tag).
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Get the config names of all available models.
    pub fn names() -> Vec<&'static str> {
        TerrainChoice::iter().map(|choice| choice.name()).collect()
    }

    /// Construct a terrain model with default parameters from its config name.
    pub fn from_name(name: &str) -> body::ProcResult<Self> {
        if let Some(choice) = TerrainChoice::iter().find(|choice| choice.name() == name) {
            return Ok(choice);
        }

        let mut error_str = format!("Terrain model not found: {name}\n");
        error_str.push_str("Available models:\n");
        for available in TerrainChoice::names() {
            error_str.push_str(&format!("    {}\n", available));
        }
        body::err_str(&error_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_config_tags() {
        assert_eq!(TerrainChoice::names(), vec!["flat", "ridged", "stepped"]);
        for name in TerrainChoice::names() {
            let choice = TerrainChoice::from_name(name).unwrap();
            let yaml = serde_yaml::to_string(&choice).unwrap();
            assert!(yaml.contains(&format!("model: {name}")), "{yaml}");
        }
    }

    #[test]
    fn unknown_name_lists_models() {
        let error = TerrainChoice::from_name("cratered").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("cratered"));
        assert!(message.contains("ridged"));
    }

    #[test]
    fn defaults_are_valid() {
        for choice in TerrainChoice::iter() {
            assert!(choice.validate().is_ok(), "{}", choice.get_model_name());
        }
    }
}
