use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantCatalog {
    #[serde(default)]
    pub species: Vec<PlantSpecies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantSpecies {
    pub species_id: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub common_name: Option<String>,

    /// Keyed by stage name, e.g. "seedling", "vegetative".
    #[serde(default)]
    pub stage_profiles: HashMap<String, GrowthStageProfile>,

    #[serde(default)]
    pub cultivars: Vec<PlantCultivar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantCultivar {
    pub cultivar_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub instances: Vec<PlantInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantInstance {
    pub instance_id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub water_source_id: String,
    #[serde(default)]
    pub equipment_ids: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Target ranges for one growth stage. Absent bounds mean no rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthStageProfile {
    #[serde(default)]
    pub ph_min: Option<f64>,
    #[serde(default)]
    pub ph_max: Option<f64>,

    #[serde(default)]
    pub ec_min: Option<f64>,
    #[serde(default)]
    pub ec_max: Option<f64>,

    /// Solution temperature, °C.
    #[serde(default)]
    pub temperature_min_c: Option<f64>,
    #[serde(default)]
    pub temperature_max_c: Option<f64>,

    /// Troubleshooting hints only.
    #[serde(default)]
    pub nutrient_uptake_notes: HashMap<String, String>,
}

impl PlantCatalog {
    pub fn instance_count(&self) -> usize {
        self.species
            .iter()
            .flat_map(|s| s.cultivars.iter())
            .map(|c| c.instances.len())
            .sum()
    }
}
