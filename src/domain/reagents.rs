//! Reagent records. Data only; any interpretation of targets, residues or
//! safety limits belongs to the calculation layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReagentSet {
    #[serde(default)]
    pub reagents: Vec<Reagent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReagentState {
    #[default]
    Solid,
    Liquid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    pub id: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub state: ReagentState,

    /// Informational only.
    #[serde(default)]
    pub formula: Option<String>,

    /// Purity. Percent for solids; product-specific for liquids.
    #[serde(default)]
    pub assay_percent: Option<f64>,

    /// Liquids only.
    #[serde(default)]
    pub density_g_per_ml: Option<f64>,

    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub targets: Vec<ReagentTarget>,

    #[serde(default)]
    pub calculation: Option<ReagentCalculationProfile>,

    #[serde(default)]
    pub residue: Option<ResidueEffects>,

    #[serde(default)]
    pub safety: Option<SafetyConstraints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReagentTarget {
    /// Max safe adjustment per dose, mg/L.
    #[serde(default)]
    pub max_delta_mg_per_l: Option<f64>,

    /// Max pH change per adjustment step.
    #[serde(default)]
    pub max_ph_shift: Option<f64>,

    /// g/L
    #[serde(default)]
    pub solubility_limit_g_per_l: Option<f64>,

    #[serde(default)]
    pub additional: HashMap<String, f64>,
}

/// Which metrics a reagent affects and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReagentCalculationProfile {
    /// "ph", "chlorine", "chloramine", "alkalinity", ...
    #[serde(default)]
    pub targets: Vec<String>,

    /// g/mol
    #[serde(default)]
    pub molecular_mass: Option<f64>,

    /// Ka, for reagents that shift pH through acid/base equilibria.
    #[serde(default)]
    pub acid_dissociation_constant: Option<f64>,

    /// Keyed by lowercase ion name: "na", "so4", "hplus" (mmol for hplus).
    #[serde(default)]
    pub ion_contributions_mg_per_gram: HashMap<String, f64>,

    /// Usually true for acids such as NaHSO4.
    #[serde(default)]
    pub requires_ph_solver: bool,

    /// e.g. "strong_acid", "reducing_agent"
    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidueEffects {
    #[serde(default)]
    pub sodium_mg_per_g: Option<f64>,
    #[serde(default)]
    pub sulfate_mg_per_g: Option<f64>,
    #[serde(default)]
    pub bicarbonate_mg_per_g: Option<f64>,
    #[serde(default)]
    pub chloride_mg_per_g: Option<f64>,

    #[serde(default)]
    pub additional_residues: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyConstraints {
    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub limits: HashMap<String, f64>,

    #[serde(default)]
    pub notes: Option<String>,
}
