//! Measurement devices: pH meters, EC/TDS meters, thermometers, combination
//! probes. Pure data loaded from catalog files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mirrors the layout of `equipment.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSet {
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,

    /// Free-form kind such as "ph_meter" or "ec_meter", checked against the
    /// type registry rather than a fixed enum.
    #[serde(rename = "type", default)]
    pub equipment_type: String,

    #[serde(default)]
    pub display_name: String,

    /// e.g. ["ph", "temperature"]
    #[serde(default)]
    pub measurements: Vec<String>,

    /// Built-in automatic temperature compensation.
    #[serde(default)]
    pub temperature_compensated: bool,

    /// Per-measurement tolerance, e.g. { "ph": 0.01, "ec": 2.0 }
    #[serde(default)]
    pub tolerance: HashMap<String, f64>,

    #[serde(default = "default_true")]
    pub tolerance_default_allowed: bool,

    #[serde(default)]
    pub calibration: CalibrationProfile,

    #[serde(default)]
    pub replaceable_parts: ReplaceablePartsProfile,

    #[serde(default)]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Equipment {
    pub fn new(id: impl Into<String>, equipment_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            equipment_type: equipment_type.into(),
            display_name: String::new(),
            measurements: Vec::new(),
            temperature_compensated: false,
            tolerance: HashMap::new(),
            tolerance_default_allowed: true,
            calibration: CalibrationProfile::default(),
            replaceable_parts: ReplaceablePartsProfile::default(),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    #[serde(default)]
    pub required: bool,

    /// Calibration solution labels, e.g. ["pH 4.00", "pH 7.00"]
    #[serde(default)]
    pub solutions: Vec<String>,

    #[serde(default)]
    pub history: Vec<CalibrationRecord>,

    /// None means no day-based expiry.
    #[serde(default)]
    pub valid_days: Option<u32>,

    /// None means no usage-based expiry.
    #[serde(default)]
    pub valid_reading_count: Option<u32>,

    #[serde(default)]
    pub use_based_recommendations: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    /// RFC 3339 on the wire.
    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub technician: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Readings taken during calibration, keyed by measurement name.
    #[serde(default)]
    pub results: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaceablePartsProfile {
    #[serde(default)]
    pub has_replaceable_parts: bool,

    #[serde(default)]
    pub parts: Vec<ReplaceablePart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaceablePart {
    pub name: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
