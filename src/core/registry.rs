use crate::domain::equipment::Equipment;
use crate::utils::error::{Result, WaterChemError};
use crate::utils::validation::validate_non_empty_string;
use std::collections::BTreeSet;

pub const DEFAULT_EQUIPMENT_TYPES: &[&str] = &[
    "ph_meter",
    "ec_meter",
    "thermometer",
    "multiparameter_probe",
    "scale",
    "pump",
];

pub const DEFAULT_MEASUREMENTS: &[&str] = &["ph", "ec", "tds", "temperature", "mass", "flow"];

/// Known equipment kinds and measurement names.
///
/// Both are open sets: new devices are added at runtime or from the
/// `[registry]` config section instead of by extending an enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    equipment_types: BTreeSet<String>,
    measurements: BTreeSet<String>,
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase()
}

impl TypeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for t in DEFAULT_EQUIPMENT_TYPES {
            registry.register_equipment_type(t);
        }
        for m in DEFAULT_MEASUREMENTS {
            registry.register_measurement(m);
        }
        registry
    }

    /// Returns false if the type was already known.
    pub fn register_equipment_type(&mut self, equipment_type: &str) -> bool {
        self.equipment_types.insert(normalize(equipment_type))
    }

    pub fn register_measurement(&mut self, measurement: &str) -> bool {
        self.measurements.insert(normalize(measurement))
    }

    pub fn extend<'a, T, M>(&mut self, equipment_types: T, measurements: M)
    where
        T: IntoIterator<Item = &'a String>,
        M: IntoIterator<Item = &'a String>,
    {
        for t in equipment_types {
            self.register_equipment_type(t);
        }
        for m in measurements {
            self.register_measurement(m);
        }
    }

    pub fn is_equipment_type(&self, equipment_type: &str) -> bool {
        self.equipment_types.contains(&normalize(equipment_type))
    }

    pub fn is_measurement(&self, measurement: &str) -> bool {
        self.measurements.contains(&normalize(measurement))
    }

    pub fn equipment_types(&self) -> impl Iterator<Item = &str> {
        self.equipment_types.iter().map(String::as_str)
    }

    pub fn measurements(&self) -> impl Iterator<Item = &str> {
        self.measurements.iter().map(String::as_str)
    }

    pub fn check_equipment(&self, equipment: &Equipment) -> Result<()> {
        validate_non_empty_string("equipment.id", &equipment.id).map_err(|_| {
            WaterChemError::ValidationError {
                message: "equipment entry has an empty id".to_string(),
            }
        })?;

        if !self.is_equipment_type(&equipment.equipment_type) {
            return Err(WaterChemError::UnknownIdentifier {
                kind: "equipment type",
                value: equipment.equipment_type.clone(),
                context: format!("equipment '{}'", equipment.id),
            });
        }

        if let Some(unknown) = equipment
            .measurements
            .iter()
            .find(|m| !self.is_measurement(m))
        {
            return Err(WaterChemError::UnknownIdentifier {
                kind: "measurement",
                value: unknown.clone(),
                context: format!("equipment '{}'", equipment.id),
            });
        }

        Ok(())
    }
}
