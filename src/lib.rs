pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, toml_config::AppConfig};
pub use crate::core::{
    calculator::compute_dose_ml, catalog::CatalogLoader, form::DoseForm,
    registry::TypeRegistry,
};
pub use domain::model::CalculationRequest;
pub use utils::error::{Result, WaterChemError};
