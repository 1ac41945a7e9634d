pub mod calculator;
pub mod catalog;
pub mod form;
pub mod registry;

pub use crate::domain::model::CalculationRequest;
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
