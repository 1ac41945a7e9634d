use serde::{Deserialize, Serialize};

/// Inputs for a single dose calculation.
///
/// Concentrations are in ppm, treated as mg/L. The value is never mutated after
/// construction; build a new one per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    volume_liters: f64,
    target_ppm: f64,
    stock_ppm: f64,
}

impl CalculationRequest {
    pub const VOLUME_FIELD: &'static str = "volume_liters";
    pub const TARGET_FIELD: &'static str = "target_ppm";
    pub const STOCK_FIELD: &'static str = "stock_ppm";

    pub fn new(volume_liters: f64, target_ppm: f64, stock_ppm: f64) -> Self {
        Self {
            volume_liters,
            target_ppm,
            stock_ppm,
        }
    }

    pub fn volume_liters(&self) -> f64 {
        self.volume_liters
    }

    pub fn target_ppm(&self) -> f64 {
        self.target_ppm
    }

    pub fn stock_ppm(&self) -> f64 {
        self.stock_ppm
    }
}
