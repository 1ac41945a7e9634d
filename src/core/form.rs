//! Text-field front end for the dose calculator.
//!
//! Holds the three raw strings a user typed (volume, target, stock), parses
//! them with `.` as the decimal separator regardless of locale, and renders
//! either the dose or the error as a single display line.

use crate::core::calculator::compute_dose_ml;
use crate::domain::model::CalculationRequest;
use crate::utils::error::{Result, WaterChemError};

pub const DEFAULT_DECIMAL_PLACES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoseForm {
    pub volume: String,
    pub target: String,
    pub stock: String,
}

impl DoseForm {
    pub fn new(
        volume: impl Into<String>,
        target: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            volume: volume.into(),
            target: target.into(),
            stock: stock.into(),
        }
    }

    pub fn to_request(&self) -> Result<CalculationRequest> {
        let volume = parse_invariant_decimal(CalculationRequest::VOLUME_FIELD, &self.volume)?;
        let target = parse_invariant_decimal(CalculationRequest::TARGET_FIELD, &self.target)?;
        let stock = parse_invariant_decimal(CalculationRequest::STOCK_FIELD, &self.stock)?;
        Ok(CalculationRequest::new(volume, target, stock))
    }

    pub fn evaluate(&self) -> Result<f64> {
        let request = self.to_request()?;
        compute_dose_ml(&request)
    }

    pub fn render(&self) -> String {
        self.render_with_precision(DEFAULT_DECIMAL_PLACES)
    }

    pub fn render_with_precision(&self, decimal_places: usize) -> String {
        match self.evaluate() {
            Ok(ml) => format_dose(ml, decimal_places),
            Err(e) => format_error(&e),
        }
    }
}

pub fn format_dose(ml: f64, decimal_places: usize) -> String {
    format!("Dose: {:.*} mL", decimal_places, ml)
}

pub fn format_error(error: &WaterChemError) -> String {
    format!("Error: {}", error)
}

/// Accepts an optional sign, digits, a single `.` and an optional exponent.
/// `,` is a thousands separator and may appear anywhere in the integer part
/// after its first digit, so `1,000` and `1,5` read as 1000 and 15.
/// `inf`/`nan` spellings that `f64::from_str` would otherwise take are rejected.
pub fn parse_invariant_decimal(field: &'static str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let parse_error = || WaterChemError::ParseError {
        field,
        input: input.to_string(),
    };

    let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E'));
    if !has_digit || !allowed {
        return Err(parse_error());
    }

    let integer_end = trimmed
        .find(|c| matches!(c, '.' | 'e' | 'E'))
        .unwrap_or(trimmed.len());
    let (integer_part, rest) = trimmed.split_at(integer_end);
    if rest.contains(',') {
        return Err(parse_error());
    }
    if let Some(first_comma) = integer_part.find(',') {
        if !integer_part[..first_comma].chars().any(|c| c.is_ascii_digit()) {
            return Err(parse_error());
        }
    }

    let ungrouped = format!("{}{}", integer_part.replace(',', ""), rest);
    ungrouped.parse::<f64>().map_err(|_| parse_error())
}
