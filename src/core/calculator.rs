use crate::domain::model::CalculationRequest;
use crate::utils::error::Result;
use crate::utils::validation::validate_strictly_positive;

const ML_PER_LITER: f64 = 1000.0;

/// Milliliters of stock solution needed to bring `volume_liters` of solution to
/// `target_ppm`, given a stock of `stock_ppm`.
///
/// 1 ppm is taken as 1 mg/L for both target and stock:
///
/// ```text
/// dose_ml = volume_liters * target_ppm / stock_ppm * 1000
/// ```
///
/// The result is not rounded. Every input must be strictly positive; the first
/// one that is not (checked in field order) is reported.
pub fn compute_dose_ml(request: &CalculationRequest) -> Result<f64> {
    validate_strictly_positive(CalculationRequest::VOLUME_FIELD, request.volume_liters())?;
    validate_strictly_positive(CalculationRequest::TARGET_FIELD, request.target_ppm())?;
    validate_strictly_positive(CalculationRequest::STOCK_FIELD, request.stock_ppm())?;

    let dose_ml =
        request.volume_liters() * request.target_ppm() / request.stock_ppm() * ML_PER_LITER;

    tracing::debug!(
        volume_liters = request.volume_liters(),
        target_ppm = request.target_ppm(),
        stock_ppm = request.stock_ppm(),
        dose_ml,
        "computed dose"
    );

    Ok(dose_ml)
}
