use crate::utils::error::{Result, WaterChemError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negative and NaN values.
pub fn validate_strictly_positive(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WaterChemError::InvalidInput { field, value })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WaterChemError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WaterChemError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WaterChemError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WaterChemError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_strictly_positive() {
        assert!(validate_strictly_positive("volume_liters", 0.001).is_ok());
        assert!(validate_strictly_positive("volume_liters", 0.0).is_err());
        assert!(validate_strictly_positive("volume_liters", -3.0).is_err());
        assert!(validate_strictly_positive("volume_liters", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_strictly_positive_names_field() {
        match validate_strictly_positive("stock_ppm", 0.0) {
            Err(WaterChemError::InvalidInput { field, value }) => {
                assert_eq!(field, "stock_ppm");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.equipment_path", "equipment.json").is_ok());
        assert!(validate_path("catalog.equipment_path", "").is_err());
        assert!(validate_path("catalog.equipment_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.decimal_places", 2u8, 0, 6).is_ok());
        assert!(validate_range("display.decimal_places", 9u8, 0, 6).is_err());
    }
}
