//! Input validation helpers shared by the calculators

use crate::errors::{HealthError, HealthResult};

/// Reject negative counts and durations
pub fn validate_non_negative(field: &str, value: i32) -> HealthResult<()> {
    if value < 0 {
        return Err(HealthError::InvalidInput(format!(
            "{} cannot be negative (got {})",
            field, value
        )));
    }
    Ok(())
}

/// Validate a percentage value (0-100)
pub fn validate_percentage(field: &str, value: u32) -> HealthResult<()> {
    if value > 100 {
        return Err(HealthError::InvalidInput(format!(
            "{} must be between 0 and 100 (got {})",
            field, value
        )));
    }
    Ok(())
}

/// Validate that a macronutrient split covers exactly 100% of calories
pub fn validate_macro_split(protein: u32, fat: u32, carbohydrate: u32) -> HealthResult<()> {
    validate_percentage("Protein percentage", protein)?;
    validate_percentage("Fat percentage", fat)?;
    validate_percentage("Carbohydrate percentage", carbohydrate)?;

    let total = protein + fat + carbohydrate;
    if total != 100 {
        return Err(HealthError::InvalidInput(format!(
            "Macronutrient split must sum to 100% (got {}%)",
            total
        )));
    }
    Ok(())
}
