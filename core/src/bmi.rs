//! BMI calculator
//!
//! BMI = weight(kg) / height(m)². A zero height is reported as
//! [`HealthError::Arithmetic`] rather than yielding an infinite BMI.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::errors::{HealthError, HealthResult};
use crate::models::Coder;

/// BMI at or above which a diet is recommended
pub const DIET_RECOMMENDED_BMI: f64 = 25.0;

/// Decimal places kept by [`bmi_scores`]
const SCORE_DECIMAL_PLACES: u32 = 2;

/// Calculate BMI from weight (kg) and height (m)
pub fn calculate_bmi(weight: f64, height: f64) -> HealthResult<f64> {
    if height == 0.0 {
        return Err(HealthError::Arithmetic(
            "division by zero: height is 0".to_string(),
        ));
    }
    let bmi = weight / (height * height);
    if !bmi.is_finite() {
        return Err(HealthError::Arithmetic(format!(
            "BMI is not a finite number for weight={} height={}",
            weight, height
        )));
    }
    Ok(bmi)
}

/// Whether a coder of this weight (kg) and height (m) should go on a diet
pub fn is_diet_recommended(weight: f64, height: f64) -> HealthResult<bool> {
    let bmi = calculate_bmi(weight, height)?;
    let recommended = bmi >= DIET_RECOMMENDED_BMI;
    debug!(weight, height, bmi, recommended, "diet recommendation");
    Ok(recommended)
}

/// Find the coder with the highest BMI
///
/// Returns `None` for an empty slice. When several coders share the highest
/// BMI the first one wins.
pub fn find_worst_bmi_coder(coders: &[Coder]) -> HealthResult<Option<&Coder>> {
    let mut worst: Option<(&Coder, f64)> = None;
    for coder in coders {
        let bmi = coder.bmi()?;
        match worst {
            Some((_, worst_bmi)) if bmi <= worst_bmi => {}
            _ => worst = Some((coder, bmi)),
        }
    }

    if let Some((_, bmi)) = worst {
        debug!(candidates = coders.len(), bmi, "found worst BMI coder");
    }
    Ok(worst.map(|(coder, _)| coder))
}

/// BMI of every coder, in input order, rounded half-up to two decimals
pub fn bmi_scores(coders: &[Coder]) -> HealthResult<Vec<f64>> {
    coders
        .iter()
        .map(|coder| coder.bmi().map(round_score))
        .collect()
}

/// Round half-up to [`SCORE_DECIMAL_PLACES`]
///
/// Values beyond the `Decimal` range (about 7.9e28) carry no fractional
/// digits in an f64 anyway and are returned unchanged.
fn round_score(bmi: f64) -> f64 {
    Decimal::from_f64(bmi)
        .map(|d| {
            d.round_dp_with_strategy(SCORE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        })
        .and_then(|d| d.to_f64())
        .unwrap_or(bmi)
}
