//! Healthy Coder WASM Module
//!
//! WebAssembly bindings exposing the core calculators to browser callers.
//! Calculator errors surface as JavaScript `Error`s carrying the message.

use healthy_coder_core::{Coder, DietPlanner, Gender};
use wasm_bindgen::prelude::*;

/// Whether a diet is recommended for weight (kg) and height (m)
#[wasm_bindgen(js_name = isDietRecommended)]
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool, JsError> {
    Ok(healthy_coder_core::is_diet_recommended(weight, height)?)
}

/// Rounded BMI scores for parallel height (m) / weight (kg) arrays
#[wasm_bindgen(js_name = bmiScores)]
pub fn bmi_scores(heights: &[f64], weights: &[f64]) -> Result<Vec<f64>, JsError> {
    let coders = zip_coders(heights, weights)?;
    Ok(healthy_coder_core::bmi_scores(&coders)?)
}

/// Index of the entry with the highest BMI, or `undefined` for empty input
#[wasm_bindgen(js_name = findWorstBmiIndex)]
pub fn find_worst_bmi_index(heights: &[f64], weights: &[f64]) -> Result<Option<u32>, JsError> {
    let coders = zip_coders(heights, weights)?;
    let worst = healthy_coder_core::find_worst_bmi_coder(&coders)?;
    Ok(worst.and_then(|coder| {
        coders
            .iter()
            .position(|candidate| std::ptr::eq(candidate, coder))
            .and_then(|index| u32::try_from(index).ok())
    }))
}

/// Activity rating ("bad", "average" or "good")
#[wasm_bindgen(js_name = rateActivityLevel)]
pub fn rate_activity_level(
    weekly_cardio_minutes: i32,
    weekly_workout_sessions: i32,
) -> Result<String, JsError> {
    let rating =
        healthy_coder_core::rate_activity_level(weekly_cardio_minutes, weekly_workout_sessions)?;
    Ok(rating.as_str().to_string())
}

/// Daily diet plan, serialized as JSON
#[wasm_bindgen(js_name = calculateDiet)]
#[allow(clippy::too_many_arguments)]
pub fn calculate_diet(
    protein_percent: u32,
    fat_percent: u32,
    carbohydrate_percent: u32,
    height: f64,
    weight: f64,
    age: u32,
    gender: &str,
) -> Result<String, JsError> {
    let gender: Gender = gender.parse().map_err(|e: String| JsError::new(&e))?;
    let planner = DietPlanner::new(protein_percent, fat_percent, carbohydrate_percent);
    let plan = planner.calculate_diet(&Coder::with_profile(height, weight, age, gender))?;
    Ok(serde_json::to_string(&plan)?)
}

fn zip_coders(heights: &[f64], weights: &[f64]) -> Result<Vec<Coder>, JsError> {
    if heights.len() != weights.len() {
        return Err(JsError::new(&format!(
            "heights and weights differ in length ({} vs {})",
            heights.len(),
            weights.len()
        )));
    }
    Ok(heights
        .iter()
        .zip(weights)
        .map(|(&height, &weight)| Coder::new(height, weight))
        .collect())
}
