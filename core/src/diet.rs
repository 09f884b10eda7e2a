//! Diet planner
//!
//! Daily calories come from the Mifflin-St Jeor basal rate scaled by a
//! light activity factor:
//!
//! - Male: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
//! - Female: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
//! - Calories = BMR × 1.25
//!
//! Both steps truncate to whole kcal. The calories are then split into
//! protein, fat and carbohydrate grams using the planner's percentages.

use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::errors::{HealthError, HealthResult};
use crate::models::{Coder, DietPlan, Gender};
use crate::units::HeightUnit;
use crate::validation::validate_macro_split;

/// Multiplier from basal rate to daily calories
const ACTIVITY_FACTOR: f64 = 1.25;

const KCAL_PER_GRAM_PROTEIN: u64 = 4;
const KCAL_PER_GRAM_FAT: u64 = 9;
const KCAL_PER_GRAM_CARBOHYDRATE: u64 = 4;

/// Computes [`DietPlan`]s for a fixed macronutrient split
///
/// The three percentages are expected to sum to 100. [`DietPlanner::new`]
/// accepts any split and only logs a warning; use [`DietPlanner::try_new`]
/// to reject an inconsistent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietPlanner {
    protein_percent: u32,
    fat_percent: u32,
    carbohydrate_percent: u32,
}

impl DietPlanner {
    /// Create a planner, logging a warning if the split does not sum to 100%
    pub fn new(protein_percent: u32, fat_percent: u32, carbohydrate_percent: u32) -> Self {
        let total = u64::from(protein_percent)
            + u64::from(fat_percent)
            + u64::from(carbohydrate_percent);
        if total != 100 {
            warn!(
                protein_percent,
                fat_percent,
                carbohydrate_percent,
                total,
                "macronutrient split does not sum to 100%"
            );
        }
        Self {
            protein_percent,
            fat_percent,
            carbohydrate_percent,
        }
    }

    /// Like [`DietPlanner::new`] but fails unless the split sums to 100%
    pub fn try_new(
        protein_percent: u32,
        fat_percent: u32,
        carbohydrate_percent: u32,
    ) -> HealthResult<Self> {
        validate_macro_split(protein_percent, fat_percent, carbohydrate_percent)?;
        Ok(Self::new(protein_percent, fat_percent, carbohydrate_percent))
    }

    /// Create a planner from the configured default split
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            config.diet.protein_percent,
            config.diet.fat_percent,
            config.diet.carbohydrate_percent,
        )
    }

    /// Share of calories from protein, in percent
    pub fn protein_percent(&self) -> u32 {
        self.protein_percent
    }

    /// Share of calories from fat, in percent
    pub fn fat_percent(&self) -> u32 {
        self.fat_percent
    }

    /// Share of calories from carbohydrate, in percent
    pub fn carbohydrate_percent(&self) -> u32 {
        self.carbohydrate_percent
    }

    /// Compute the daily plan for a coder
    ///
    /// The coder must carry both age and gender.
    pub fn calculate_diet(&self, coder: &Coder) -> HealthResult<DietPlan> {
        let age = coder.age().ok_or_else(|| {
            HealthError::InvalidInput("age is required to plan a diet".to_string())
        })?;
        let gender = coder.gender().ok_or_else(|| {
            HealthError::InvalidInput("gender is required to plan a diet".to_string())
        })?;

        let bmr = basal_metabolic_rate(coder.weight(), coder.height(), age, gender)?;
        let calories = (f64::from(bmr) * ACTIVITY_FACTOR) as u32;

        let plan = DietPlan::new(
            calories,
            macro_grams(calories, self.protein_percent, KCAL_PER_GRAM_PROTEIN),
            macro_grams(calories, self.fat_percent, KCAL_PER_GRAM_FAT),
            macro_grams(calories, self.carbohydrate_percent, KCAL_PER_GRAM_CARBOHYDRATE),
        );
        debug!(bmr, calories, ?plan, "calculated diet plan");
        Ok(plan)
    }
}

impl Default for DietPlanner {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

/// Basal metabolic rate in whole kcal
fn basal_metabolic_rate(weight: f64, height: f64, age: u32, gender: Gender) -> HealthResult<u32> {
    let height_cm = HeightUnit::Cm.from_meters(height);
    let base = 10.0 * weight + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };

    if !bmr.is_finite() || bmr < 1.0 {
        return Err(HealthError::InvalidInput(format!(
            "profile yields no positive basal metabolic rate (weight={}, height={}, age={})",
            weight, height, age
        )));
    }
    Ok(bmr.trunc() as u32)
}

/// Grams of a macronutrient receiving `percent` of `calories`, truncated
fn macro_grams(calories: u32, percent: u32, kcal_per_gram: u64) -> u32 {
    let grams = u64::from(calories) * u64::from(percent) / (100 * kcal_per_gram);
    u32::try_from(grams).unwrap_or(u32::MAX)
}
