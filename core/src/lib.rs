//! Healthy Coder core library
//!
//! Pure calculators for body-mass index, weekly activity rating and daily
//! diet targets, plus the value records they operate on. Used directly by
//! Rust callers and through the WASM bindings.

pub mod activity;
pub mod bmi;
pub mod config;
pub mod diet;
pub mod errors;
pub mod models;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use activity::{rate_activity_level, ActivityRating, WORKOUT_DURATION_MINUTES};
pub use bmi::{
    bmi_scores, calculate_bmi, find_worst_bmi_coder, is_diet_recommended, DIET_RECOMMENDED_BMI,
};
pub use config::{DietConfig, PlannerConfig};
pub use diet::DietPlanner;
pub use errors::*;
pub use models::{Coder, DietPlan, Gender};
pub use units::{HeightUnit, WeightUnit};
