//! Value records passed to and returned from the calculators

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bmi::calculate_bmi;
use crate::errors::HealthResult;
use crate::units::{HeightUnit, WeightUnit};

/// Gender, used only by the diet planner's basal rate formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Get the lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// A person whose biometrics are measured
///
/// Height is stored in meters and weight in kilograms. Age and gender are
/// only needed for diet planning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    height: f64,
    weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
}

impl Coder {
    /// Create a coder from height (m) and weight (kg)
    pub fn new(height: f64, weight: f64) -> Self {
        Self {
            height,
            weight,
            age: None,
            gender: None,
        }
    }

    /// Create a coder with the full profile needed by the diet planner
    pub fn with_profile(height: f64, weight: f64, age: u32, gender: Gender) -> Self {
        Self {
            height,
            weight,
            age: Some(age),
            gender: Some(gender),
        }
    }

    /// Create a coder from measurements in arbitrary units
    pub fn from_units(
        height: f64,
        height_unit: HeightUnit,
        weight: f64,
        weight_unit: WeightUnit,
    ) -> Self {
        Self::new(height_unit.to_meters(height), weight_unit.to_kg(weight))
    }

    /// Height in meters
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Age in years, if known
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Gender, if known
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Unrounded BMI of this coder
    pub fn bmi(&self) -> HealthResult<f64> {
        calculate_bmi(self.weight, self.height)
    }
}

/// Daily intake targets produced by [`crate::DietPlanner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietPlan {
    /// Energy in kcal
    pub calories: u32,
    /// Grams of protein
    pub protein: u32,
    /// Grams of fat
    pub fat: u32,
    /// Grams of carbohydrate
    pub carbohydrate: u32,
}

impl DietPlan {
    /// Create a plan from calories and macronutrient grams
    pub fn new(calories: u32, protein: u32, fat: u32, carbohydrate: u32) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbohydrate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coder_accessors() {
        let coder = Coder::with_profile(1.82, 75.0, 26, Gender::Male);
        assert_eq!(coder.height(), 1.82);
        assert_eq!(coder.weight(), 75.0);
        assert_eq!(coder.age(), Some(26));
        assert_eq!(coder.gender(), Some(Gender::Male));

        let coder = Coder::new(1.80, 60.0);
        assert_eq!(coder.age(), None);
        assert_eq!(coder.gender(), None);
    }

    #[test]
    fn test_coder_equality_is_field_based() {
        assert_eq!(Coder::new(1.82, 98.0), Coder::new(1.82, 98.0));
        assert_ne!(Coder::new(1.82, 98.0), Coder::new(1.82, 64.7));
        assert_ne!(
            Coder::new(1.82, 75.0),
            Coder::with_profile(1.82, 75.0, 26, Gender::Male)
        );
    }

    #[test]
    fn test_coder_from_units() {
        let coder = Coder::from_units(182.0, HeightUnit::Cm, 75.0, WeightUnit::Kg);
        assert!((coder.height() - 1.82).abs() < 1e-9);
        assert_eq!(coder.weight(), 75.0);
    }

    #[test]
    fn test_coder_bmi() {
        let bmi = Coder::new(1.80, 60.0).bmi().unwrap();
        assert!((bmi - 18.518).abs() < 0.001);
        assert!(Coder::new(0.0, 60.0).bmi().unwrap_err().is_arithmetic());
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn test_serde_shape() {
        let coder = Coder::new(1.8, 60.0);
        let json = serde_json::to_string(&coder).unwrap();
        assert_eq!(json, r#"{"height":1.8,"weight":60.0}"#);

        let coder: Coder =
            serde_json::from_str(r#"{"height":1.82,"weight":75.0,"age":26,"gender":"male"}"#)
                .unwrap();
        assert_eq!(coder, Coder::with_profile(1.82, 75.0, 26, Gender::Male));

        let plan = DietPlan::new(2202, 110, 73, 275);
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(json["carbohydrate"], 275);
    }
}
