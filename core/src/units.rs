//! Unit conversion for biometric inputs
//!
//! Calculators work in meters and kilograms. Callers holding other units
//! convert at the boundary through [`HeightUnit`] and [`WeightUnit`]
//! (see [`crate::Coder::from_units`]).

use serde::{Deserialize, Serialize};
use std::fmt;

const CM_PER_INCH: f64 = 2.54;
const KG_PER_POUND: f64 = 0.453_592_37;
const KG_PER_STONE: f64 = 6.350_293_18;

// ============================================================================
// Height Units
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Meters,
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert a height given in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Meters => value,
            HeightUnit::Cm => value / 100.0,
            HeightUnit::Inches => value * CM_PER_INCH / 100.0,
        }
    }

    /// Convert meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            HeightUnit::Meters => meters,
            HeightUnit::Cm => meters * 100.0,
            HeightUnit::Inches => meters * 100.0 / CM_PER_INCH,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Meters => "m",
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(HeightUnit::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Weight Units
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone,
}

impl WeightUnit {
    /// Convert a weight given in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        value * self.kg_per_unit()
    }

    /// Kilograms in one of this unit
    fn kg_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kg => 1.0,
            WeightUnit::Lbs => KG_PER_POUND,
            WeightUnit::Stone => KG_PER_STONE,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        })
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    /// Accepts the symbol or the name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => WeightUnit::Kg,
            "lb" | "lbs" | "pound" | "pounds" => WeightUnit::Lbs,
            "st" | "stone" | "stones" => WeightUnit::Stone,
            other => return Err(format!("Unknown weight unit: {}", other)),
        };
        Ok(unit)
    }
}
