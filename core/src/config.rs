//! Configuration for the diet planner
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. Optional TOML file (config/healthy_coder.toml)
//! 3. Environment variables (prefix: HC__)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::HealthResult;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/healthy_coder.toml";

/// Environment variable prefix, e.g. `HC__DIET__PROTEIN_PERCENT=25`
pub const ENV_PREFIX: &str = "HC";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    #[serde(default)]
    pub diet: DietConfig,
}

/// Macronutrient split, in percent of daily calories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietConfig {
    pub protein_percent: u32,
    pub fat_percent: u32,
    pub carbohydrate_percent: u32,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            protein_percent: 20,
            fat_percent: 30,
            carbohydrate_percent: 50,
        }
    }
}

impl PlannerConfig {
    /// Load from defaults, [`DEFAULT_CONFIG_FILE`] if present, then `HC__` variables
    pub fn load() -> HealthResult<Self> {
        Self::build(Path::new(DEFAULT_CONFIG_FILE), ENV_PREFIX)
    }

    /// Same as [`PlannerConfig::load`] with a custom file location
    pub fn load_from(path: impl AsRef<Path>) -> HealthResult<Self> {
        Self::build(path.as_ref(), ENV_PREFIX)
    }

    fn build(file: &Path, env_prefix: &str) -> HealthResult<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&PlannerConfig::default())?)
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        let loaded: PlannerConfig = config.try_deserialize()?;
        tracing::debug!(
            file = %file.display(),
            protein = loaded.diet.protein_percent,
            fat = loaded.diet.fat_percent,
            carbohydrate = loaded.diet.carbohydrate_percent,
            "loaded planner configuration"
        );
        Ok(loaded)
    }
}
