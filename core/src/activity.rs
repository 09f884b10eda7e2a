//! Weekly activity rating

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::errors::HealthResult;
use crate::validation::validate_non_negative;

/// Minutes credited for every workout session
pub const WORKOUT_DURATION_MINUTES: i64 = 45;

/// Average daily minutes below which activity is rated bad
const BAD_BELOW_DAILY_MINUTES: f64 = 20.0;
/// Average daily minutes below which activity is rated average
const AVERAGE_BELOW_DAILY_MINUTES: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityRating {
    Bad,
    Average,
    Good,
}

impl ActivityRating {
    /// Get the rating name ("bad", "average" or "good")
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityRating::Bad => "bad",
            ActivityRating::Average => "average",
            ActivityRating::Good => "good",
        }
    }
}

impl fmt::Display for ActivityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bad" => Ok(ActivityRating::Bad),
            "average" => Ok(ActivityRating::Average),
            "good" => Ok(ActivityRating::Good),
            _ => Err(format!("Unknown activity rating: {}", s)),
        }
    }
}

/// Rate a week of activity
///
/// Every workout session counts as [`WORKOUT_DURATION_MINUTES`] on top of
/// the cardio minutes. The weekly total is averaged over 7 days and compared
/// against 20 and 40 minutes; a value exactly on a threshold falls into the
/// higher band.
pub fn rate_activity_level(
    weekly_cardio_minutes: i32,
    weekly_workout_sessions: i32,
) -> HealthResult<ActivityRating> {
    validate_non_negative("weekly cardio minutes", weekly_cardio_minutes)?;
    validate_non_negative("weekly workout sessions", weekly_workout_sessions)?;

    let total_minutes = i64::from(weekly_cardio_minutes)
        + i64::from(weekly_workout_sessions) * WORKOUT_DURATION_MINUTES;
    let daily_average = total_minutes as f64 / 7.0;

    let rating = if daily_average < BAD_BELOW_DAILY_MINUTES {
        ActivityRating::Bad
    } else if daily_average < AVERAGE_BELOW_DAILY_MINUTES {
        ActivityRating::Average
    } else {
        ActivityRating::Good
    };

    debug!(weekly_minutes = total_minutes, daily_average, %rating, "rated activity level");
    Ok(rating)
}
