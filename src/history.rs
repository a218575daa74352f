use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use tracing::{info, warn};

use crate::error::HistoryError;
use crate::models::Workout;

/// Parses a recorded workout history, keeping the order it was stored in.
///
/// Records whose `created_at` is not a recognisable timestamp are kept; the
/// view falls back to showing the raw string, so they only earn a warning.
pub fn parse_workouts(json: &str) -> Result<Vec<Workout>, HistoryError> {
    let workouts: Vec<Workout> = serde_json::from_str(json)?;
    for workout in &workouts {
        if !is_valid_timestamp(&workout.created_at) {
            warn!(workout_id = %workout.id, created_at = %workout.created_at, "workout has a malformed creation timestamp");
        }
    }
    Ok(workouts)
}

pub fn load_workouts(path: &Path) -> Result<Vec<Workout>, HistoryError> {
    let json = fs::read_to_string(path).map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let workouts = parse_workouts(&json)?;
    info!(path = %path.display(), count = workouts.len(), "loaded workout history");
    Ok(workouts)
}

fn is_valid_timestamp(raw: &str) -> bool {
    DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").is_ok()
}
