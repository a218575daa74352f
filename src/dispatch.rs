use tracing::{debug, warn};

use crate::error::NavigationError;
use crate::facilities::Navigator;
use crate::links::REPEAT_PARAM;

/// Row interactions the table hands back to its caller after a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEffect {
    RepeatRequested(String),
    DeleteRequested(String),
}

/// Runs the effects in order. Deletion is left to `delete_workout`; the row
/// stays until the caller renders an updated collection.
pub fn dispatch_effects(
    effects: Vec<TableEffect>,
    navigator: &mut dyn Navigator,
    delete_workout: &mut dyn FnMut(&str),
) -> Result<(), NavigationError> {
    for effect in effects {
        match effect {
            TableEffect::DeleteRequested(workout_id) => {
                debug!(%workout_id, "delete requested");
                delete_workout(&workout_id);
            }
            TableEffect::RepeatRequested(workout_id) => {
                let link = navigator.link_for(&[(REPEAT_PARAM, workout_id.as_str())]);
                debug!(%workout_id, link = %link, "repeat requested");
                if let Err(err) = navigator.follow(&link) {
                    warn!(%workout_id, error = %err, "could not open repeat link");
                    return Err(err);
                }
            }
        }
    }
    Ok(())
}
