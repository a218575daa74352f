//models.rs
use serde::{Deserialize, Deserializer, Serialize};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub title: String,
    #[serde(rename = "mainMuscle")]
    pub main_muscle: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exercises: Vec<Exercise>,
}

/// The signed-in viewer. Only ever used as a presence check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerIdentity {
    pub email: String,
}

impl Workout {
    pub fn new(id: impl Into<String>, created_at: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Workout {
            id: id.into(),
            created_at: created_at.into(),
            exercises,
        }
    }
}

impl Exercise {
    pub fn new(title: impl Into<String>, main_muscle: impl Into<String>, completed: bool) -> Self {
        Exercise {
            title: title.into(),
            main_muscle: main_muscle.into(),
            completed,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Exercise>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Exercise>>::deserialize(deserializer)?.unwrap_or_default())
}
