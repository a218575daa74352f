//! Row view-model: everything a layout needs to draw one workout.
//!
//! Both layouts render from the same [`RowView`] values, so the date, the
//! badges and the available actions can never differ between them.

use serde::{Deserialize, Serialize};

use crate::models::{ViewerIdentity, Workout};
use crate::muscle::{muscle_color, ColorToken};

/// Number of leading timestamp characters shown as the date.
pub const DATE_LABEL_LEN: usize = 10;

/// How a workout with no exercises is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Nothing left to do, so it is complete.
    #[default]
    VacuouslyComplete,
    EmptyIsIncomplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    Share,
    Repeat,
    Delete,
}

impl RowAction {
    pub fn tooltip(self) -> &'static str {
        match self {
            RowAction::Share => "Share workout",
            RowAction::Repeat => "Repeat workout",
            RowAction::Delete => "Delete workout",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub label: String,
    pub color: ColorToken,
    pub muscle_group: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub workout_id: String,
    pub date_label: String,
    pub all_complete: bool,
    pub badges: Vec<Badge>,
    pub actions: Vec<RowAction>,
}

pub fn build_row(
    workout: &Workout,
    viewer: Option<&ViewerIdentity>,
    read_only: bool,
    policy: CompletionPolicy,
) -> RowView {
    let badges = workout
        .exercises
        .iter()
        .map(|exercise| Badge {
            label: exercise.title.clone(),
            color: muscle_color(&exercise.main_muscle),
            muscle_group: exercise.main_muscle.clone(),
        })
        .collect();

    RowView {
        workout_id: workout.id.clone(),
        date_label: date_label(&workout.created_at),
        all_complete: all_complete(workout, policy),
        badges,
        actions: available_actions(viewer, read_only),
    }
}

pub fn build_rows(
    workouts: &[Workout],
    viewer: Option<&ViewerIdentity>,
    read_only: bool,
    policy: CompletionPolicy,
) -> Vec<RowView> {
    workouts
        .iter()
        .map(|workout| build_row(workout, viewer, read_only, policy))
        .collect()
}

pub fn all_complete(workout: &Workout, policy: CompletionPolicy) -> bool {
    if workout.exercises.is_empty() {
        return policy == CompletionPolicy::VacuouslyComplete;
    }
    workout.exercises.iter().all(|exercise| exercise.completed)
}

/// Date portion of an ISO-8601 timestamp. Counts chars, not bytes.
pub fn date_label(created_at: &str) -> String {
    created_at.chars().take(DATE_LABEL_LEN).collect()
}

/// Share needs a signed-in viewer; repeat and delete only need write access.
pub fn available_actions(viewer: Option<&ViewerIdentity>, read_only: bool) -> Vec<RowAction> {
    if read_only {
        return Vec::new();
    }
    let mut actions = Vec::with_capacity(3);
    if viewer.is_some() {
        actions.push(RowAction::Share);
    }
    actions.push(RowAction::Repeat);
    actions.push(RowAction::Delete);
    actions
}
