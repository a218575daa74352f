//! Workout history view: turns recorded workouts into render-ready rows and
//! draws them as a table or as cards, with share, repeat and delete actions.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod facilities;
pub mod history;
pub mod links;
pub mod models;
pub mod muscle;
pub mod row;
pub mod share;
pub mod table;
pub mod view;

pub use config::TableConfig;
pub use dispatch::{dispatch_effects, TableEffect};
pub use error::{ClipboardError, ConfigError, HistoryError, NavigationError};
pub use facilities::{ClipboardWriter, Navigator, SessionProvider};
pub use links::{share_link, DeepLink};
pub use models::{Exercise, ViewerIdentity, Workout};
pub use row::{build_row, build_rows, CompletionPolicy, RowAction, RowView};
pub use share::{CopyFailure, ShareAffordance, ShareState};
pub use table::{TableOutput, WorkoutTable};
pub use view::{Surface, ThemeMode};
