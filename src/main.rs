use std::env;
use std::path::PathBuf;

use eframe::{App, Frame, CreationContext, egui};
use egui::{Align, Layout, RichText};
use tracing::{error, info, warn};

use workout_table::facilities::{EguiClipboard, EguiNavigator, StaticSession, SystemClipboard};
use workout_table::history::load_workouts;
use workout_table::{dispatch_effects, ClipboardWriter, TableConfig, Workout, WorkoutTable};

/// Environment variable naming the workout history file.
const HISTORY_PATH_ENV: &str = "WORKOUT_HISTORY";
const DEFAULT_HISTORY_PATH: &str = "data/workouts.json";

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let config = match TableConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid config, using defaults");
            TableConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Workout History",
        options,
        Box::new(|cc| Ok(Box::new(HistoryApp::new(cc, config)))),
    )
}

fn init_tracing() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

struct HistoryApp {
    config: TableConfig,
    workouts: Vec<Workout>,
    session: StaticSession,
    navigator: EguiNavigator,
    clipboard: Box<dyn ClipboardWriter>,
    read_only: bool,
}

impl HistoryApp {
    fn new(cc: &CreationContext, config: TableConfig) -> Self {
        let history_path = env::var_os(HISTORY_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH));
        let workouts = load_workouts(&history_path).unwrap_or_else(|err| {
            warn!(error = %err, "starting with an empty workout history");
            Vec::new()
        });

        let clipboard: Box<dyn ClipboardWriter> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(err) => {
                warn!(error = %err, "system clipboard unavailable, copying through egui");
                Box::new(EguiClipboard::new(cc.egui_ctx.clone()))
            }
        };

        HistoryApp {
            session: StaticSession::from_email(config.viewer_email.as_deref()),
            navigator: EguiNavigator::new(cc.egui_ctx.clone(), config.base_url.clone()),
            read_only: config.read_only,
            config,
            workouts,
            clipboard,
        }
    }

    fn delete_workout(&mut self, workout_id: &str) {
        let before = self.workouts.len();
        self.workouts.retain(|workout| workout.id != workout_id);
        info!(%workout_id, removed = before - self.workouts.len(), "deleted workout");
    }
}

impl App for HistoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Workout History").heading().strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.checkbox(&mut self.read_only, "Read only");
                });
            });
        });

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.workouts.is_empty() {
                    ui.label("No workouts recorded yet.");
                }
                WorkoutTable::new(&self.config)
                    .read_only(self.read_only)
                    .show(ui, &self.workouts, &self.session, self.clipboard.as_mut())
            })
            .inner;

        if let Some(err) = output.clipboard_error {
            error!(error = %err, "could not copy share link");
        }

        let mut deleted = Vec::new();
        if let Err(err) = dispatch_effects(output.effects, &mut self.navigator, &mut |workout_id: &str| {
            deleted.push(workout_id.to_string())
        }) {
            error!(error = %err, "workout action failed");
        }
        for workout_id in deleted {
            self.delete_workout(&workout_id);
        }
    }
}
