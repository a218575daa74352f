//! egui rendering of the workout history: a striped table on wide surfaces
//! and stacked cards on narrow ones.

use eframe::egui::{
    self, Align, Button, Color32, Layout, Margin, Rect, RichText, Sense, Stroke, TextStyle, TextWrapMode, Ui, Vec2,
    WidgetText,
};
use egui_extras::{Column, TableBuilder};

use crate::config::TableConfig;
use crate::dispatch::TableEffect;
use crate::error::ClipboardError;
use crate::facilities::{ClipboardWriter, SessionProvider};
use crate::links::share_link;
use crate::models::Workout;
use crate::muscle::ColorToken;
use crate::row::{build_rows, Badge, RowAction, RowView};
use crate::share::{ShareAffordance, CONFIRMATION_TEXT};
use crate::view::{project, LayoutRow, Surface, ThemeMode};

const SHARE_ICON: &str = "🔗";
const REPEAT_ICON: &str = "🔁";
const DELETE_ICON: &str = "🗑";
const COMPLETE_MARK: &str = "✅ ";

const DATE_COLUMN_WIDTH: f32 = 130.0;
/// Room kept for the icons plus the copy confirmation when sizing rows.
const ACTIONS_COLUMN_ALLOWANCE: f32 = 180.0;
const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 32.0;
const ROW_PADDING: f32 = 6.0;
const CARD_SPACING: f32 = 8.0;

/// An action button as it was laid out this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnAction {
    pub workout_id: String,
    pub action: RowAction,
    pub rect: Rect,
}

pub struct TableOutput {
    pub surface: Surface,
    pub effects: Vec<TableEffect>,
    pub drawn_actions: Vec<DrawnAction>,
    /// Set when a share click could not write the clipboard.
    pub clipboard_error: Option<ClipboardError>,
}

pub struct WorkoutTable<'a> {
    config: &'a TableConfig,
    read_only: bool,
    id_salt: egui::Id,
}

impl<'a> WorkoutTable<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        WorkoutTable {
            config,
            read_only: config.read_only,
            id_salt: egui::Id::new("workout_table"),
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(salt);
        self
    }

    /// Draws one frame of the history. Share clicks are handled in place;
    /// repeat and delete come back as effects for the caller to dispatch.
    pub fn show(
        &self,
        ui: &mut Ui,
        workouts: &[Workout],
        session: &dyn SessionProvider,
        clipboard: &mut dyn ClipboardWriter,
    ) -> TableOutput {
        let viewer = session.current_viewer_identity();
        let rows = build_rows(workouts, viewer.as_ref(), self.read_only, self.config.completion_policy);
        let surface = Surface::for_width(ui.available_width(), self.config.wide_breakpoint);
        let theme = ThemeMode::from_dark_mode(ui.visuals().dark_mode);
        let layout_rows = project(surface, &rows, theme);

        let mut output = TableOutput {
            surface,
            effects: Vec::new(),
            drawn_actions: Vec::new(),
            clipboard_error: None,
        };
        match surface {
            Surface::Wide => self.show_table(ui, &layout_rows, clipboard, &mut output),
            Surface::Narrow => self.show_cards(ui, &layout_rows, clipboard, &mut output),
        }
        output
    }

    fn show_table(
        &self,
        ui: &mut Ui,
        rows: &[LayoutRow<'_>],
        clipboard: &mut dyn ClipboardWriter,
        output: &mut TableOutput,
    ) {
        let with_actions = !self.read_only;
        let column_count = if with_actions { 3.0 } else { 2.0 };
        let mut exercise_width = ui.available_width() - DATE_COLUMN_WIDTH - ui.spacing().item_spacing.x * column_count;
        if with_actions {
            exercise_width -= ACTIONS_COLUMN_ALLOWANCE;
        }
        let heights: Vec<f32> = rows
            .iter()
            .map(|layout_row| row_height(ui, layout_row.row, exercise_width.max(1.0)))
            .collect();

        let mut table = TableBuilder::new(ui)
            .id_salt(self.id_salt.with("table"))
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(DATE_COLUMN_WIDTH))
            .column(Column::remainder().clip(true));
        if with_actions {
            table = table.column(Column::auto());
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Date");
                });
                header.col(|ui| {
                    ui.strong("Exercises");
                });
                if with_actions {
                    header.col(|_| {});
                }
            })
            .body(|body| {
                body.heterogeneous_rows(heights.into_iter(), |mut table_row| {
                    let layout_row = &rows[table_row.index()];
                    table_row.col(|ui| {
                        ui.label(RichText::new(heading(layout_row.row)).strong());
                    });
                    table_row.col(|ui| {
                        ui.horizontal_wrapped(|ui| badges(ui, &layout_row.row.badges));
                    });
                    if with_actions {
                        table_row.col(|ui| {
                            self.action_buttons(ui, layout_row, Surface::Wide, false, clipboard, output);
                        });
                    }
                });
            });
    }

    fn show_cards(
        &self,
        ui: &mut Ui,
        rows: &[LayoutRow<'_>],
        clipboard: &mut dyn ClipboardWriter,
        output: &mut TableOutput,
    ) {
        egui::ScrollArea::vertical()
            .id_salt(self.id_salt.with("cards"))
            .show(ui, |ui| {
                for layout_row in rows {
                    egui::Frame::new()
                        .fill(layout_row.background.unwrap_or(Color32::TRANSPARENT))
                        .inner_margin(Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(heading(layout_row.row)).strong());
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    self.action_buttons(ui, layout_row, Surface::Narrow, true, clipboard, output);
                                });
                            });
                            ui.horizontal_wrapped(|ui| badges(ui, &layout_row.row.badges));
                        });
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    /// Draws the row's actions left to right in their canonical order; a
    /// right-to-left parent gets them reversed so they read the same.
    fn action_buttons(
        &self,
        ui: &mut Ui,
        layout_row: &LayoutRow<'_>,
        surface: Surface,
        right_to_left: bool,
        clipboard: &mut dyn ClipboardWriter,
        output: &mut TableOutput,
    ) {
        let row = layout_row.row;
        let mut actions = row.actions.clone();
        if right_to_left {
            actions.reverse();
        }

        for action in actions {
            let rect = match action {
                RowAction::Share => self.share_button(ui, layout_row, surface, clipboard, output),
                RowAction::Repeat => {
                    let response = icon_button(ui, REPEAT_ICON, ColorToken::Blue, action);
                    if response.clicked() {
                        output.effects.push(TableEffect::RepeatRequested(row.workout_id.clone()));
                    }
                    response.rect
                }
                RowAction::Delete => {
                    let response = icon_button(ui, DELETE_ICON, ColorToken::Red, action);
                    if response.clicked() {
                        output.effects.push(TableEffect::DeleteRequested(row.workout_id.clone()));
                    }
                    response.rect
                }
            };
            output.drawn_actions.push(DrawnAction {
                workout_id: row.workout_id.clone(),
                action,
                rect,
            });
        }
    }

    fn share_button(
        &self,
        ui: &mut Ui,
        layout_row: &LayoutRow<'_>,
        surface: Surface,
        clipboard: &mut dyn ClipboardWriter,
        output: &mut TableOutput,
    ) -> Rect {
        let row = layout_row.row;
        let id = self.share_id(surface, layout_row.index, &row.workout_id);
        let mut share: ShareAffordance = ui.data_mut(|data| data.get_temp(id)).unwrap_or_default();

        let response = icon_button(ui, SHARE_ICON, ColorToken::Green, RowAction::Share);
        if response.clicked() {
            let link = share_link(&self.config.base_url, &row.workout_id);
            if let Err(err) = share.copy(&link, clipboard, self.config.copy_failure) {
                output.clipboard_error = Some(err);
            }
        } else if share.is_confirmed() && response.clicked_elsewhere() {
            share.dismiss();
        }

        if share.is_confirmed() {
            ui.label(RichText::new(CONFIRMATION_TEXT).small().color(ColorToken::Green.color32()));
        }
        ui.data_mut(|data| data.insert_temp(id, share));
        response.rect
    }

    fn share_id(&self, surface: Surface, index: usize, workout_id: &str) -> egui::Id {
        self.id_salt.with(("share", surface, index, workout_id))
    }
}

/// Date label, prefixed with a check mark once every exercise is done.
pub fn heading(row: &RowView) -> String {
    if row.all_complete {
        format!("{COMPLETE_MARK}{}", row.date_label)
    } else {
        row.date_label.clone()
    }
}

fn icon_button(ui: &mut Ui, icon: &str, color: ColorToken, action: RowAction) -> egui::Response {
    ui.add(Button::new(RichText::new(icon).color(color.color32())).frame(false))
        .on_hover_text(action.tooltip())
}

fn badge_text(badge: &Badge) -> RichText {
    RichText::new(badge.label.as_str())
        .small()
        .strong()
        .color(badge.color.color32())
}

/// Outlined badge drawn as a single widget, so wrapping moves it whole.
fn badge_button(badge: &Badge) -> Button<'static> {
    Button::new(badge_text(badge))
        .stroke(Stroke::new(1.0, badge.color.color32()))
        .fill(Color32::TRANSPARENT)
        .wrap_mode(TextWrapMode::Extend)
        .sense(Sense::hover())
}

fn badges(ui: &mut Ui, badges: &[Badge]) {
    for badge in badges {
        ui.add(badge_button(badge))
            .on_hover_text(badge.muscle_group.as_str());
    }
}

fn badge_size(ui: &Ui, badge: &Badge) -> Vec2 {
    let galley = WidgetText::from(badge_text(badge)).into_galley(
        ui,
        Some(TextWrapMode::Extend),
        f32::INFINITY,
        TextStyle::Button,
    );
    let mut size = galley.size() + 2.0 * ui.spacing().button_padding;
    size.y = size.y.max(ui.spacing().interact_size.y);
    size
}

/// Height a table row needs so its badges are never clipped.
fn row_height(ui: &Ui, row: &RowView, exercise_width: f32) -> f32 {
    let sizes: Vec<Vec2> = row.badges.iter().map(|badge| badge_size(ui, badge)).collect();
    let spacing = ui.spacing().item_spacing;
    let line_height = sizes.iter().map(|size| size.y).fold(0.0, f32::max);
    let lines = wrapped_lines(sizes.iter().map(|size| size.x), exercise_width, spacing.x);
    let badges_height = lines as f32 * line_height + lines.saturating_sub(1) as f32 * spacing.y;
    (badges_height + 2.0 * ROW_PADDING).max(ROW_HEIGHT)
}

/// Lines taken by items of `widths` laid out left to right, wrapping at `max_width`.
fn wrapped_lines(widths: impl IntoIterator<Item = f32>, max_width: f32, gap: f32) -> usize {
    let mut lines = 0;
    let mut cursor = 0.0;
    for width in widths {
        if lines == 0 {
            lines = 1;
            cursor = width;
        } else if cursor + gap + width > max_width {
            lines += 1;
            cursor = width;
        } else {
            cursor += gap + width;
        }
    }
    lines
}
