use eframe::egui::Color32;

use crate::row::RowView;

/// Below this width the table collapses into cards.
pub const DEFAULT_WIDE_BREAKPOINT: f32 = 768.0;

pub const DARK_EVEN_BACKGROUND: Color32 = Color32::from_rgb(0x1a, 0x1b, 0x1e);
pub const DARK_ODD_BACKGROUND: Color32 = Color32::TRANSPARENT;
pub const LIGHT_EVEN_BACKGROUND: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const LIGHT_ODD_BACKGROUND: Color32 = Color32::WHITE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Wide,
    Narrow,
}

impl Surface {
    pub fn for_width(available_width: f32, breakpoint: f32) -> Self {
        if available_width >= breakpoint {
            Surface::Wide
        } else {
            Surface::Narrow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

pub fn card_background(index: usize, theme: ThemeMode) -> Color32 {
    match (theme, index % 2 == 0) {
        (ThemeMode::Dark, true) => DARK_EVEN_BACKGROUND,
        (ThemeMode::Dark, false) => DARK_ODD_BACKGROUND,
        (ThemeMode::Light, true) => LIGHT_EVEN_BACKGROUND,
        (ThemeMode::Light, false) => LIGHT_ODD_BACKGROUND,
    }
}

/// One row as a layout will draw it. `background` is only set for cards;
/// the table stripes itself.
#[derive(Clone, Copy, Debug)]
pub struct LayoutRow<'a> {
    pub index: usize,
    pub row: &'a RowView,
    pub background: Option<Color32>,
}

pub fn project(surface: Surface, rows: &[RowView], theme: ThemeMode) -> Vec<LayoutRow<'_>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| LayoutRow {
            index,
            row,
            background: match surface {
                Surface::Wide => None,
                Surface::Narrow => Some(card_background(index, theme)),
            },
        })
        .collect()
}
