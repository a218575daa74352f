use eframe::egui::Color32;

/// Palette entry a badge is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Red,
    Pink,
    Grape,
    Violet,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Green,
    Lime,
    Yellow,
    Orange,
    Gray,
}

/// Used for any muscle group the mapping does not know about.
pub const FALLBACK_COLOR: ColorToken = ColorToken::Gray;

const MUSCLE_COLORS: &[(&str, ColorToken)] = &[
    ("Chest", ColorToken::Red),
    ("Shoulders", ColorToken::Orange),
    ("Biceps", ColorToken::Yellow),
    ("Triceps", ColorToken::Lime),
    ("Forearms", ColorToken::Green),
    ("Lats", ColorToken::Teal),
    ("Middle Back", ColorToken::Cyan),
    ("Lower Back", ColorToken::Blue),
    ("Traps", ColorToken::Indigo),
    ("Abdominals", ColorToken::Violet),
    ("Quadriceps", ColorToken::Grape),
    ("Hamstrings", ColorToken::Pink),
    ("Glutes", ColorToken::Red),
    ("Calves", ColorToken::Orange),
    ("Adductors", ColorToken::Yellow),
    ("Abductors", ColorToken::Lime),
    ("Neck", ColorToken::Cyan),
];

/// Resolves a muscle-group tag to its badge color. Total: unknown tags get
/// [`FALLBACK_COLOR`].
pub fn muscle_color(tag: &str) -> ColorToken {
    MUSCLE_COLORS
        .iter()
        .find(|(muscle, _)| *muscle == tag)
        .map(|(_, token)| *token)
        .unwrap_or(FALLBACK_COLOR)
}

impl ColorToken {
    pub fn color32(self) -> Color32 {
        match self {
            ColorToken::Red => Color32::from_rgb(0xfa, 0x52, 0x52),
            ColorToken::Pink => Color32::from_rgb(0xe6, 0x49, 0x80),
            ColorToken::Grape => Color32::from_rgb(0xbe, 0x4b, 0xdb),
            ColorToken::Violet => Color32::from_rgb(0x79, 0x50, 0xf2),
            ColorToken::Indigo => Color32::from_rgb(0x4c, 0x6e, 0xf5),
            ColorToken::Blue => Color32::from_rgb(0x22, 0x8b, 0xe6),
            ColorToken::Cyan => Color32::from_rgb(0x15, 0xaa, 0xbf),
            ColorToken::Teal => Color32::from_rgb(0x12, 0xb8, 0x86),
            ColorToken::Green => Color32::from_rgb(0x40, 0xc0, 0x57),
            ColorToken::Lime => Color32::from_rgb(0x82, 0xc9, 0x1e),
            ColorToken::Yellow => Color32::from_rgb(0xfa, 0xb0, 0x05),
            ColorToken::Orange => Color32::from_rgb(0xfd, 0x7e, 0x14),
            ColorToken::Gray => Color32::from_rgb(0x86, 0x8e, 0x96),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_muscles_map_to_their_color() {
        assert_eq!(muscle_color("Chest"), ColorToken::Red);
        assert_eq!(muscle_color("Middle Back"), ColorToken::Cyan);
    }

    #[test]
    fn unknown_muscles_use_the_fallback() {
        for tag in ["", "chest", "Tongue", "  Chest"] {
            let token = muscle_color(tag);
            assert_eq!(token, FALLBACK_COLOR);
            assert_ne!(token.color32(), Color32::TRANSPARENT);
        }
    }
}
