//! Theme system for TUI colors and styles.

use iocraft::prelude::Color;

use crate::api::CharacterStatus;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Character status colors
    pub status_alive: Color,
    pub status_dead: Color,
    pub status_unknown: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub error: Color,
    pub episode_code: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_alive: Color::Green,
            status_dead: Color::Red,
            status_unknown: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
            error: Color::Red,
            episode_code: Color::Yellow,
        }
    }
}

impl Theme {
    /// Get the color for a character status
    pub fn status_color(&self, status: CharacterStatus) -> Color {
        match status {
            CharacterStatus::Alive => self.status_alive,
            CharacterStatus::Dead => self.status_dead,
            CharacterStatus::Unknown => self.status_unknown,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
