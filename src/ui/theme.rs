//! Theme management.

use log::*;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

    /// Look up a theme by its configured name, falling back to the default.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "tokyo-night" => Self::tokyo_night(),
            "rose-pine-dawn" => Self::rose_pine_dawn(),
            other => {
                warn!("Unknown theme '{}', using default.", other);
                Self::default()
            }
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(122, 162, 247),    // Blue
            accent: rgb(187, 154, 247),     // Purple
            banner: rgb(247, 118, 142),     // Pink
            text: rgb(192, 202, 245),       // Foreground
            text_muted: rgb(86, 95, 137),   // Comment
            success: rgb(158, 206, 106),    // Green
            error: rgb(247, 118, 142),      // Red
            border_active: rgb(122, 162, 247),
            border_normal: rgb(59, 66, 97),
            highlight_bg: rgb(41, 46, 66),
            highlight_fg: rgb(192, 202, 245),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(86, 148, 159),     // Pine
            accent: rgb(180, 99, 122),      // Rose
            banner: rgb(180, 99, 122),      // Rose
            text: rgb(87, 82, 121),         // Text
            text_muted: rgb(152, 147, 165), // Muted
            success: rgb(40, 105, 131),     // Foam
            error: rgb(180, 99, 122),       // Love
            border_active: rgb(86, 148, 159),
            border_normal: rgb(223, 218, 217),
            highlight_bg: rgb(242, 233, 222),
            highlight_fg: rgb(87, 82, 121),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_to_color() {
        let color = rgb(10, 20, 30).to_color();
        assert_eq!(color, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_by_name_known_themes() {
        assert_eq!(Theme::by_name("tokyo-night").name, "tokyo-night");
        assert_eq!(Theme::by_name("rose-pine-dawn").name, "rose-pine-dawn");
    }

    #[test]
    fn test_by_name_unknown_falls_back_to_default() {
        assert_eq!(Theme::by_name("no-such-theme").name, Theme::default().name);
    }
}
