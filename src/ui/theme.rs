use crate::catalog::Provider;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Palette, overridable from `[theme]` in `config.toml` 🎨
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

impl Theme {
    /// Badge color for a provider
    pub fn provider(&self, provider: Provider) -> Color {
        match provider {
            Provider::Youtube => self.red,
            Provider::TikTok => self.cyan,
            Provider::Instagram => self.magenta,
        }
    }
}
