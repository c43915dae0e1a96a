use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Key bindings, by name, as written in `config.toml` `[keys]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,
    pub search: String,

    // Folders & quick filters
    pub folder_next: String,
    pub folder_prev: String,
    pub quick_all: String,
    pub quick_youtube: String,
    pub quick_tiktok: String,
    pub quick_instagram: String,

    // Grid navigation
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub nav_left: String,
    pub nav_left_alt: String,
    pub nav_right: String,
    pub nav_right_alt: String,
    pub open: String,

    // Player
    pub close: String,
    pub close_alt: String,
    pub open_in_browser: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),
            search: "/".to_string(),

            folder_next: "Tab".to_string(),
            folder_prev: "BackTab".to_string(),
            quick_all: "0".to_string(),
            quick_youtube: "1".to_string(),
            quick_tiktok: "2".to_string(),
            quick_instagram: "3".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            nav_left: "h".to_string(),
            nav_left_alt: "Left".to_string(),
            nav_right: "l".to_string(),
            nav_right_alt: "Right".to_string(),
            open: "Enter".to_string(),

            close: "x".to_string(),
            close_alt: "Esc".to_string(),
            open_in_browser: "o".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                let Some(ch) = s.chars().next() else {
                    return false;
                };
                // Uppercase bindings also accept lowercase + Shift
                if ch.is_uppercase() {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                } else {
                    event.code == KeyCode::Char(ch)
                }
            }
            _ => false,
        }
    }

    pub fn matches_any(&self, event: KeyEvent, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.matches(event, k))
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}
