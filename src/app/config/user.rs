use crate::catalog::DEFAULT_SHUFFLE_SEED;
use crate::thumbs::oembed::DEFAULT_OEMBED_ENDPOINT;
use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shape of the player's preview area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Shorts / Reels / TikTok
    #[default]
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    /// (width, height)
    pub fn ratio(self) -> (u16, u16) {
        match self {
            AspectRatio::Portrait => (9, 16),
            AspectRatio::Landscape => (16, 9),
        }
    }
}

/// Whether Instagram tiles embed the post in the grid or only in the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstagramRenderMode {
    #[default]
    Inline,
    Modal,
}

/// User-editable configuration (read-only after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub resolve_thumbnails: bool,
    #[serde(default = "default_oembed_endpoint")]
    pub oembed_endpoint: String,
    #[serde(default = "default_oembed_timeout")]
    pub oembed_timeout_secs: u64,
    #[serde(default)]
    pub modal_aspect_ratio: AspectRatio,
    #[serde(default)]
    pub instagram_render_mode: InstagramRenderMode,
    #[serde(default)]
    pub keys: crate::app::keys::KeyConfig,
    #[serde(default)]
    pub theme: Theme,
}

fn default_seed() -> u64 {
    DEFAULT_SHUFFLE_SEED
}

fn default_true() -> bool {
    true
}

fn default_oembed_endpoint() -> String {
    DEFAULT_OEMBED_ENDPOINT.to_string()
}

fn default_oembed_timeout() -> u64 {
    8
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            catalog_path: None,
            resolve_thumbnails: true,
            oembed_endpoint: default_oembed_endpoint(),
            oembed_timeout_secs: default_oembed_timeout(),
            modal_aspect_ratio: AspectRatio::default(),
            instagram_render_mode: InstagramRenderMode::default(),
            keys: crate::app::keys::KeyConfig::default(),
            theme: Theme::default(),
        }
    }
}
