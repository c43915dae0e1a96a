use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub mod filter;
pub mod sample;
pub mod shuffle;

pub use filter::{filter, folders, QuickFilter, ALL_FOLDERS};
pub use shuffle::{shuffle, DEFAULT_SHUFFLE_SEED};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog entry has an empty id")]
    EmptyId,

    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    #[error("entry {id}: provider is {provider} but {reason}")]
    ProviderMismatch {
        id: String,
        provider: Provider,
        reason: String,
    },

    #[error("entry {id}: {field} is empty")]
    EmptyReference { id: String, field: &'static str },
}

/// The three platforms a clip can come from 🎬
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Youtube,
    TikTok,
    Instagram,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Youtube, Provider::TikTok, Provider::Instagram];

    /// Lowercase name, also what search matches against.
    pub fn name(self) -> &'static str {
        match self {
            Provider::Youtube => "youtube",
            Provider::TikTok => "tiktok",
            Provider::Instagram => "instagram",
        }
    }

    /// Brand spelling for chips and headers
    pub fn label(self) -> &'static str {
        match self {
            Provider::Youtube => "YouTube",
            Provider::TikTok => "TikTok",
            Provider::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Provider-specific addressing. The variant *is* the provider, so an item
/// can never claim one platform while carrying another one's reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRef {
    Youtube {
        video_id: String,
    },
    TikTok {
        video_id: String,
        cite_url: Option<String>,
    },
    Instagram {
        permalink: String,
    },
}

impl ProviderRef {
    pub fn provider(&self) -> Provider {
        match self {
            ProviderRef::Youtube { .. } => Provider::Youtube,
            ProviderRef::TikTok { .. } => Provider::TikTok,
            ProviderRef::Instagram { .. } => Provider::Instagram,
        }
    }
}

/// One clip in the gallery. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: String,
    pub folder: String,
    pub title: Option<String>,
    pub source: ProviderRef,
    /// Pre-supplied thumbnail, wins over derived and resolved ones
    pub thumb_url: Option<String>,
}

impl MediaItem {
    pub fn youtube(id: &str, folder: &str, video_id: &str) -> Self {
        Self::with_source(
            id,
            folder,
            ProviderRef::Youtube {
                video_id: video_id.to_string(),
            },
        )
    }

    pub fn tiktok(id: &str, folder: &str, video_id: &str, cite_url: Option<&str>) -> Self {
        Self::with_source(
            id,
            folder,
            ProviderRef::TikTok {
                video_id: video_id.to_string(),
                cite_url: cite_url.map(str::to_string),
            },
        )
    }

    pub fn instagram(id: &str, folder: &str, permalink: &str) -> Self {
        Self::with_source(
            id,
            folder,
            ProviderRef::Instagram {
                permalink: permalink.to_string(),
            },
        )
    }

    fn with_source(id: &str, folder: &str, source: ProviderRef) -> Self {
        Self {
            id: id.to_string(),
            folder: folder.to_string(),
            title: None,
            source,
            thumb_url: None,
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_thumb(mut self, url: &str) -> Self {
        self.thumb_url = Some(url.to_string());
        self
    }

    pub fn provider(&self) -> Provider {
        self.source.provider()
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Public page URL used for metadata lookups and "open in browser".
    /// TikTok clips without a cite URL have none.
    pub fn public_url(&self) -> Option<String> {
        match &self.source {
            ProviderRef::Youtube { video_id } => {
                Some(format!("https://www.youtube.com/watch?v={}", video_id))
            }
            ProviderRef::TikTok { cite_url, .. } => cite_url.clone(),
            ProviderRef::Instagram { permalink } => Some(permalink.clone()),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        let (field, value) = match &self.source {
            ProviderRef::Youtube { video_id } => ("youtube.video_id", video_id),
            ProviderRef::TikTok { video_id, .. } => ("tiktok.video_id", video_id),
            ProviderRef::Instagram { permalink } => ("instagram.permalink", permalink),
        };
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyReference {
                id: self.id.clone(),
                field,
            });
        }
        Ok(())
    }
}

// ━━━ File format ━━━
// Flat layout: a `provider` tag plus one sub-table per platform, exactly one
// of which must be present and match the tag.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawYoutube {
    #[serde(alias = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTikTok {
    #[serde(alias = "videoId")]
    pub video_id: String,
    #[serde(default, alias = "citeUrl", skip_serializing_if = "Option::is_none")]
    pub cite_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInstagram {
    pub permalink: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub provider: Provider,
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<RawYoutube>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<RawTikTok>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<RawInstagram>,
    #[serde(default, alias = "thumbUrl", skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl TryFrom<RawItem> for MediaItem {
    type Error = CatalogError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let mismatch = |reason: &str| CatalogError::ProviderMismatch {
            id: raw.id.clone(),
            provider: raw.provider,
            reason: reason.to_string(),
        };

        let present = [
            (Provider::Youtube, raw.youtube.is_some()),
            (Provider::TikTok, raw.tiktok.is_some()),
            (Provider::Instagram, raw.instagram.is_some()),
        ];
        if let Some((other, _)) = present
            .iter()
            .find(|(p, is_set)| *is_set && *p != raw.provider)
        {
            return Err(mismatch(&format!("a `{}` reference is set", other.name())));
        }

        let source = match raw.provider {
            Provider::Youtube => {
                let yt = raw
                    .youtube
                    .as_ref()
                    .ok_or_else(|| mismatch("the `youtube` reference is missing"))?;
                ProviderRef::Youtube {
                    video_id: yt.video_id.clone(),
                }
            }
            Provider::TikTok => {
                let tt = raw
                    .tiktok
                    .as_ref()
                    .ok_or_else(|| mismatch("the `tiktok` reference is missing"))?;
                ProviderRef::TikTok {
                    video_id: tt.video_id.clone(),
                    cite_url: tt.cite_url.clone().filter(|u| !u.trim().is_empty()),
                }
            }
            Provider::Instagram => {
                let ig = raw
                    .instagram
                    .as_ref()
                    .ok_or_else(|| mismatch("the `instagram` reference is missing"))?;
                ProviderRef::Instagram {
                    permalink: ig.permalink.clone(),
                }
            }
        };

        Ok(MediaItem {
            id: raw.id,
            folder: raw.folder,
            title: raw.title,
            source,
            thumb_url: raw.thumb_url.filter(|u| !u.trim().is_empty()),
        })
    }
}

impl From<&MediaItem> for RawItem {
    fn from(item: &MediaItem) -> Self {
        let mut raw = RawItem {
            id: item.id.clone(),
            provider: item.provider(),
            folder: item.folder.clone(),
            title: item.title.clone(),
            youtube: None,
            tiktok: None,
            instagram: None,
            thumb_url: item.thumb_url.clone(),
        };
        match &item.source {
            ProviderRef::Youtube { video_id } => {
                raw.youtube = Some(RawYoutube {
                    video_id: video_id.clone(),
                })
            }
            ProviderRef::TikTok { video_id, cite_url } => {
                raw.tiktok = Some(RawTikTok {
                    video_id: video_id.clone(),
                    cite_url: cite_url.clone(),
                })
            }
            ProviderRef::Instagram { permalink } => {
                raw.instagram = Some(RawInstagram {
                    permalink: permalink.clone(),
                })
            }
        }
        raw
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// The shuffled, validated, read-only list of clips 📚
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Arc<MediaItem>>,
}

impl Catalog {
    /// Validate every entry, then shuffle with `seed`.
    pub fn new(items: Vec<MediaItem>, seed: u64) -> Result<Self, CatalogError> {
        let catalog = Self::in_order(items)?;
        let items = shuffle(catalog.items, seed);
        tracing::debug!(count = items.len(), seed, "catalog built");
        Ok(Self { items })
    }

    /// Validate every entry and keep the given order.
    pub fn in_order(items: Vec<MediaItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_raw(raw: Vec<RawItem>, seed: u64) -> Result<Self, CatalogError> {
        let items = raw
            .into_iter()
            .map(MediaItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items, seed)
    }

    pub fn from_toml_str(content: &str, seed: u64) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_raw(file.items, seed)
    }

    pub fn load(path: &Path, seed: u64) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, seed)
    }

    /// Built-in demo clips
    pub fn sample(seed: u64) -> Result<Self, CatalogError> {
        Self::new(sample::items(), seed)
    }

    pub fn items(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Arc<MediaItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn folders(&self) -> Vec<String> {
        folders(&self.items)
    }

    pub fn filter(&self, folder: &str, query: &str) -> Vec<Arc<MediaItem>> {
        filter(&self.items, folder, query)
    }
}
