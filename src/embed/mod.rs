//! Third-party embed lifecycle.
//!
//! An [`EmbedSlot`] decides *what* is mounted at one mount point; an
//! [`EmbedHost`] owns the actual content and is told to clear or build it.
//! The terminal loop decides *when* to call the slot (modal opened, filter
//! changed, view torn down).

use crate::catalog::{MediaItem, Provider, ProviderRef};
use std::sync::Arc;

pub mod host;
pub mod tiles;

pub use host::TerminalHost;
pub use tiles::TileSlots;

const VIDEO_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";
const POST_PERMISSIONS: &str = "clipboard-write; encrypted-media; picture-in-picture; web-share";

/// Where an embed can live
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MountPoint {
    Modal,
    Tile(String),
}

/// Provider-specific embeddable content for one `(item, autoplay)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedContent {
    pub provider: Provider,
    pub item_id: String,
    pub src: String,
    pub title: &'static str,
    pub allow: &'static str,
    pub autoplay: bool,
}

impl EmbedContent {
    pub fn for_item(item: &MediaItem, autoplay: bool) -> Self {
        let (src, title, allow) = match &item.source {
            ProviderRef::Youtube { video_id } => {
                let mut src = format!(
                    "https://www.youtube.com/embed/{}?playsinline=1&modestbranding=1&rel=0",
                    video_id
                );
                // Browsers block autoplay with sound, so autoplay always starts muted
                if autoplay {
                    src.push_str("&autoplay=1&mute=1");
                }
                (src, "YouTube video player", VIDEO_PERMISSIONS)
            }
            ProviderRef::TikTok { video_id, .. } => (
                format!("https://www.tiktok.com/embed/{}", video_id),
                "TikTok video",
                VIDEO_PERMISSIONS,
            ),
            ProviderRef::Instagram { permalink } => (
                format!("{}/embed", permalink.trim_end_matches('/')),
                "Instagram post",
                POST_PERMISSIONS,
            ),
        };

        Self {
            provider: item.provider(),
            item_id: item.id.clone(),
            src,
            title,
            allow,
            autoplay,
        }
    }
}

/// Owner of the live content at each mount point.
pub trait EmbedHost {
    /// Remove whatever is at `mount`. Must be safe to call on an empty mount.
    fn clear(&mut self, mount: &MountPoint);
    /// Start loading `content` at `mount`. Fire-and-forget: the host does not
    /// report whether the third party actually rendered.
    fn build(&mut self, mount: &MountPoint, content: &EmbedContent);
}

#[derive(Debug, Clone)]
pub struct EmbedRequest {
    pub item: Arc<MediaItem>,
    pub autoplay: bool,
}

impl EmbedRequest {
    fn same_as(&self, item: &MediaItem, autoplay: bool) -> bool {
        self.item.id == item.id && self.autoplay == autoplay
    }
}

#[derive(Debug, Clone, Default)]
pub enum SlotState {
    #[default]
    Unmounted,
    Mounting(EmbedRequest),
    Mounted(EmbedRequest),
}

/// One mount point, at most one live embed 🎞️
///
/// `Unmounted -> Mounting -> Mounted -> Unmounted`. Every (re)mount clears the
/// mount point before building, so switching items or toggling autoplay can
/// never leave a stale widget behind.
#[derive(Debug, Clone)]
pub struct EmbedSlot {
    mount: MountPoint,
    state: SlotState,
}

impl EmbedSlot {
    pub fn new(mount: MountPoint) -> Self {
        Self {
            mount,
            state: SlotState::Unmounted,
        }
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, SlotState::Mounted(_))
    }

    /// Item currently mounted (or being mounted)
    pub fn current(&self) -> Option<&EmbedRequest> {
        match &self.state {
            SlotState::Unmounted => None,
            SlotState::Mounting(req) | SlotState::Mounted(req) => Some(req),
        }
    }

    /// Mount `item`. Returns `false` when that exact pair is already mounted.
    pub fn mount(&mut self, item: &Arc<MediaItem>, autoplay: bool, host: &mut dyn EmbedHost) -> bool {
        if let SlotState::Mounted(req) = &self.state {
            if req.same_as(item, autoplay) {
                return false;
            }
        }

        host.clear(&self.mount);
        let request = EmbedRequest {
            item: Arc::clone(item),
            autoplay,
        };
        self.state = SlotState::Mounting(request.clone());

        let content = EmbedContent::for_item(item, autoplay);
        tracing::debug!(mount = ?self.mount, src = %content.src, "mounting embed");
        host.build(&self.mount, &content);

        self.state = SlotState::Mounted(request);
        true
    }

    /// Tear down whatever is mounted. Idempotent.
    pub fn unmount(&mut self, host: &mut dyn EmbedHost) {
        if !matches!(self.state, SlotState::Unmounted) {
            tracing::debug!(mount = ?self.mount, "unmounting embed");
        }
        host.clear(&self.mount);
        self.state = SlotState::Unmounted;
    }
}
