use crate::catalog::MediaItem;
use crate::embed::{EmbedHost, EmbedSlot, MountPoint};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Arc<MediaItem>),
}

/// What dismissed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
    /// Quit key pressed while the player was up
    QuitKey,
    /// App shutting down
    Quit,
}

/// Single-item player overlay 🎬
///
/// While open, the focused clip is mounted in the modal slot with autoplay;
/// closing always tears the slot down so nothing keeps playing off-screen.
#[derive(Debug)]
pub struct ModalPlayer {
    state: ModalState,
    slot: EmbedSlot,
    last_close: Option<CloseReason>,
}

impl Default for ModalPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalPlayer {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            slot: EmbedSlot::new(MountPoint::Modal),
            last_close: None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn focused(&self) -> Option<&Arc<MediaItem>> {
        match &self.state {
            ModalState::Open(item) => Some(item),
            ModalState::Closed => None,
        }
    }

    pub fn slot(&self) -> &EmbedSlot {
        &self.slot
    }

    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Focus `item`, replacing whatever was open.
    pub fn open_with(&mut self, item: Arc<MediaItem>, host: &mut dyn EmbedHost) {
        tracing::debug!(id = %item.id, "modal open");
        self.slot.mount(&item, true, host);
        self.state = ModalState::Open(item);
    }

    /// Returns `false` if the modal was already closed.
    pub fn close(&mut self, reason: CloseReason, host: &mut dyn EmbedHost) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!(?reason, "modal close");
        self.slot.unmount(host);
        self.state = ModalState::Closed;
        self.last_close = Some(reason);
        true
    }
}
