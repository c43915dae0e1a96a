use super::{EmbedHost, EmbedSlot, MountPoint};
use crate::catalog::{MediaItem, Provider};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Grid tiles that render their embed inline instead of a thumbnail.
///
/// Call [`TileSlots::reconcile`] whenever the visible list changes: tiles
/// that scrolled into the filter get mounted (no autoplay), tiles that left
/// it get torn down.
#[derive(Debug, Default)]
pub struct TileSlots {
    inline: HashSet<Provider>,
    slots: HashMap<String, EmbedSlot>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileStats {
    pub mounted: usize,
    pub unmounted: usize,
}

impl TileSlots {
    pub fn new(inline: impl IntoIterator<Item = Provider>) -> Self {
        Self {
            inline: inline.into_iter().collect(),
            slots: HashMap::new(),
        }
    }

    pub fn renders_inline(&self, provider: Provider) -> bool {
        self.inline.contains(&provider)
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.slots.get(id).is_some_and(EmbedSlot::is_mounted)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn reconcile(&mut self, visible: &[Arc<MediaItem>], host: &mut dyn EmbedHost) -> ReconcileStats {
        let mut stats = ReconcileStats::default();
        let wanted: Vec<&Arc<MediaItem>> = visible
            .iter()
            .filter(|item| self.renders_inline(item.provider()))
            .collect();
        let wanted_ids: HashSet<&str> = wanted.iter().map(|item| item.id.as_str()).collect();

        let gone: Vec<String> = self
            .slots
            .keys()
            .filter(|id| !wanted_ids.contains(id.as_str()))
            .cloned()
            .collect();
        for id in gone {
            if let Some(mut slot) = self.slots.remove(&id) {
                slot.unmount(host);
                stats.unmounted += 1;
            }
        }

        for item in wanted {
            let slot = self
                .slots
                .entry(item.id.clone())
                .or_insert_with(|| EmbedSlot::new(MountPoint::Tile(item.id.clone())));
            if slot.mount(item, false, host) {
                stats.mounted += 1;
            }
        }

        if stats != ReconcileStats::default() {
            tracing::debug!(?stats, live = self.slots.len(), "tile embeds reconciled");
        }
        stats
    }

    pub fn unmount_all(&mut self, host: &mut dyn EmbedHost) {
        for (_, mut slot) in self.slots.drain() {
            slot.unmount(host);
        }
    }
}
