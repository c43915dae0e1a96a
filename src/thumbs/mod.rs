use crate::app::events::AppEvent;
use crate::catalog::{MediaItem, Provider, ProviderRef};
use crate::loader::Registry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub mod oembed;
pub mod preview;

pub use oembed::{LookupError, OEmbedClient, ThumbnailLookup};

/// What a tile should show in its picture area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Url(String),
    Placeholder,
}

pub fn youtube_thumb(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

/// Pick the best thumbnail we know of right now.
///
/// Precedence: configured override, then the YouTube URL template, then
/// whatever the resolver cached. Anything else is a placeholder.
pub fn thumbnail_for(item: &MediaItem, cache: &ThumbnailCache) -> Thumbnail {
    if let Some(url) = &item.thumb_url {
        return Thumbnail::Url(url.clone());
    }
    if let ProviderRef::Youtube { video_id } = &item.source {
        return Thumbnail::Url(youtube_thumb(video_id));
    }
    match cache.get(&item.id) {
        Some(url) => Thumbnail::Url(url),
        None => Thumbnail::Placeholder,
    }
}

/// Only TikTok clips need a network round trip, and only when nothing
/// better is known and there is a public page to ask about.
pub fn needs_resolution(item: &MediaItem, cache: &ThumbnailCache) -> bool {
    item.provider() == Provider::TikTok
        && item.thumb_url.is_none()
        && item.public_url().is_some()
        && !cache.contains(&item.id)
}

/// Resolved thumbnails keyed by item id. First write wins 💾
///
/// Cloning hands out another handle to the same map, so background tasks can
/// keep writing after the UI that spawned them is gone.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Merge one entry. Returns `false` (and changes nothing) when `id` already
    /// has a value.
    pub fn insert(&self, id: &str, url: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(id) {
            return false;
        }
        entries.insert(id.to_string(), url.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Async thumbnail lookups with per-item duplicate suppression 🖼️
///
/// Concurrent calls for one id share a single request through the in-flight
/// registry; the key is forgotten once the lookup settles.
#[derive(Clone)]
pub struct ThumbnailResolver {
    lookup: Arc<dyn ThumbnailLookup>,
    cache: ThumbnailCache,
    in_flight: Arc<Registry<Option<String>>>,
}

impl ThumbnailResolver {
    pub fn new(lookup: Arc<dyn ThumbnailLookup>, cache: ThumbnailCache) -> Self {
        Self {
            lookup,
            cache,
            in_flight: Arc::new(Registry::new()),
        }
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.is_registered(id)
    }

    /// Look up a thumbnail for `item`, storing it on success.
    ///
    /// Never fails: network errors, bad statuses and malformed payloads all
    /// come back as `None` and the tile keeps its placeholder. A call for an
    /// id that is already being looked up waits for that lookup instead of
    /// sending another request.
    pub async fn resolve(&self, item: &MediaItem) -> Option<String> {
        if let Some(hit) = self.cache.get(&item.id) {
            return Some(hit);
        }
        if !needs_resolution(item, &self.cache) {
            return None;
        }
        let public_url = item.public_url()?;

        if self.in_flight.is_registered(&item.id) {
            tracing::debug!(id = %item.id, "thumbnail lookup already in flight, joining");
        }

        let lookup = Arc::clone(&self.lookup);
        let cache = self.cache.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let id = item.id.clone();
        let pending = self.in_flight.ensure_loaded(&item.id, move || async move {
            tracing::debug!(%id, url = %public_url, "resolving thumbnail");
            let resolved = match lookup.lookup(&public_url).await {
                Ok(url) => {
                    if !cache.insert(&id, &url) {
                        tracing::debug!(%id, "thumbnail already cached, keeping first");
                    }
                    cache.get(&id)
                }
                Err(e) => {
                    tracing::warn!(%id, error = %e, "thumbnail lookup failed");
                    None
                }
            };
            in_flight.forget(&id);
            resolved
        });
        pending.await
    }

    /// Start one background lookup per item that needs it.
    ///
    /// Each finished lookup sends [`AppEvent::ThumbnailResolved`]; if the
    /// receiver is gone the result still lands in the cache and the send is
    /// dropped.
    pub fn spawn_all<'a, I>(
        &self,
        items: I,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Vec<JoinHandle<Option<String>>>
    where
        I: IntoIterator<Item = &'a Arc<MediaItem>>,
    {
        items
            .into_iter()
            .filter(|item| needs_resolution(item, &self.cache))
            .map(|item| {
                let resolver = self.clone();
                let item = Arc::clone(item);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let url = resolver.resolve(&item).await;
                    if url.is_some() {
                        let _ = tx.send(AppEvent::ThumbnailResolved(item.id.clone())).await;
                    }
                    url
                })
            })
            .collect()
    }
}
