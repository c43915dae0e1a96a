use futures::future::BoxFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use vaultfeed::app::events::AppEvent;
use vaultfeed::app::modal::{CloseReason, ModalPlayer, ModalState};
use vaultfeed::catalog::{filter, Catalog, MediaItem};
use vaultfeed::embed::{MountPoint, TerminalHost};
use vaultfeed::thumbs::{
    thumbnail_for, LookupError, Thumbnail, ThumbnailCache, ThumbnailLookup, ThumbnailResolver,
};

const CITE: &str = "https://www.tiktok.com/@chef/video/Y1";

fn catalog() -> Catalog {
    Catalog::in_order(vec![
        MediaItem::youtube("a", "Cooking", "X1"),
        MediaItem::tiktok("b", "Fashion", "Y1", Some(CITE)),
    ])
    .unwrap()
}

fn ids(items: &[Arc<MediaItem>]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

/// Answers after a short delay, counting calls
struct SlowLookup {
    calls: AtomicUsize,
    result: Result<&'static str, ()>,
}

impl SlowLookup {
    fn ok(url: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result: Ok(url),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result: Err(()),
        })
    }
}

impl ThumbnailLookup for SlowLookup {
    fn lookup<'a>(&'a self, _public_url: &'a str) -> BoxFuture<'a, Result<String, LookupError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            match self.result {
                Ok(url) => Ok(url.to_string()),
                Err(()) => Err(LookupError::MissingThumbnail),
            }
        })
    }
}

#[test]
fn test_filter_scenarios() {
    let catalog = catalog();
    assert_eq!(ids(&catalog.filter("All", "")), ["a", "b"]);
    assert_eq!(ids(&catalog.filter("Fashion", "")), ["b"]);
    assert_eq!(ids(&catalog.filter("All", "tiktok")), ["b"]);
    assert_eq!(ids(&catalog.filter("All", "  TikTok ")), ["b"]);
    assert!(catalog.filter("Gaming", "").is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = Catalog::sample(42).unwrap();
    for (folder, query) in [("All", ""), ("Cooking", "tiktok"), ("Gaming", "e"), ("All", "insta")] {
        let once = catalog.filter(folder, query);
        let twice = filter(&once, folder, query);
        assert_eq!(ids(&once), ids(&twice));
    }
}

#[test]
fn test_whole_catalog_in_shuffled_order() {
    let catalog = Catalog::sample(42).unwrap();
    assert_eq!(catalog.len(), 36);
    assert_eq!(ids(&catalog.filter("All", "")), ids(catalog.items()));

    // Same seed, same order
    let again = Catalog::sample(42).unwrap();
    assert_eq!(ids(again.items()), ids(catalog.items()));
}

#[test]
fn test_open_a_then_b_tears_down_a() {
    let catalog = catalog();
    let mut host = TerminalHost::new();
    let mut modal = ModalPlayer::new();

    modal.open_with(Arc::clone(catalog.get("a").unwrap()), &mut host);
    modal.open_with(Arc::clone(catalog.get("b").unwrap()), &mut host);

    assert!(matches!(modal.state(), ModalState::Open(item) if item.id == "b"));
    let live = host.content(&MountPoint::Modal).unwrap();
    assert_eq!(live.item_id, "b");
    assert_eq!(live.src, "https://www.tiktok.com/embed/Y1");
    assert_eq!(host.live_count(), 1);

    assert!(modal.close(CloseReason::Escape, &mut host));
    assert!(host.content(&MountPoint::Modal).is_none());
}

#[tokio::test]
async fn test_failed_lookup_leaves_placeholder() {
    let catalog = catalog();
    let lookup = SlowLookup::failing();
    let cache = ThumbnailCache::new();
    let resolver = ThumbnailResolver::new(lookup.clone(), cache.clone());
    let b = catalog.get("b").unwrap();

    assert_eq!(resolver.resolve(b).await, None);
    assert!(!cache.contains("b"));
    assert_eq!(thumbnail_for(b, &cache), Thumbnail::Placeholder);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

    // A settled failure is not remembered, so a later call tries again
    assert!(!resolver.is_in_flight("b"));
    assert_eq!(resolver.resolve(b).await, None);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_request() {
    let catalog = catalog();
    let lookup = SlowLookup::ok("https://cdn.example/b.jpg");
    let resolver = ThumbnailResolver::new(lookup.clone(), ThumbnailCache::new());
    let b = catalog.get("b").unwrap();

    let (first, second) = tokio::join!(resolver.resolve(b), resolver.resolve(b));
    assert_eq!(first.as_deref(), Some("https://cdn.example/b.jpg"));
    assert_eq!(second, first);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    assert!(!resolver.is_in_flight("b"));

    // Cached now: no new request
    assert!(resolver.resolve(b).await.is_some());
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_spawn_all_only_asks_for_tiktok() {
    let catalog = catalog();
    let lookup = SlowLookup::ok("https://cdn.example/b.jpg");
    let cache = ThumbnailCache::new();
    let resolver = ThumbnailResolver::new(lookup.clone(), cache.clone());
    let (tx, mut rx) = mpsc::channel(8);

    let handles = resolver.spawn_all(catalog.items(), &tx);
    assert_eq!(handles.len(), 1);
    for handle in handles {
        handle.await.unwrap();
    }

    match rx.recv().await {
        Some(AppEvent::ThumbnailResolved(id)) => assert_eq!(id, "b"),
        _ => panic!("expected ThumbnailResolved"),
    }
    assert_eq!(
        thumbnail_for(catalog.get("b").unwrap(), &cache),
        Thumbnail::Url("https://cdn.example/b.jpg".to_string())
    );
}

#[tokio::test]
async fn test_late_result_after_ui_gone_is_harmless() {
    let catalog = catalog();
    let cache = ThumbnailCache::new();
    let resolver = ThumbnailResolver::new(SlowLookup::ok("https://cdn.example/b.jpg"), cache.clone());
    let (tx, rx) = mpsc::channel(8);

    let handles = resolver.spawn_all(catalog.items(), &tx);
    drop(rx);
    drop(resolver);

    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }
    assert!(cache.contains("b"));
}

#[test]
fn test_cache_first_write_wins() {
    let cache = ThumbnailCache::new();
    assert!(cache.insert("b", "https://first"));
    assert!(!cache.insert("b", "https://second"));
    assert_eq!(cache.get("b").as_deref(), Some("https://first"));
}
