use super::{MediaItem, Provider};
use std::collections::HashSet;
use std::sync::Arc;

/// Folder sentinel that matches every clip.
pub const ALL_FOLDERS: &str = "All";

/// Visible subset for the current folder and search text, in catalog order.
///
/// Search is plain case-insensitive substring matching against the title and
/// the provider name; surrounding whitespace in the query is ignored.
pub fn filter(items: &[Arc<MediaItem>], folder: &str, query: &str) -> Vec<Arc<MediaItem>> {
    let q = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_folder(item, folder) && matches_query(item, &q))
        .cloned()
        .collect()
}

fn matches_folder(item: &MediaItem, folder: &str) -> bool {
    folder == ALL_FOLDERS || item.folder == folder
}

// `q` is already trimmed and lowercased
fn matches_query(item: &MediaItem, q: &str) -> bool {
    if q.is_empty() {
        return true;
    }
    let title = item.title.as_deref().unwrap_or("").to_lowercase();
    title.contains(q) || item.provider().name().contains(q)
}

/// `"All"` followed by each distinct folder in first-seen order.
pub fn folders(items: &[Arc<MediaItem>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = vec![ALL_FOLDERS.to_string()];
    for item in items {
        if seen.insert(item.folder.as_str()) {
            names.push(item.folder.clone());
        }
    }
    names
}

/// Toolbar shortcuts that rewrite the search text 🏷️
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    All,
    Provider(Provider),
}

impl QuickFilter {
    pub const CHIPS: [QuickFilter; 4] = [
        QuickFilter::All,
        QuickFilter::Provider(Provider::Youtube),
        QuickFilter::Provider(Provider::TikTok),
        QuickFilter::Provider(Provider::Instagram),
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::All => "All",
            QuickFilter::Provider(p) => p.label(),
        }
    }

    /// Search text this chip produces
    pub fn query(self) -> String {
        match self {
            QuickFilter::All => String::new(),
            QuickFilter::Provider(p) => p.name().to_string(),
        }
    }

    /// The chip whose query equals `query`, for highlighting
    pub fn active_for(query: &str) -> Option<QuickFilter> {
        Self::CHIPS
            .into_iter()
            .find(|chip| chip.query() == query.trim().to_lowercase())
    }
}
