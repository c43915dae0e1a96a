use crate::thumbs::preview::PreviewResult;
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    /// A thumbnail for this item id landed in the cache
    ThumbnailResolved(String),
    /// Preview image download finished (url, result)
    PreviewLoaded(String, PreviewResult),
    Tick,
}
