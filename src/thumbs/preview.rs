use crate::app::events::AppEvent;
use crate::loader::{LoadFuture, Registry};
use anyhow::Result;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use reqwest::Client;
use std::sync::{Arc, OnceLock};
use tokio::sync::mpsc;

/// Outcome of one preview download; cloneable so every waiter gets a copy.
pub type PreviewResult = std::result::Result<Arc<DynamicImage>, Arc<str>>;

#[derive(Clone)]
pub enum PreviewState {
    Loading,
    Loaded(Arc<DynamicImage>),
    Failed,
}

static PREVIEWS: OnceLock<Registry<PreviewResult>> = OnceLock::new();

/// Process-wide registry of thumbnail image downloads. Each URL is fetched at
/// most once per process, however many times the modal reopens it.
pub fn previews() -> &'static Registry<PreviewResult> {
    PREVIEWS.get_or_init(Registry::new)
}

pub fn load_preview(client: &Client, url: &str) -> LoadFuture<PreviewResult> {
    let client = client.clone();
    let owned = url.to_string();
    previews().ensure_loaded(url, move || async move {
        download(&client, &owned).await.map_err(|e| {
            tracing::warn!(url = %owned, error = %e, "preview download failed");
            Arc::from(e.to_string())
        })
    })
}

async fn download(client: &Client, url: &str) -> Result<Arc<DynamicImage>> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let img = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(Arc::new(img))
}

/// Fetch in the background and report back through the event channel.
pub fn spawn_preview(client: &Client, url: &str, tx: &mpsc::Sender<AppEvent>) {
    let load = load_preview(client, url);
    let tx = tx.clone();
    let url = url.to_string();
    tokio::spawn(async move {
        let result = load.await;
        let _ = tx.send(AppEvent::PreviewLoaded(url, result)).await;
    });
}

/// Render `img` with upper-half blocks (fg = top pixel, bg = bottom pixel),
/// fitted into `width` x `height` cells and vertically centered.
pub fn render_half_blocks(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'static>> {
    let target_w = width as u32;
    let target_h = height as u32 * 2;
    if target_w == 0 || target_h == 0 {
        return Vec::new();
    }

    let resized = img.resize(target_w, target_h, FilterType::Triangle);
    let img_h = resized.height();
    let rows = img_h.div_ceil(2);
    let padding_top = (height as u32).saturating_sub(rows) / 2;

    let mut lines: Vec<Line<'static>> = (0..padding_top).map(|_| Line::default()).collect();
    for y in (0..img_h).step_by(2) {
        let spans: Vec<Span<'static>> = (0..resized.width())
            .map(|x| {
                let top = resized.get_pixel(x, y);
                let bottom = if y + 1 < img_h {
                    resized.get_pixel(x, y + 1)
                } else {
                    top
                };
                Span::styled(
                    "▀",
                    Style::default()
                        .fg(Color::Rgb(top[0], top[1], top[2]))
                        .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_half_blocks_fit_area() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([255, 0, 0])));
        let lines = render_half_blocks(&img, 10, 10);
        // square image in a 10x20 pixel box -> 10x10 pixels -> 5 rows, padded by 2
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[0].spans.is_empty());
        assert_eq!(lines[2].spans.len(), 10);
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_half_blocks_empty_area() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        assert!(render_half_blocks(&img, 0, 5).is_empty());
    }
}
