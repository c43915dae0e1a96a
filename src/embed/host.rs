use super::{EmbedContent, EmbedHost, MountPoint};
use std::collections::HashMap;
use std::process::Stdio;

/// Terminal-side embed host.
///
/// A terminal cannot run an iframe, so the "widget" here is the resolved
/// embed descriptor that the UI draws (and can hand to the system browser).
#[derive(Debug, Default)]
pub struct TerminalHost {
    live: HashMap<MountPoint, EmbedContent>,
    builds: usize,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self, mount: &MountPoint) -> Option<&EmbedContent> {
        self.live.get(mount)
    }

    /// Number of live embeds across all mount points
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total builds issued, for diagnostics
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Hand the content at `mount` to the system browser. Returns the URL
    /// that was launched.
    pub fn open_in_browser(&self, mount: &MountPoint) -> std::io::Result<Option<String>> {
        let Some(content) = self.live.get(mount) else {
            return Ok(None);
        };
        launch_browser(&content.src)?;
        Ok(Some(content.src.clone()))
    }
}

impl EmbedHost for TerminalHost {
    fn clear(&mut self, mount: &MountPoint) {
        self.live.remove(mount);
    }

    fn build(&mut self, mount: &MountPoint, content: &EmbedContent) {
        if let Some(stale) = self.live.insert(mount.clone(), content.clone()) {
            // Slots always clear first; reaching this means a caller skipped it
            tracing::warn!(mount = ?mount, stale = %stale.src, "replaced a live embed without clearing");
        }
        self.builds += 1;
    }
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Spawn the platform opener and reap it in the background. Only a failure
/// to spawn is reported; what the browser does afterwards is not tracked.
fn launch_browser(url: &str) -> std::io::Result<()> {
    let mut child = tokio::process::Command::new(OPENER)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::info!(url, opener = OPENER, "opened embed in browser");
    tokio::spawn(async move {
        if let Err(e) = child.wait().await {
            tracing::warn!(error = %e, "browser opener did not exit cleanly");
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaItem;
    use crate::embed::EmbedSlot;
    use std::sync::Arc;

    #[test]
    fn test_slot_content_reflects_only_latest_item() {
        let mut host = TerminalHost::new();
        let mut slot = EmbedSlot::new(MountPoint::Modal);
        let a = Arc::new(MediaItem::youtube("a", "Cooking", "X1"));
        let b = Arc::new(MediaItem::tiktok("b", "Fashion", "Y1", None));

        slot.mount(&a, true, &mut host);
        slot.mount(&b, true, &mut host);

        assert_eq!(host.live_count(), 1);
        let content = host.content(&MountPoint::Modal).unwrap();
        assert_eq!(content.item_id, "b");
        assert_eq!(host.builds(), 2);

        slot.unmount(&mut host);
        assert_eq!(host.live_count(), 0);
    }

    #[test]
    fn test_open_in_browser_without_content() {
        let host = TerminalHost::new();
        assert_eq!(host.open_in_browser(&MountPoint::Modal).unwrap(), None);
    }
}
