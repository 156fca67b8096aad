//! Host-provided capabilities the overlay drives: the mounted audio/video
//! element and the system clipboard.

use crate::timestamp::format_seconds;

/// The playable element the host mounted for the current file.
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position.
    fn set_current_time(&mut self, seconds: f64);
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Copy the element's playback position to the clipboard as `m:ss`.
///
/// Returns the copied text, or `None` when no element is mounted.
pub fn copy_timestamp(player: Option<&dyn MediaElement>, clipboard: &mut dyn Clipboard) -> Option<String> {
    let player = player?;
    let text = format_seconds(player.current_time());
    clipboard.write_text(&text);
    tracing::debug!(%text, "copied playback timestamp");
    Some(text)
}
