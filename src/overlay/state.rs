//! Overlay UI state and its transitions.
//!
//! DESIGN
//! ======
//! `OverlayState` is owned by one overlay instance and only mutated by its
//! own event handlers. Everything derived from the current file (URL,
//! default placement, MIME kind) is reset when the selected file id
//! changes; user choices (dock side, drag mode) survive file changes.

use crate::config::PluginConfig;
use crate::consts::{
    AUDIO_DEFAULT_RIGHT_PX, AUDIO_DEFAULT_TOP_PX, DRAG_ANCHOR_DX_PX, DRAG_ANCHOR_DY_PX, VIDEO_DEFAULT_RIGHT_PX,
    VIDEO_DEFAULT_TOP_PX,
};
use crate::store::types::{MediaKind, PlayerSelection};
use crate::timestamp::parse_seek;

use super::media::MediaElement;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Partial set of absolute-position offsets, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Placement {
    #[must_use]
    pub const fn top_right(top: f64, right: f64) -> Self {
        Self { top: Some(top), left: None, right: Some(right), bottom: None }
    }

    #[must_use]
    pub const fn top_left(top: f64, left: f64) -> Self {
        Self { top: Some(top), left: Some(left), right: None, bottom: None }
    }

    #[must_use]
    pub const fn bottom_right(bottom: f64, right: f64) -> Self {
        Self { top: None, left: None, right: Some(right), bottom: Some(bottom) }
    }

    #[must_use]
    pub const fn audio_default() -> Self {
        Self::top_right(AUDIO_DEFAULT_TOP_PX, AUDIO_DEFAULT_RIGHT_PX)
    }

    #[must_use]
    pub const fn video_default() -> Self {
        Self::top_right(VIDEO_DEFAULT_TOP_PX, VIDEO_DEFAULT_RIGHT_PX)
    }

    /// Audio files get the audio preset; everything else the video preset.
    #[must_use]
    pub fn default_for(kind: Option<MediaKind>) -> Self {
        match kind {
            Some(MediaKind::Audio) => Self::audio_default(),
            Some(MediaKind::Video) | None => Self::video_default(),
        }
    }

    /// CSS declarations for the set offsets, e.g. `top: 65px; right: 90px`.
    #[must_use]
    pub fn css(&self) -> String {
        [("top", self.top), ("left", self.left), ("right", self.right), ("bottom", self.bottom)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| format!("{name}: {}", format_px(v))))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `65.0` → `65px`, `12.5` → `12.5px`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// Which screen edge the mobile player docks against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileDock {
    #[default]
    Top,
    Bottom,
}

impl MobileDock {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// Where the media element loads the file from.
    pub file_url: String,
    /// Desktop position of the floating container.
    pub placement: Placement,
    /// MIME category of the last file shown.
    pub last_kind: Option<MediaKind>,
    pub mobile_dock: MobileDock,
    pub drag_enabled: bool,
    /// When false the container is hidden but the element stays mounted.
    pub visible: bool,
    /// Seek to re-apply once the element reports loaded data.
    pending_seek: Option<u32>,
    file_id: Option<String>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            file_url: String::new(),
            placement: Placement::audio_default(),
            last_kind: Some(MediaKind::Audio),
            mobile_dock: MobileDock::Top,
            drag_enabled: false,
            visible: true,
            pending_seek: None,
            file_id: None,
        }
    }
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the file the derived state was computed for.
    #[must_use]
    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    #[must_use]
    pub fn pending_seek(&self) -> Option<u32> {
        self.pending_seek
    }

    /// Take in a new selection snapshot. Returns `true` when the file changed
    /// and the derived state was reset.
    pub fn apply_selection(&mut self, config: &PluginConfig, selection: Option<&PlayerSelection>) -> bool {
        let next_id = selection.map(|s| s.file_info.id.as_str()).filter(|id| !id.is_empty());
        if next_id == self.file_id.as_deref() {
            return false;
        }
        self.file_id = next_id.map(str::to_owned);

        let (Some(selection), Some(file_id)) = (selection, next_id) else {
            return false;
        };

        let kind = selection.file_info.media_kind();
        self.file_url = config.file_url(file_id);
        self.visible = true;
        self.placement = Placement::default_for(kind);
        self.last_kind = kind;
        self.pending_seek = None;
        tracing::info!(%file_id, post_id = %selection.post_id, ?kind, "player selection changed");
        true
    }

    /// Seek the mounted element to the selection's `seekTo`, and remember it
    /// for [`Self::on_loaded_data`]. Without a mounted element the seek is
    /// dropped.
    pub fn apply_seek(&mut self, selection: &PlayerSelection, player: Option<&mut dyn MediaElement>) {
        let Some(seconds) = selection.seek_to.as_deref().and_then(parse_seek) else {
            return;
        };
        match player {
            Some(player) => {
                player.set_current_time(f64::from(seconds));
                self.pending_seek = Some(seconds);
            }
            None => {
                tracing::debug!(seconds, "media element not mounted; seek dropped");
                self.pending_seek = None;
            }
        }
    }

    /// The element finished loading; re-apply the last requested seek.
    pub fn on_loaded_data(&self, player: &mut dyn MediaElement) {
        if let Some(seconds) = self.pending_seek {
            player.set_current_time(f64::from(seconds));
        }
    }

    /// Drop the container at the pointer, shifted so the drag handle stays
    /// under the cursor. Ignored unless drag mode is on.
    pub fn drag_end(&mut self, offset: Option<Point>) {
        if !self.drag_enabled {
            return;
        }
        let Some(offset) = offset else {
            return;
        };
        self.placement = Placement::top_left(offset.y + DRAG_ANCHOR_DY_PX, offset.x + DRAG_ANCHOR_DX_PX);
        tracing::debug!(placement = %self.placement.css(), "overlay dropped");
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_drag(&mut self) {
        self.drag_enabled = !self.drag_enabled;
    }

    pub fn toggle_mobile_dock(&mut self) {
        self.mobile_dock = self.mobile_dock.toggled();
    }
}
