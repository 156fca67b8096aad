//! Render model for the overlay.
//!
//! The host's UI layer turns an [`OverlayView`] into markup. Mobile and
//! desktop are disjoint strategies: mobile docks full-width against the top
//! or bottom edge, desktop floats at the current [`Placement`].

use crate::config::PluginConfig;
use crate::consts::*;
use crate::store::types::{MediaKind, PlayerSelection};

use super::state::{MobileDock, OverlayState, Placement, format_px};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Px(v) => format_px(v),
            Self::Percent(v) => format!("{v}%"),
        }
    }
}

/// Absolutely positioned overlay container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStyle {
    pub width: Length,
    pub z_index: u32,
    pub placement: Placement,
}

impl ContainerStyle {
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = format!("width: {}; z-index: {}; position: absolute", self.width.css(), self.z_index);
        let offsets = self.placement.css();
        if !offsets.is_empty() {
            css.push_str("; ");
            css.push_str(&offsets);
        }
        css
    }
}

/// What goes inside the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerContent {
    Audio { src: String, mime: String },
    Video { src: String, mime: String },
    Unsupported { mime: String },
}

impl PlayerContent {
    /// Remount key for the media element; a new file gets a fresh element.
    #[must_use]
    pub fn element_key(&self) -> Option<&str> {
        match self {
            Self::Audio { src, .. } | Self::Video { src, .. } => Some(src.as_str()),
            Self::Unsupported { .. } => None,
        }
    }

    /// Placeholder text for files the overlay cannot play.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unsupported { mime } => Some(format!("Unsupported mime type {mime}")),
            Self::Audio { .. } | Self::Video { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Hide/Show the player (playback continues while hidden).
    ToggleVisibility,
    /// Desktop only: enable/disable drag mode.
    ToggleDrag,
    /// Mobile only: switch the dock edge.
    MoveDock,
    /// Copy the playback position to the clipboard.
    CopyTimestamp,
    /// Open the comment thread of the playing post.
    ShowComments,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayButton {
    pub kind: ButtonKind,
    pub label: &'static str,
    pub anchor: Placement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub layout: LayoutMode,
    pub container: ContainerStyle,
    pub content: PlayerContent,
    /// False while hidden; the content stays mounted so playback continues.
    pub content_visible: bool,
    /// Whether the container is currently a drag source.
    pub draggable: bool,
    pub buttons: Vec<OverlayButton>,
}

/// Build the render model for `selection` at `viewport_width`.
#[must_use]
pub fn render(
    state: &OverlayState,
    selection: &PlayerSelection,
    config: &PluginConfig,
    viewport_width: f64,
) -> OverlayView {
    let mime = selection.file_info.effective_mime().to_owned();
    let kind = MediaKind::from_mime(&mime);
    let layout = if config.is_mobile(viewport_width) { LayoutMode::Mobile } else { LayoutMode::Desktop };

    let container = match layout {
        LayoutMode::Mobile => ContainerStyle {
            width: Length::Percent(100.0),
            z_index: OVERLAY_Z_INDEX,
            placement: mobile_placement(state.mobile_dock),
        },
        LayoutMode::Desktop => ContainerStyle {
            width: Length::Px(if kind == Some(MediaKind::Audio) { AUDIO_WIDTH_PX } else { VIDEO_WIDTH_PX }),
            z_index: OVERLAY_Z_INDEX,
            placement: state.placement,
        },
    };

    let src = state.file_url.clone();
    let content = match kind {
        Some(MediaKind::Audio) => PlayerContent::Audio { src, mime },
        Some(MediaKind::Video) => PlayerContent::Video { src, mime },
        None => PlayerContent::Unsupported { mime },
    };

    OverlayView {
        layout,
        container,
        content,
        content_visible: state.visible,
        draggable: layout == LayoutMode::Desktop && state.drag_enabled,
        buttons: buttons(state, layout),
    }
}

/// Docked position; drag coordinates never apply on mobile.
#[must_use]
pub fn mobile_placement(dock: MobileDock) -> Placement {
    match dock {
        MobileDock::Top => Placement::top_right(MOBILE_DOCK_OFFSET_PX, 0.0),
        MobileDock::Bottom => Placement::bottom_right(MOBILE_DOCK_OFFSET_PX, 0.0),
    }
}

fn buttons(state: &OverlayState, layout: LayoutMode) -> Vec<OverlayButton> {
    let mut out = Vec::with_capacity(4);
    let visibility_label = if state.visible { "Hide" } else { "Show" };

    match layout {
        LayoutMode::Desktop => {
            let anchor = |left| Placement::top_left(DESKTOP_CONTROL_TOP_PX, left);
            out.push(OverlayButton {
                kind: ButtonKind::ToggleVisibility,
                label: visibility_label,
                anchor: anchor(DESKTOP_TOGGLE_LEFT_PX),
            });
            if state.visible {
                out.push(OverlayButton {
                    kind: ButtonKind::ToggleDrag,
                    label: if state.drag_enabled { "UnDrag" } else { "Drag" },
                    anchor: anchor(DESKTOP_DRAG_LEFT_PX),
                });
            }
            out.push(OverlayButton {
                kind: ButtonKind::CopyTimestamp,
                label: "Timestamp",
                anchor: anchor(DESKTOP_TIMESTAMP_LEFT_PX),
            });
            out.push(OverlayButton {
                kind: ButtonKind::ShowComments,
                label: "Comments",
                anchor: anchor(DESKTOP_COMMENTS_LEFT_PX),
            });
        }
        LayoutMode::Mobile => {
            let anchor = |right| Placement::top_right(MOBILE_CONTROL_TOP_PX, right);
            out.push(OverlayButton {
                kind: ButtonKind::ToggleVisibility,
                label: visibility_label,
                anchor: anchor(MOBILE_TOGGLE_RIGHT_PX),
            });
            if state.visible {
                out.push(OverlayButton {
                    kind: ButtonKind::MoveDock,
                    label: "Move",
                    anchor: anchor(MOBILE_MOVE_RIGHT_PX),
                });
            }
            out.push(OverlayButton {
                kind: ButtonKind::CopyTimestamp,
                label: "Timestamp",
                anchor: anchor(MOBILE_TIMESTAMP_RIGHT_PX),
            });
            out.push(OverlayButton {
                kind: ButtonKind::ShowComments,
                label: "Comments",
                anchor: anchor(MOBILE_COMMENTS_RIGHT_PX),
            });
        }
    }
    out
}
