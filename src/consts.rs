//! Shared layout constants for the player overlay.

// ── Layout selection ────────────────────────────────────────────

/// Viewports at or below this width (logical pixels) use the docked mobile layout.
pub const MOBILE_MAX_WIDTH_PX: u32 = 768;

/// Stacking order of the overlay container.
pub const OVERLAY_Z_INDEX: u32 = 90_000_000;

/// Desktop container width when playing audio.
pub const AUDIO_WIDTH_PX: f64 = 650.0;

/// Desktop container width when playing video (and anything unrecognised).
pub const VIDEO_WIDTH_PX: f64 = 400.0;

// ── Default placements ──────────────────────────────────────────

pub const AUDIO_DEFAULT_TOP_PX: f64 = 65.0;
pub const AUDIO_DEFAULT_RIGHT_PX: f64 = 90.0;

pub const VIDEO_DEFAULT_TOP_PX: f64 = 119.0;
pub const VIDEO_DEFAULT_RIGHT_PX: f64 = 0.0;

/// Distance of the docked mobile player from the top or bottom edge.
pub const MOBILE_DOCK_OFFSET_PX: f64 = 50.0;

// ── Drag ────────────────────────────────────────────────────────

/// Subtracted from the drop y so the drag handle lands under the cursor.
pub const DRAG_ANCHOR_DY_PX: f64 = -100.0;

/// Subtracted from the drop x so the drag handle lands under the cursor.
pub const DRAG_ANCHOR_DX_PX: f64 = -300.0;

// ── Control anchors ─────────────────────────────────────────────
//
// Desktop controls hang above the container (negative top) and run
// left to right; mobile controls sit inside the top edge, right to left.

pub const DESKTOP_CONTROL_TOP_PX: f64 = -20.0;
pub const DESKTOP_TOGGLE_LEFT_PX: f64 = 30.0;
pub const DESKTOP_DRAG_LEFT_PX: f64 = 80.0;
pub const DESKTOP_COMMENTS_LEFT_PX: f64 = 130.0;
pub const DESKTOP_TIMESTAMP_LEFT_PX: f64 = 210.0;

pub const MOBILE_CONTROL_TOP_PX: f64 = 0.0;
pub const MOBILE_TOGGLE_RIGHT_PX: f64 = 10.0;
pub const MOBILE_MOVE_RIGHT_PX: f64 = 60.0;
pub const MOBILE_COMMENTS_RIGHT_PX: f64 = 110.0;
pub const MOBILE_TIMESTAMP_RIGHT_PX: f64 = 180.0;
