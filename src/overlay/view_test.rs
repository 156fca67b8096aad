use super::*;
use crate::overlay::state::Point;
use crate::store::types::FileInfo;

const DESKTOP: f64 = 1280.0;
const PHONE: f64 = 390.0;

fn selection(mime: &str) -> PlayerSelection {
    PlayerSelection {
        file_info: FileInfo { id: "f1".into(), mime_type: mime.into(), ..FileInfo::default() },
        seek_to: None,
        post_id: "p1".into(),
    }
}

fn state_for(selection: &PlayerSelection) -> OverlayState {
    let mut state = OverlayState::new();
    state.apply_selection(&PluginConfig::default(), Some(selection));
    state
}

fn labels(view: &OverlayView) -> Vec<&'static str> {
    view.buttons.iter().map(|b| b.label).collect()
}

// =============================================================
// Layout selection
// =============================================================

#[test]
fn breakpoint_selects_layout() {
    let sel = selection("audio/mpeg");
    let state = state_for(&sel);
    let config = PluginConfig::default();

    assert_eq!(render(&state, &sel, &config, 768.0).layout, LayoutMode::Mobile);
    assert_eq!(render(&state, &sel, &config, 769.0).layout, LayoutMode::Desktop);
}

#[test]
fn desktop_audio_is_wide_at_audio_preset() {
    let sel = selection("audio/mpeg");
    let view = render(&state_for(&sel), &sel, &PluginConfig::default(), DESKTOP);

    assert_eq!(view.container.width, Length::Px(650.0));
    assert_eq!(view.container.placement, Placement::audio_default());
    assert_eq!(
        view.container.css(),
        "width: 650px; z-index: 90000000; position: absolute; top: 65px; right: 90px"
    );
    assert_eq!(view.content, PlayerContent::Audio { src: "/api/v4/files/f1".into(), mime: "audio/mpeg".into() });
}

#[test]
fn desktop_video_is_narrow_at_video_preset() {
    let sel = selection("video/mp4");
    let view = render(&state_for(&sel), &sel, &PluginConfig::default(), DESKTOP);

    assert_eq!(view.container.width, Length::Px(400.0));
    assert_eq!(view.container.placement, Placement::video_default());
    assert!(matches!(view.content, PlayerContent::Video { .. }));
    assert_eq!(view.content.element_key(), Some("/api/v4/files/f1"));
}

#[test]
fn unsupported_mime_renders_placeholder() {
    let sel = selection("application/pdf");
    let view = render(&state_for(&sel), &sel, &PluginConfig::default(), DESKTOP);

    assert_eq!(view.content.message().as_deref(), Some("Unsupported mime type application/pdf"));
    assert_eq!(view.content.element_key(), None);
    assert_eq!(view.container.width, Length::Px(400.0));
}

#[test]
fn mobile_docks_full_width_and_ignores_drag_position() {
    let sel = selection("audio/mpeg");
    let mut state = state_for(&sel);
    state.toggle_drag();
    state.drag_end(Some(Point { x: 900.0, y: 500.0 }));

    let view = render(&state, &sel, &PluginConfig::default(), PHONE);
    assert_eq!(view.container.width, Length::Percent(100.0));
    assert_eq!(view.container.placement, Placement::top_right(50.0, 0.0));
    assert!(!view.draggable);
    assert_eq!(
        view.container.css(),
        "width: 100%; z-index: 90000000; position: absolute; top: 50px; right: 0px"
    );
}

#[test]
fn mobile_dock_bottom() {
    let sel = selection("video/mp4");
    let mut state = state_for(&sel);
    state.toggle_mobile_dock();

    let view = render(&state, &sel, &PluginConfig::default(), PHONE);
    assert_eq!(view.container.placement, Placement::bottom_right(50.0, 0.0));
}

#[test]
fn desktop_uses_dropped_placement() {
    let sel = selection("audio/mpeg");
    let mut state = state_for(&sel);
    state.toggle_drag();
    state.drag_end(Some(Point { x: 600.0, y: 250.0 }));

    let view = render(&state, &sel, &PluginConfig::default(), DESKTOP);
    assert_eq!(view.container.placement, Placement::top_left(150.0, 300.0));
    assert!(view.draggable);
}

// =============================================================
// Buttons
// =============================================================

#[test]
fn desktop_buttons_in_order() {
    let sel = selection("audio/mpeg");
    let view = render(&state_for(&sel), &sel, &PluginConfig::default(), DESKTOP);

    assert_eq!(labels(&view), ["Hide", "Drag", "Timestamp", "Comments"]);
    assert_eq!(view.buttons[0].anchor, Placement::top_left(-20.0, 30.0));
    assert_eq!(view.buttons[1].anchor, Placement::top_left(-20.0, 80.0));
    assert_eq!(view.buttons[2].anchor, Placement::top_left(-20.0, 210.0));
    assert_eq!(view.buttons[3].anchor, Placement::top_left(-20.0, 130.0));
}

#[test]
fn drag_button_label_reflects_mode() {
    let sel = selection("audio/mpeg");
    let mut state = state_for(&sel);
    state.toggle_drag();

    let view = render(&state, &sel, &PluginConfig::default(), DESKTOP);
    assert_eq!(view.buttons[1].kind, ButtonKind::ToggleDrag);
    assert_eq!(view.buttons[1].label, "UnDrag");
}

#[test]
fn mobile_buttons_in_order() {
    let sel = selection("audio/mpeg");
    let view = render(&state_for(&sel), &sel, &PluginConfig::default(), PHONE);

    assert_eq!(labels(&view), ["Hide", "Move", "Timestamp", "Comments"]);
    assert_eq!(view.buttons[0].anchor, Placement::top_right(0.0, 10.0));
    assert_eq!(view.buttons[1].anchor, Placement::top_right(0.0, 60.0));
    assert_eq!(view.buttons[2].anchor, Placement::top_right(0.0, 180.0));
    assert_eq!(view.buttons[3].anchor, Placement::top_right(0.0, 110.0));
}

#[test]
fn hidden_player_keeps_content_and_drops_layout_button() {
    let sel = selection("audio/mpeg");
    let mut state = state_for(&sel);
    state.toggle_visible();

    let view = render(&state, &sel, &PluginConfig::default(), DESKTOP);
    assert!(!view.content_visible);
    assert!(matches!(view.content, PlayerContent::Audio { .. }));
    assert_eq!(labels(&view), ["Show", "Timestamp", "Comments"]);

    let view = render(&state, &sel, &PluginConfig::default(), PHONE);
    assert_eq!(labels(&view), ["Show", "Timestamp", "Comments"]);
}

#[test]
fn configured_breakpoint_is_respected() {
    let sel = selection("audio/mpeg");
    let config = PluginConfig { mobile_max_width: 1024, ..PluginConfig::default() };
    let view = render(&state_for(&sel), &sel, &config, 1000.0);
    assert_eq!(view.layout, LayoutMode::Mobile);
}
