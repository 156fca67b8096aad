//! Floating global media player overlay.
//!
//! DESIGN
//! ======
//! The overlay is split into three layers:
//!
//! - [`state`]: `OverlayState`, the per-instance UI state machine (position,
//!   visibility, drag mode, dock side, pending seek).
//! - [`view`]: a pure render model the host turns into markup.
//! - [`GlobalPlayer`]: the controller that binds both to the injected store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns the DOM. It subscribes to its store, calls
//! [`GlobalPlayer::sync`] from that subscription with the currently mounted
//! element, and re-renders from [`GlobalPlayer::view`]. Button presses and
//! element events flow back through the controller methods.
//!
//! A selection change is detected by the store's `player_revision`, so
//! dispatching the same "show" twice (clicking the same timestamp link
//! again) still seeks.

pub mod media;
pub mod state;
pub mod view;

use std::rc::Rc;

pub use media::{Clipboard, MediaElement};
pub use state::{MobileDock, OverlayState, Placement, Point};
pub use view::{ButtonKind, LayoutMode, OverlayView, PlayerContent};

use crate::config::PluginConfig;
use crate::store::selectors::global_player;
use crate::store::types::PlayerSelection;
use crate::store::{Action, Store, play_and_show_comments};


pub struct GlobalPlayer<S: Store + ?Sized> {
    store: Rc<S>,
    config: PluginConfig,
    state: OverlayState,
    selection: Option<PlayerSelection>,
    seen_revision: u64,
}

impl<S: Store + ?Sized> GlobalPlayer<S> {
    #[must_use]
    pub fn new(store: Rc<S>, config: PluginConfig) -> Self {
        Self { store, config, state: OverlayState::new(), selection: None, seen_revision: 0 }
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// The selection the overlay is currently showing.
    #[must_use]
    pub fn selection(&self) -> Option<&PlayerSelection> {
        self.selection.as_ref()
    }

    /// Pull the latest selection from the store.
    ///
    /// Returns `true` when a new "show" dispatch was observed; its seek has
    /// then been applied to `player`.
    pub fn sync(&mut self, player: Option<&mut dyn MediaElement>) -> bool {
        let snapshot = self.store.get_state();
        let selection = global_player(&snapshot);

        self.state.apply_selection(&self.config, selection);

        let revision = snapshot.plugin.player_revision;
        let fresh = revision != self.seen_revision;
        self.seen_revision = revision;
        if fresh {
            if let Some(selection) = selection {
                self.state.apply_seek(selection, player);
            }
        }

        self.selection = selection.cloned();
        fresh && self.selection.is_some()
    }

    /// Render model at `viewport_width`, or `None` while nothing is selected.
    #[must_use]
    pub fn view(&self, viewport_width: f64) -> Option<OverlayView> {
        let selection = self.selection.as_ref()?;
        Some(view::render(&self.state, selection, &self.config, viewport_width))
    }

    /// Handle a click on one of the overlay's buttons.
    pub fn press(&mut self, button: ButtonKind, player: Option<&dyn MediaElement>, clipboard: &mut dyn Clipboard) {
        tracing::debug!(?button, "overlay button");
        match button {
            ButtonKind::ToggleVisibility => self.state.toggle_visible(),
            ButtonKind::ToggleDrag => self.state.toggle_drag(),
            ButtonKind::MoveDock => self.state.toggle_mobile_dock(),
            ButtonKind::CopyTimestamp => {
                self.copy_timestamp(player, clipboard);
            }
            ButtonKind::ShowComments => {
                self.show_comments();
            }
        }
    }

    pub fn toggle_visible(&mut self) {
        self.state.toggle_visible();
    }

    pub fn toggle_drag(&mut self) {
        self.state.toggle_drag();
    }

    pub fn toggle_mobile_dock(&mut self) {
        self.state.toggle_mobile_dock();
    }

    pub fn drag_end(&mut self, offset: Option<Point>) {
        self.state.drag_end(offset);
    }

    pub fn on_loaded_data(&self, player: &mut dyn MediaElement) {
        self.state.on_loaded_data(player);
    }

    /// Copy the playback position as `m:ss`. See [`media::copy_timestamp`].
    pub fn copy_timestamp(&self, player: Option<&dyn MediaElement>, clipboard: &mut dyn Clipboard) -> Option<String> {
        media::copy_timestamp(player, clipboard)
    }

    /// Open the comment thread of the playing post. Returns `false` when
    /// nothing is playing.
    pub fn show_comments(&self) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        play_and_show_comments(&*self.store, &selection.post_id);
        true
    }

    pub fn close(&self) {
        self.store.dispatch(Action::CloseGlobalPlayer);
    }
}
