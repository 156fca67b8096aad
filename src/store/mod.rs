//! Host store interface and the plugin's state model.
//!
//! DESIGN
//! ======
//! The host application owns the central store. The plugin only needs three
//! capabilities from it: read the latest snapshot, dispatch an action, and be
//! told when the snapshot changes. [`Store`] captures exactly that so hooks
//! and the overlay can be driven by the real host or by [`MemoryStore`].
//!
//! Everything runs on the UI thread, so snapshots are shared through `Rc`.

use std::rc::Rc;

pub mod actions;
pub mod memory;
pub mod selectors;
pub mod types;

pub use actions::{Action, open_deep_link, play_and_show_comments, reduce};
pub use memory::MemoryStore;
pub use types::{FileInfo, HostState, MediaKind, PlayerSelection, PluginState, Post};

/// Callback invoked with the new snapshot after every dispatch.
pub type Listener = Box<dyn FnMut(&HostState)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub trait Store {
    /// The latest state snapshot.
    fn get_state(&self) -> Rc<HostState>;

    /// Send an action through the host's reducers.
    fn dispatch(&self, action: Action);

    /// Register `listener` to run after each dispatch.
    fn subscribe(&self, listener: Listener) -> SubscriptionId;

    /// Remove a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
