//! # mattermusic
//!
//! Timestamp deep links and the floating media player overlay for a chat
//! plugin. The host application owns the post/file store and the UI toolkit;
//! this crate owns the logic that sits between them: rewriting `m:ss` tokens
//! in chat messages into links back into the player, and deriving what the
//! overlay shows from the latest "now playing" selection.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`hooks`] | Message formatting hook (timestamp link rewriting) |
//! | [`overlay`] | Player overlay state machine and render model |
//! | [`store`] | Injected host store interface, actions, reducer, selectors |
//! | [`links`] | Deep link builders and parser |
//! | [`timestamp`] | `m:ss` extraction, parsing, and formatting |
//! | [`youtube`] | YouTube video id heuristic |
//! | [`config`] | Environment-driven plugin configuration |
//! | [`consts`] | Shared layout constants (presets, offsets, breakpoints) |

pub mod config;
pub mod consts;
pub mod hooks;
pub mod links;
pub mod overlay;
pub mod store;
pub mod timestamp;
pub mod youtube;

pub use config::{ConfigError, PluginConfig};
pub use hooks::Hooks;
pub use links::{DeepLink, LinkError};
pub use overlay::GlobalPlayer;
pub use store::{Action, MemoryStore, Store};
