//! Store actions, the pure reducer, and the multi-step action helpers the
//! overlay and link router use.
//!
//! DESIGN
//! ======
//! Actions serialize as `{"type": "...", "data": ...}` so payloads coming
//! from the host's dispatcher deserialize straight into [`Action`].

use serde::{Deserialize, Serialize};

use super::Store;
use super::selectors::{get_post, global_player, post_media_file};
use super::types::{FileInfo, HostState, PlayerSelection, Post};
use crate::links::DeepLink;

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// A post arrived (or was edited) in the host's post store.
    ReceivedPost(Post),
    /// File metadata for a post arrived.
    ReceivedFiles {
        #[serde(rename = "postID")]
        post_id: String,
        files: Vec<FileInfo>,
    },
    /// Open the overlay on a file, optionally seeking.
    ShowGlobalPlayer(PlayerSelection),
    /// Dismiss the overlay.
    CloseGlobalPlayer,
    /// Open the comment thread of a post.
    ShowComments {
        #[serde(rename = "postID")]
        post_id: String,
    },
}

impl Action {
    /// The wire `type` tag, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReceivedPost(_) => "RECEIVED_POST",
            Self::ReceivedFiles { .. } => "RECEIVED_FILES",
            Self::ShowGlobalPlayer(_) => "SHOW_GLOBAL_PLAYER",
            Self::CloseGlobalPlayer => "CLOSE_GLOBAL_PLAYER",
            Self::ShowComments { .. } => "SHOW_COMMENTS",
        }
    }
}

/// Apply `action` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: &HostState, action: &Action) -> HostState {
    let mut next = state.clone();
    match action {
        Action::ReceivedPost(post) => {
            let mut post = post.clone();
            let mut orphans: Vec<&str> = next
                .files
                .values()
                .filter(|f| f.post_id == post.id && !post.file_ids.contains(&f.id))
                .map(|f| f.id.as_str())
                .collect();
            orphans.sort_unstable();
            post.file_ids.extend(orphans.into_iter().map(str::to_owned));
            next.posts.insert(post.id.clone(), post);
        }
        Action::ReceivedFiles { post_id, files } => {
            for file in files {
                let mut file = file.clone();
                if file.post_id.is_empty() {
                    file.post_id.clone_from(post_id);
                }
                if let Some(post) = next.posts.get_mut(post_id) {
                    if !post.file_ids.contains(&file.id) {
                        post.file_ids.push(file.id.clone());
                    }
                }
                next.files.insert(file.id.clone(), file);
            }
        }
        Action::ShowGlobalPlayer(selection) => {
            next.plugin.global_player = Some(selection.clone());
            next.plugin.player_revision = next.plugin.player_revision.wrapping_add(1);
        }
        Action::CloseGlobalPlayer => {
            next.plugin.global_player = None;
        }
        Action::ShowComments { post_id } => {
            next.plugin.comments_post_id = Some(post_id.clone());
        }
    }
    next
}

/// Selection that plays the media attached to `post_id`.
fn media_selection(state: &HostState, post_id: &str, seek_to: Option<String>) -> Option<PlayerSelection> {
    let post = get_post(state, post_id)?;
    let file = post_media_file(state, post)?;
    Some(PlayerSelection { file_info: file.clone(), seek_to, post_id: post.id.clone() })
}

/// Play the media attached to `post_id` and open its comment thread.
///
/// Returns `false` when the post is unknown or has no playable attachment;
/// the comment thread is opened either way.
pub fn play_and_show_comments<S: Store + ?Sized>(store: &S, post_id: &str) -> bool {
    let state = store.get_state();
    let playing_same_post = global_player(&state).is_some_and(|s| s.post_id == post_id);

    let started = if playing_same_post {
        true
    } else if let Some(selection) = media_selection(&state, post_id, None) {
        store.dispatch(Action::ShowGlobalPlayer(selection));
        true
    } else {
        tracing::debug!(%post_id, "no playable media for post");
        false
    };

    store.dispatch(Action::ShowComments { post_id: post_id.to_owned() });
    started
}

/// Route a clicked deep link. Media links open the overlay at the linked
/// position and return `true`; YouTube links are left to the host's embed.
pub fn open_deep_link<S: Store + ?Sized>(store: &S, link: &DeepLink) -> bool {
    match link {
        DeepLink::Media { post_id, seek_to } => {
            let state = store.get_state();
            let Some(selection) = media_selection(&state, post_id, Some(seek_to.clone())) else {
                tracing::debug!(%post_id, "deep link target has no playable media");
                return false;
            };
            store.dispatch(Action::ShowGlobalPlayer(selection));
            true
        }
        DeepLink::Youtube { .. } => false,
    }
}
