//! Host-owned records the plugin reads: posts, file attachments, and the
//! plugin's own slice of the store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::selectors::mime_from_extension;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A chat post as delivered by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Thread root; the host sends an empty string for top-level posts.
    #[serde(default)]
    pub root_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_ids: Vec<String>,
}

impl Post {
    /// The thread root this post replies to, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        Some(self.root_id.as_str()).filter(|id| !id.is_empty())
    }
}

/// An uploaded file attached to a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub mime_type: String,
}

impl FileInfo {
    /// The declared MIME type, or one guessed from the extension when blank.
    #[must_use]
    pub fn effective_mime(&self) -> &str {
        if self.mime_type.trim().is_empty() {
            mime_from_extension(&self.extension).unwrap_or_default()
        } else {
            &self.mime_type
        }
    }

    #[must_use]
    pub fn media_kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(self.effective_mime())
    }
}

/// Which HTML media element plays a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Audio,
    Video,
}

impl MediaKind {
    /// Classify a MIME string by substring, so `audio/mpeg` and
    /// `application/x-audio` both count as audio.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.contains("audio") {
            Some(Self::Audio)
        } else if mime.contains("video") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// What the overlay should show right now. Replaced wholesale on every
/// "show" dispatch and cleared on "close".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSelection {
    #[serde(rename = "fileInfo")]
    pub file_info: FileInfo,
    /// Optional `m:ss` position to seek to once the media loads.
    #[serde(rename = "seekTo", default, skip_serializing_if = "Option::is_none")]
    pub seek_to: Option<String>,
    #[serde(rename = "postID")]
    pub post_id: String,
}

/// The plugin's slice of the host store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginState {
    #[serde(default)]
    pub global_player: Option<PlayerSelection>,
    /// Post whose comment thread the host should have open.
    #[serde(default)]
    pub comments_post_id: Option<String>,
    /// Bumped on every show dispatch, so re-opening the same selection still
    /// re-seeks.
    #[serde(default)]
    pub player_revision: u64,
}

/// Snapshot of everything the plugin reads from the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostState {
    pub posts: HashMap<String, Post>,
    pub files: HashMap<String, FileInfo>,
    pub plugin: PluginState,
}
