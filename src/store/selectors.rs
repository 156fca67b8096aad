//! Read-only queries over a [`HostState`] snapshot.

use super::types::{FileInfo, HostState, MediaKind, PlayerSelection, Post};

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

#[must_use]
pub fn get_post<'a>(state: &'a HostState, post_id: &str) -> Option<&'a Post> {
    state.posts.get(post_id)
}

/// Loaded files listed in `post.file_ids`, in order. The reducer keeps
/// that list linked in both arrival orders of posts and files.
#[must_use]
pub fn post_files<'a>(state: &'a HostState, post: &Post) -> Vec<&'a FileInfo> {
    post.file_ids.iter().filter_map(|id| state.files.get(id)).collect()
}

/// The first audio or video file attached to `post`.
#[must_use]
pub fn post_media_file<'a>(state: &'a HostState, post: &Post) -> Option<&'a FileInfo> {
    post_files(state, post).into_iter().find(|f| is_media_mime(f.effective_mime()))
}

#[must_use]
pub fn post_has_media(state: &HostState, post: &Post) -> bool {
    post_media_file(state, post).is_some()
}

/// The current "now playing" selection, if the player is open.
#[must_use]
pub fn global_player(state: &HostState) -> Option<&PlayerSelection> {
    state.plugin.global_player.as_ref()
}

/// Guess a MIME type from a file extension (with or without the dot).
#[must_use]
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    let ext = extension.trim().trim_start_matches('.').to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => return None,
    };
    Some(mime)
}

/// Whether a MIME string is playable by the overlay.
#[must_use]
pub fn is_media_mime(mime: &str) -> bool {
    MediaKind::from_mime(mime).is_some()
}
