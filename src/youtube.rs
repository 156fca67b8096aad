//! YouTube video id heuristic.
//!
//! Recognises `youtu.be/<id>`, `/v/<id>`, `/u/<c>/<id>`, `/embed/<id>` and
//! `watch?v=<id>` anywhere in free text. Only the first URL in the text is
//! considered; this is a best-effort scan, not a URL parser.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=)([^#&?\s]*)").expect("video id pattern is valid")
});

/// The first YouTube video id in `text`, or an empty string when none is found.
#[must_use]
pub fn get_youtube_video_id(text: &str) -> String {
    VIDEO_ID_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}
