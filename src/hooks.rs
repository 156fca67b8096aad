//! Message formatting hook: rewrites `m:ss` tokens into player deep links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host calls [`Hooks::message_will_format`] with each post before its
//! Markdown is rendered. A timestamp in a thread about an uploaded track or
//! a YouTube video becomes a link that seeks the player to that position.
//!
//! Replacement rule: each distinct timestamp is linked at its first
//! occurrence only. A token repeated verbatim later in the message stays
//! plain text. Splicing happens at match positions, so the output differs
//! from a plain substring replace when one token is a suffix of another:
//! in `11:30 vs 1:30` both tokens get their own link.

use std::collections::HashSet;
use std::rc::Rc;

use crate::config::PluginConfig;
use crate::links::{media_link, youtube_link};
use crate::store::Store;
use crate::store::selectors::{get_post, post_has_media};
use crate::store::types::Post;
use crate::timestamp::find_timestamps;
use crate::youtube::get_youtube_video_id;

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

/// Where the timestamps in a message point.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LinkTarget {
    Media { post_id: String },
    Youtube { post_id: String, video_id: String },
}

pub struct Hooks<S: Store + ?Sized> {
    store: Rc<S>,
    config: PluginConfig,
}

impl<S: Store + ?Sized> Hooks<S> {
    #[must_use]
    pub fn new(store: Rc<S>, config: PluginConfig) -> Self {
        Self { store, config }
    }

    /// Rewrite timestamps in `message` into deep links for `post`.
    ///
    /// Returns `message` unchanged when it holds no timestamps or when the
    /// media post has neither a playable attachment nor a YouTube link.
    #[must_use]
    pub fn message_will_format(&self, post: &Post, message: &str) -> String {
        let timestamps = find_timestamps(message);
        if timestamps.is_empty() {
            return message.to_owned();
        }

        let Some(target) = self.resolve_target(post) else {
            return message.to_owned();
        };

        let mut seen = HashSet::new();
        let mut out = String::with_capacity(message.len() + timestamps.len() * 64);
        let mut cursor = 0;
        for ts in &timestamps {
            if !seen.insert(ts.text) {
                continue;
            }
            out.push_str(&message[cursor..ts.range.start]);
            out.push_str(&self.link_for(&target, ts.text));
            cursor = ts.range.end;
        }
        out.push_str(&message[cursor..]);

        tracing::debug!(post_id = %post.id, links = seen.len(), "rewrote timestamps");
        out
    }

    /// Find the post that owns the media under discussion and decide which
    /// kind of link its timestamps get.
    fn resolve_target(&self, post: &Post) -> Option<LinkTarget> {
        let state = self.store.get_state();
        let (media_post, attachments) = match post.parent_id() {
            Some(root_id) => {
                let Some(root) = get_post(&state, root_id) else {
                    tracing::debug!(post_id = %post.id, %root_id, "thread root not loaded");
                    return None;
                };
                (root, root)
            }
            // The stored copy carries the file links the reducer maintains.
            None => (post, get_post(&state, &post.id).unwrap_or(post)),
        };

        if post_has_media(&state, attachments) {
            return Some(LinkTarget::Media { post_id: media_post.id.clone() });
        }

        let video_id = get_youtube_video_id(&media_post.message);
        if video_id.is_empty() {
            return None;
        }
        Some(LinkTarget::Youtube { post_id: media_post.id.clone(), video_id })
    }

    fn link_for(&self, target: &LinkTarget, timestamp: &str) -> String {
        let scheme = &self.config.link_scheme;
        match target {
            LinkTarget::Media { post_id } => media_link(scheme, post_id, timestamp),
            LinkTarget::Youtube { post_id, video_id } => youtube_link(scheme, post_id, timestamp, video_id),
        }
    }
}
