//! Timestamp deep links.
//!
//! DESIGN
//! ======
//! Two link shapes are produced by the message hook and recognised by the
//! click handler:
//!
//! - `<scheme>://media?postID=<id>&seekTo=<m:ss>`
//! - `<scheme>://youtube?postID=<id>&seekTo=<m:ss>&videoID=<v>`
//!
//! The builders emit these byte-for-byte (no percent-encoding) because the
//! host's link router matches on the literal text. Parsing goes through
//! `url::Url` so query decoding follows the URL standard.

use url::Url;

use crate::timestamp::parse_seek;

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

const MEDIA_KIND: &str = "media";
const YOUTUBE_KIND: &str = "youtube";

/// Errors returned by [`DeepLink::parse`].
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The text is not a URL at all.
    #[error("malformed deep link: {0}")]
    Malformed(#[from] url::ParseError),

    /// The URL belongs to some other scheme.
    #[error("unexpected scheme {found:?} (expected {expected:?})")]
    WrongScheme { expected: String, found: String },

    /// The URL host is neither `media` nor `youtube`.
    #[error("unknown deep link kind {0:?}")]
    UnknownKind(String),

    /// A required query parameter is absent or empty.
    #[error("deep link missing parameter {0}")]
    MissingParam(&'static str),
}

/// A parsed timestamp deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Seek into the audio/video file attached to `post_id`.
    Media { post_id: String, seek_to: String },
    /// Seek into the YouTube video linked from `post_id`.
    Youtube { post_id: String, seek_to: String, video_id: String },
}

impl DeepLink {
    /// Parse a deep link URL produced under `scheme`.
    ///
    /// # Errors
    ///
    /// See [`LinkError`] for the rejected shapes.
    pub fn parse(scheme: &str, raw: &str) -> Result<Self, LinkError> {
        let url = Url::parse(raw.trim())?;
        if url.scheme() != scheme.to_ascii_lowercase() {
            return Err(LinkError::WrongScheme { expected: scheme.to_owned(), found: url.scheme().to_owned() });
        }

        let mut post_id = None;
        let mut seek_to = None;
        let mut video_id = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "postID" => post_id = Some(value.into_owned()),
                "seekTo" => seek_to = Some(value.into_owned()),
                "videoID" => video_id = Some(value.into_owned()),
                _ => {}
            }
        }
        let post_id = required(post_id, "postID")?;
        let seek_to = required(seek_to, "seekTo")?;

        match url.host_str().unwrap_or_default() {
            MEDIA_KIND => Ok(Self::Media { post_id, seek_to }),
            YOUTUBE_KIND => {
                let video_id = required(video_id, "videoID")?;
                Ok(Self::Youtube { post_id, seek_to, video_id })
            }
            other => Err(LinkError::UnknownKind(other.to_owned())),
        }
    }

    /// Render the link URL under `scheme`.
    #[must_use]
    pub fn to_url(&self, scheme: &str) -> String {
        match self {
            Self::Media { post_id, seek_to } => {
                format!("{scheme}://{MEDIA_KIND}?postID={post_id}&seekTo={seek_to}")
            }
            Self::Youtube { post_id, seek_to, video_id } => {
                format!("{scheme}://{YOUTUBE_KIND}?postID={post_id}&seekTo={seek_to}&videoID={video_id}")
            }
        }
    }

    #[must_use]
    pub fn post_id(&self) -> &str {
        match self {
            Self::Media { post_id, .. } | Self::Youtube { post_id, .. } => post_id,
        }
    }

    #[must_use]
    pub fn seek_to(&self) -> &str {
        match self {
            Self::Media { seek_to, .. } | Self::Youtube { seek_to, .. } => seek_to,
        }
    }

    /// Playback offset in seconds, when the seek value is a valid `m:ss`.
    #[must_use]
    pub fn seek_seconds(&self) -> Option<u32> {
        parse_seek(self.seek_to())
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, LinkError> {
    value.filter(|v| !v.is_empty()).ok_or(LinkError::MissingParam(name))
}

/// Markdown link that seeks the post's attached media to `timestamp`.
#[must_use]
pub fn media_link(scheme: &str, post_id: &str, timestamp: &str) -> String {
    let link = DeepLink::Media { post_id: post_id.to_owned(), seek_to: timestamp.to_owned() };
    format!("[{timestamp}]({})", link.to_url(scheme))
}

/// Markdown link that seeks the post's YouTube video to `timestamp`.
#[must_use]
pub fn youtube_link(scheme: &str, post_id: &str, timestamp: &str, video_id: &str) -> String {
    let link = DeepLink::Youtube {
        post_id: post_id.to_owned(),
        seek_to: timestamp.to_owned(),
        video_id: video_id.to_owned(),
    };
    format!("[{timestamp}]({})", link.to_url(scheme))
}
