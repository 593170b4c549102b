//! YouTube reference resolution.
//!
//! Turns pasted URLs or bare IDs into the canonical 11-character video
//! identifier and derives the default thumbnail for it.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

/// A bare 11-character video identifier
static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Recognized URL shapes: `watch?v=`, `embed/`, `v/` and `youtu.be/`,
/// optionally prefixed with a scheme and `www.`. The captured group is the 11
/// characters following the marker, terminated by `#`, `&`, `?` or the end of
/// the string.
static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/|v/)|youtu\.be/)([^#&?]{11})",
    )
    .unwrap()
});

/// Extract the canonical video ID from a URL or bare ID.
///
/// Returns `None` when the input matches no recognized shape; no partial
/// extraction is attempted.
pub fn extract_id(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    if VIDEO_ID.is_match(input) {
        return Some(input.to_string());
    }

    VIDEO_URL
        .captures(input)
        .map(|captures| captures[1].to_string())
}

/// Default thumbnail URL for a video ID. Pure function, no I/O.
pub fn thumbnail_url(youtube_id: &str) -> String {
    format!("https://img.youtube.com/vi/{youtube_id}/hqdefault.jpg")
}

/// Existence probe for derived thumbnails.
///
/// Trait seam so the service layer can be tested without the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThumbnailProbe: Send + Sync {
    /// True only when the thumbnail resource answers with a success status.
    /// Any network failure or non-success response degrades to `false`.
    async fn exists(&self, youtube_id: &str) -> bool;
}

/// Probe issuing a single GET against the derived thumbnail URL.
#[derive(Clone, Default)]
pub struct HttpThumbnailProbe {
    client: reqwest::Client,
}

impl HttpThumbnailProbe {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ThumbnailProbe for HttpThumbnailProbe {
    async fn exists(&self, youtube_id: &str) -> bool {
        match self.client.get(thumbnail_url(youtube_id)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(youtube_id, "Thumbnail probe failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_extract_from_short_url_with_query() {
        assert_eq!(extract_id("https://youtu.be/dQw4w9WgXcQ?t=5").as_deref(), Some(ID));
    }

    #[test]
    fn test_extract_from_embed_and_v_urls() {
        assert_eq!(
            extract_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_id("https://youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_extract_without_scheme_or_www() {
        assert_eq!(extract_id("youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(extract_id("www.youtu.be/dQw4w9WgXcQ").as_deref(), Some(ID));
    }

    #[test]
    fn test_extract_stops_at_terminators() {
        assert_eq!(
            extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_id("https://youtu.be/dQw4w9WgXcQ#t=30").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(extract_id(ID).as_deref(), Some(ID));
    }

    #[test]
    fn test_no_partial_extraction() {
        assert_eq!(extract_id("not a url"), None);
        assert_eq!(extract_id(""), None);
        // 10 characters after the marker is not a valid ID
        assert_eq!(extract_id("https://youtu.be/shortid12?x=1"), None);
        // Unrecognized host
        assert_eq!(extract_id("https://vimeo.com/123456789"), None);
    }

    #[test]
    fn test_bare_id_wrong_length_rejected() {
        assert_eq!(extract_id("dQw4w9WgXc"), None);
        assert_eq!(extract_id("dQw4w9WgXcQQ"), None);
    }

    #[test]
    fn test_thumbnail_url_is_deterministic() {
        assert_eq!(
            thumbnail_url(ID),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(thumbnail_url(ID), thumbnail_url(ID));
    }
}
