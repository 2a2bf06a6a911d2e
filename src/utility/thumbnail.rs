//! Thumbnail link builder for YouTube video URLs.

use super::{Utility, UtilityOutput};
use crate::types::{InputValues, Renderable, Thumbnail};
use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Shown when no video id can be found in the input.
pub const INVALID_URL_MESSAGE: &str = "Invalid YouTube URL";

/// Recognizes `watch?v=`, `embed/`, `v/`, `e/`, nested paths and `youtu.be/` links.
static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("video id pattern is valid")
});

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Rendition file names with their display labels, best first.
const RENDITIONS: &[(&str, &str)] = &[
    ("Max Resolution", "maxresdefault.jpg"),
    ("High Quality", "hqdefault.jpg"),
    ("Standard", "sddefault.jpg"),
];

/// Extract the 11-character video id from a YouTube URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Static thumbnail URLs for a video id. No network access is involved.
pub fn thumbnail_links(video_id: &str) -> Vec<Thumbnail> {
    RENDITIONS
        .iter()
        .map(|(label, file)| Thumbnail {
            label: label.to_string(),
            url: format!("{}/{}/{}", THUMBNAIL_BASE, video_id, file),
        })
        .collect()
}

/// Builds a thumbnail gallery from the `url` input.
#[derive(Debug, Default)]
pub struct ThumbnailDownloader;

#[async_trait]
impl Utility for ThumbnailDownloader {
    fn name(&self) -> &str {
        "thumbnail-downloader"
    }

    async fn run(&self, inputs: &InputValues) -> Result<UtilityOutput> {
        let url = inputs.get("url").unwrap_or_default();

        let Some(video_id) = extract_video_id(url) else {
            debug!("No video id in {:?}", url);
            return Ok(UtilityOutput::Text(INVALID_URL_MESSAGE.to_string()));
        };

        let thumbnails = thumbnail_links(&video_id);
        Ok(UtilityOutput::Rendered(Renderable::ThumbnailGallery {
            video_id,
            thumbnails,
        }))
    }
}
