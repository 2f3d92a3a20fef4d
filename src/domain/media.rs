//! Media - attachments and featured gallery items

use serde::{Deserialize, Serialize};

/// Media record as returned by the content API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMedia {
    #[serde(default, deserialize_with = "super::lenient_id")]
    pub id: String,
    /// "image", "video", ...
    #[serde(rename = "type", default, deserialize_with = "super::null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "super::null_default")]
    pub url: String,
    #[serde(default, alias = "thumbnail_url")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Kind of media item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "image" | "photo" => MediaKind::Image,
            "video" => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }
}

/// Display-ready media item with absolute URLs
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub kind: MediaKind,
    pub url: String,
    /// Poster for videos, the image itself for images
    pub thumbnail_url: Option<String>,
    pub title: Option<String>,
}

impl MediaItem {
    pub fn from_raw(raw: &RawMedia, media_base_url: &str) -> Self {
        let kind = MediaKind::parse(&raw.kind);
        let url = resolve_media_url(media_base_url, &raw.url);
        let thumbnail_url = non_blank(raw.thumbnail.as_deref())
            .map(|thumb| resolve_media_url(media_base_url, thumb))
            .or_else(|| (kind == MediaKind::Image).then(|| url.clone()));

        Self {
            id: raw.id.clone(),
            kind,
            url,
            thumbnail_url,
            title: non_blank(raw.title.as_deref()).map(str::to_string),
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Make a media path absolute against `media_base_url`
///
/// Absolute (`http://`, `https://`) and protocol-relative (`//host/...`)
/// URLs are returned unchanged.
pub fn resolve_media_url(media_base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }

    format!(
        "{}/{}",
        media_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
