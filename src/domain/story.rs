//! Story - raw story records and the story card view model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::media::{RawMedia, non_blank, resolve_media_url};
use crate::constants::PLACEHOLDER_THUMBNAIL_PATH;
use crate::i18n::Key;
use crate::i18n::format::{DateFormatOptions, DateStyle};
use crate::states::LanguageStore;

/// Story author as embedded in story and comment records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAuthor {
    #[serde(default, alias = "displayName", alias = "name")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl RawAuthor {
    /// Display name, else username
    pub fn name(&self) -> Option<&str> {
        non_blank(self.display_name.as_deref()).or_else(|| non_blank(self.username.as_deref()))
    }
}

/// Story record as returned by the content API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStory {
    #[serde(default, deserialize_with = "super::lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_default")]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    /// Set only on stories sent in by readers
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Estimated minutes; anything but a JSON number is ignored
    #[serde(default)]
    pub reading_time: Option<Value>,
    #[serde(default, alias = "thumbnail_url")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub likes_count: u64,
    #[serde(default, deserialize_with = "super::null_default")]
    pub liked_by_me: bool,
    #[serde(default, deserialize_with = "super::null_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "super::null_default")]
    pub media: Vec<RawMedia>,
}

/// Video attached to a story; drives the play button
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDescriptor {
    pub url: String,
    pub poster_url: Option<String>,
    pub title: Option<String>,
}

/// Display-ready story card
#[derive(Debug, Clone, PartialEq)]
pub struct StoryViewModel {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    /// Formatted date; empty when the record has none
    pub date: String,
    /// e.g. "5 min read"; empty without a numeric estimate
    pub reading_time: String,
    pub thumbnail_url: String,
    pub tags: Vec<String>,
    pub likes: u64,
    pub liked: bool,
    pub featured: bool,
    /// Sent in by a reader rather than written by the editors
    pub user_submitted: bool,
    pub video: Option<VideoDescriptor>,
}

impl StoryViewModel {
    /// Like count as shown on the card
    pub fn likes_label(&self, language: &LanguageStore) -> String {
        let count = language.format_number(self.likes as f64, None);
        language.tr_with(Key::StoriesLikes, &[("count", &count)])
    }
}

/// Inputs for [`normalize_story`]
#[derive(Clone, Copy)]
pub struct StoryContext<'a> {
    pub language: &'a LanguageStore,
    pub media_base_url: &'a str,
}

/// Project a raw story onto its card view model
pub fn normalize_story(raw: &RawStory, ctx: &StoryContext<'_>) -> StoryViewModel {
    let language = ctx.language;

    let author_name = raw
        .author
        .as_ref()
        .and_then(RawAuthor::name)
        .map(str::to_string)
        .unwrap_or_else(|| language.tr(Key::StoriesAnonymous));

    let user_submitted = raw.submitted_at.is_some();
    let date = raw
        .submitted_at
        .or(raw.published_at)
        .or(raw.created_at)
        .map(|d| language.format_date(&d, Some(DateFormatOptions::style(DateStyle::Long))))
        .unwrap_or_default();

    StoryViewModel {
        id: raw.id.clone(),
        title: raw.title.trim().to_string(),
        excerpt: raw.excerpt.as_deref().unwrap_or_default().trim().to_string(),
        author_name,
        date,
        reading_time: reading_time_label(raw.reading_time.as_ref(), language),
        thumbnail_url: thumbnail_url(raw.thumbnail.as_deref(), ctx.media_base_url),
        tags: raw
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        likes: raw.likes_count,
        liked: raw.liked_by_me,
        featured: raw.is_featured,
        user_submitted,
        video: first_video(&raw.media, ctx.media_base_url),
    }
}

fn thumbnail_url(path: Option<&str>, media_base_url: &str) -> String {
    let path = non_blank(path).unwrap_or(PLACEHOLDER_THUMBNAIL_PATH);
    resolve_media_url(media_base_url, path)
}

fn reading_time_label(estimate: Option<&Value>, language: &LanguageStore) -> String {
    let Some(minutes) = estimate.and_then(Value::as_f64) else {
        return String::new();
    };
    if !minutes.is_finite() || minutes <= 0.0 {
        return String::new();
    }

    let minutes = (minutes.round() as u64).max(1).to_string();
    language.tr_with(Key::StoriesReadingTime, &[("minutes", &minutes)])
}

fn first_video(media: &[RawMedia], media_base_url: &str) -> Option<VideoDescriptor> {
    media
        .iter()
        .find(|m| m.kind.eq_ignore_ascii_case("video") && !m.url.trim().is_empty())
        .map(|m| VideoDescriptor {
            url: resolve_media_url(media_base_url, &m.url),
            poster_url: non_blank(m.thumbnail.as_deref())
                .map(|thumb| resolve_media_url(media_base_url, thumb)),
            title: non_blank(m.title.as_deref()).map(str::to_string),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MEDIA: &str = "https://media.pawtales.test";

    fn store(code: &str) -> LanguageStore {
        let mut store = LanguageStore::builder().build().expect("store");
        store.change_locale(code);
        store
    }

    fn raw(value: serde_json::Value) -> RawStory {
        serde_json::from_value(value).expect("valid story")
    }

    #[test]
    fn editorial_story_projects_all_fields() {
        let store = store("en");
        let story = raw(json!({
            "id": 42,
            "title": "  Luna's first snow ",
            "author": { "display_name": "Giulia", "username": "giuli" },
            "published_at": "2026-10-19T08:00:00Z",
            "reading_time": 4.6,
            "thumbnail": "/uploads/luna.jpg",
            "tags": ["cats", " ", "winter"],
            "likes_count": 1200,
            "is_featured": true
        }));

        let view = normalize_story(&story, &StoryContext { language: &store, media_base_url: MEDIA });

        assert_eq!(view.id, "42");
        assert_eq!(view.title, "Luna's first snow");
        assert_eq!(view.author_name, "Giulia");
        assert_eq!(view.date, "October 19, 2026");
        assert_eq!(view.reading_time, "5 min read");
        assert_eq!(view.thumbnail_url, "https://media.pawtales.test/uploads/luna.jpg");
        assert_eq!(view.tags, vec!["cats", "winter"]);
        assert!(view.featured);
        assert!(!view.user_submitted);
        assert_eq!(view.video, None);
        assert_eq!(view.likes_label(&store), "1,200 likes");
    }

    #[test]
    fn submitted_story_uses_submission_date_and_flags_community() {
        let store = store("it");
        let story = raw(json!({
            "id": "s-1",
            "title": "Rex",
            "author": { "username": "marco" },
            "created_at": "2026-01-01T00:00:00Z",
            "submitted_at": "2026-03-05T10:00:00Z"
        }));

        let view = normalize_story(&story, &StoryContext { language: &store, media_base_url: MEDIA });

        assert!(view.user_submitted);
        assert_eq!(view.author_name, "marco");
        assert_eq!(view.date, "5 marzo 2026");
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let store = store("it");
        let story = raw(json!({ "id": 1, "title": "Senza nulla", "reading_time": "about 5" }));

        let view = normalize_story(&story, &StoryContext { language: &store, media_base_url: MEDIA });

        assert_eq!(view.reading_time, "");
        assert_eq!(view.date, "");
        assert_eq!(view.author_name, "Anonimo");
        assert_eq!(
            view.thumbnail_url,
            "https://media.pawtales.test/static/images/story-placeholder.jpg"
        );
    }

    #[test]
    fn first_video_attachment_becomes_descriptor() {
        let store = store("en");
        let story = raw(json!({
            "id": 3,
            "title": "Fetch",
            "media": [
                { "type": "image", "url": "/m/1.jpg" },
                { "type": "video", "url": "/m/2.mp4", "thumbnail": "/m/2.jpg", "title": "Run!" },
                { "type": "video", "url": "/m/3.mp4" }
            ]
        }));

        let view = normalize_story(&story, &StoryContext { language: &store, media_base_url: MEDIA });
        let video = view.video.expect("video");

        assert_eq!(video.url, "https://media.pawtales.test/m/2.mp4");
        assert_eq!(video.poster_url.as_deref(), Some("https://media.pawtales.test/m/2.jpg"));
        assert_eq!(video.title.as_deref(), Some("Run!"));
    }

    #[test]
    fn null_fields_read_as_absent() {
        let store = store("en");
        let story = raw(json!({
            "id": 1,
            "title": null,
            "tags": null,
            "likes_count": null,
            "liked_by_me": null,
            "is_featured": null,
            "media": null,
            "created_at": null
        }));

        let view = normalize_story(&story, &StoryContext { language: &store, media_base_url: MEDIA });

        assert_eq!(view.title, "");
        assert!(view.tags.is_empty());
        assert_eq!(view.likes, 0);
        assert!(!view.liked);
        assert!(!view.featured);
        assert_eq!(view.video, None);
        assert_eq!(view.date, "");
    }

    #[test]
    fn offset_less_dates_are_read_as_utc_and_bad_dates_are_blank() {
        let store = store("it");
        let story = raw(json!({ "id": 2, "title": "Rex", "submitted_at": "2026-03-05 10:00:00" }));
        let ctx = StoryContext { language: &store, media_base_url: MEDIA };
        assert_eq!(normalize_story(&story, &ctx).date, "5 marzo 2026");

        let story = raw(json!({ "id": 3, "title": "Rex", "published_at": "last tuesday" }));
        let view = normalize_story(&story, &ctx);
        assert_eq!(view.date, "");
        assert!(!view.user_submitted);
    }

    #[test]
    fn one_odd_record_does_not_break_a_page() {
        let stories: Vec<RawStory> = serde_json::from_value(json!([
            { "id": 1, "title": "Fine", "created_at": "2026-03-05T10:00:00Z" },
            { "id": 2, "title": null, "tags": null, "created_at": "2026-03-05 10:00:00" },
            { "id": 3, "media": [{ "type": null, "url": null }] }
        ]))
        .expect("page parses");
        assert_eq!(stories.len(), 3);
        assert_eq!(stories[1].created_at, stories[0].created_at);
    }

    #[test]
    fn normalization_is_idempotent() {
        let store = store("en");
        let story = raw(json!({
            "id": 9,
            "title": "Same",
            "submitted_at": "2026-02-02T12:00:00Z",
            "reading_time": 3
        }));
        let ctx = StoryContext { language: &store, media_base_url: MEDIA };

        assert_eq!(normalize_story(&story, &ctx), normalize_story(&story, &ctx));
    }
}
