//! Comment - story comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::story::RawAuthor;
use crate::i18n::Key;
use crate::i18n::format::{DateFormatOptions, DateStyle};
use crate::states::LanguageStore;

/// Comment record as returned by the content API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default, deserialize_with = "super::lenient_id")]
    pub id: String,
    #[serde(default, alias = "body", alias = "text", deserialize_with = "super::null_default")]
    pub content: String,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating a comment
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub content: &'a str,
}

/// Display-ready comment
#[derive(Debug, Clone, PartialEq)]
pub struct CommentViewModel {
    pub id: String,
    pub author_name: String,
    pub body: String,
    pub date: String,
}

impl CommentViewModel {
    pub fn from_raw(raw: &RawComment, language: &LanguageStore) -> Self {
        Self {
            id: raw.id.clone(),
            author_name: raw
                .author
                .as_ref()
                .and_then(RawAuthor::name)
                .map(str::to_string)
                .unwrap_or_else(|| language.tr(Key::StoriesAnonymous)),
            body: raw.content.trim().to_string(),
            date: raw
                .created_at
                .map(|d| {
                    language.format_date(
                        &d,
                        Some(DateFormatOptions::style(DateStyle::Medium).with_time()),
                    )
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comment_accepts_body_alias_and_formats_date() {
        let mut store = LanguageStore::builder().build().expect("store");
        store.change_locale("en");

        let raw: RawComment = serde_json::from_value(json!({
            "id": 5,
            "body": " So cute! ",
            "author": { "username": "ada" },
            "created_at": "2026-10-19T18:30:00Z"
        }))
        .expect("valid comment");

        let view = CommentViewModel::from_raw(&raw, &store);
        assert_eq!(view.id, "5");
        assert_eq!(view.body, "So cute!");
        assert_eq!(view.author_name, "ada");
        assert_eq!(view.date, "Oct 19, 2026, 6:30 PM");
    }

    #[test]
    fn null_body_and_offset_less_date_are_tolerated() {
        let mut store = LanguageStore::builder().build().expect("store");
        store.change_locale("en");

        let raw: RawComment = serde_json::from_value(json!({
            "id": 6,
            "content": null,
            "created_at": "2026-10-19 18:30:00"
        }))
        .expect("valid comment");

        let view = CommentViewModel::from_raw(&raw, &store);
        assert_eq!(view.body, "");
        assert_eq!(view.author_name, "Anonymous");
        assert_eq!(view.date, "Oct 19, 2026, 6:30 PM");
    }
}
