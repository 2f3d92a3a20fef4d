//! StoriesState - story list, likes and comment threads

use std::collections::HashMap;

use ahash::RandomState;
use tracing::{debug, warn};

use super::LanguageStore;
use super::load_state::LoadState;
use crate::domain::{
    CommentViewModel, RawComment, RawStory, StoryContext, StoryViewModel, normalize_story,
};
use crate::error::{Error, Result};
use crate::i18n::Key;
use crate::services::{ContentApi, StoryQuery};

/// Story list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoryFilter {
    #[default]
    All,
    Featured,
    /// Reader-submitted stories only
    Community,
}

/// Comments of one story
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    /// Raw records, kept to re-project on locale change
    raw: Vec<RawComment>,
    pub comments: Vec<CommentViewModel>,
    pub load_state: LoadState,
}

impl CommentThread {
    fn push(&mut self, raw: RawComment, language: &LanguageStore) {
        self.comments.push(CommentViewModel::from_raw(&raw, language));
        self.raw.push(raw);
    }

    fn relocalize(&mut self, language: &LanguageStore) {
        self.comments = self
            .raw
            .iter()
            .map(|c| CommentViewModel::from_raw(c, language))
            .collect();
        if self.load_state.is_error() {
            self.load_state = LoadState::Error(language.tr(Key::StoriesCommentsLoadError).into());
        }
    }
}

/// State for the stories page
#[derive(Debug, Default)]
pub struct StoriesState {
    /// Raw records of the displayed page, kept to re-project on locale change
    raw: Vec<RawStory>,
    /// Cards currently displayed
    pub stories: Vec<StoryViewModel>,
    pub load_state: LoadState,
    pub filter: StoryFilter,
    /// Last issued query; `retry` re-issues it
    pub query: StoryQuery,
    /// Total stories matching the filter, when reported
    pub total: Option<u64>,
    threads: HashMap<String, CommentThread, RandomState>,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page; on failure the previous cards stay visible
    pub async fn refresh(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        media_base_url: &str,
    ) {
        self.load_state = LoadState::Loading;

        match api.list_stories(&self.query).await {
            Ok(page) => {
                debug!(count = page.stories.len(), page = self.query.page, "Stories loaded");
                self.raw = page.stories;
                self.total = page.total;
                self.project(language, media_base_url);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(error = %e, page = self.query.page, "Failed to load stories");
                self.load_state = LoadState::Error(language.tr(Key::StoriesLoadError).into());
            }
        }
    }

    /// Re-issue the last request
    pub async fn retry(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        media_base_url: &str,
    ) {
        self.refresh(api, language, media_base_url).await
    }

    /// Change the filter and go back to the first page; call `refresh` afterwards
    pub fn set_filter(&mut self, filter: StoryFilter) {
        self.filter = filter;
        self.query = StoryQuery {
            page: 1,
            featured: filter == StoryFilter::Featured,
            community: filter == StoryFilter::Community,
            ..self.query.clone()
        };
    }

    /// Select a page; call `refresh` afterwards
    pub fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
    }

    /// Re-project stories, comment threads and error messages after a locale change
    pub fn relocalize(&mut self, language: &LanguageStore, media_base_url: &str) {
        self.project(language, media_base_url);
        if self.load_state.is_error() {
            self.load_state = LoadState::Error(language.tr(Key::StoriesLoadError).into());
        }
        for thread in self.threads.values_mut() {
            thread.relocalize(language);
        }
    }

    fn project(&mut self, language: &LanguageStore, media_base_url: &str) {
        let ctx = StoryContext {
            language,
            media_base_url,
        };
        self.stories = self.raw.iter().map(|raw| normalize_story(raw, &ctx)).collect();
    }

    pub fn story(&self, story_id: &str) -> Option<&StoryViewModel> {
        self.stories.iter().find(|s| s.id == story_id)
    }

    /// Like or unlike a story, whichever flips its current state
    pub async fn toggle_like(&mut self, api: &dyn ContentApi, story_id: &str) -> Result<()> {
        let Some(story) = self.stories.iter_mut().find(|s| s.id == story_id) else {
            return Err(Error::Invalid {
                message: format!("unknown story {story_id}"),
            });
        };

        let was_liked = story.liked;
        let status = if was_liked {
            api.unlike_story(story_id).await?
        } else {
            api.like_story(story_id).await?
        };

        let expected = if was_liked {
            story.likes.saturating_sub(1)
        } else {
            story.likes.saturating_add(1)
        };
        story.liked = status.liked.unwrap_or(!was_liked);
        story.likes = status.likes_count.unwrap_or(expected);

        if let Some(raw) = self.raw.iter_mut().find(|r| r.id == story_id) {
            raw.liked_by_me = story.liked;
            raw.likes_count = story.likes;
        }
        Ok(())
    }

    pub fn thread(&self, story_id: &str) -> Option<&CommentThread> {
        self.threads.get(story_id)
    }

    /// Fetch the comments of a story; failures land in the thread's load state
    pub async fn load_comments(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        story_id: &str,
    ) {
        let thread = self.threads.entry(story_id.to_string()).or_default();
        thread.load_state = LoadState::Loading;

        match api.list_comments(story_id).await {
            Ok(comments) => {
                thread.comments = comments
                    .iter()
                    .map(|c| CommentViewModel::from_raw(c, language))
                    .collect();
                thread.raw = comments;
                thread.load_state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(error = %e, story_id, "Failed to load comments");
                thread.load_state =
                    LoadState::Error(language.tr(Key::StoriesCommentsLoadError).into());
            }
        }
    }

    /// Post a comment and append it to the thread
    pub async fn post_comment(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        story_id: &str,
        content: &str,
    ) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::Invalid {
                message: "comment is empty".to_string(),
            });
        }

        let created = api.create_comment(story_id, content).await?;
        self.threads
            .entry(story_id.to_string())
            .or_default()
            .push(created, language);
        Ok(())
    }
}
