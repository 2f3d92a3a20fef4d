//! Content API Client
//!
//! Stories, likes, comments and featured media. Plain request/response JSON;
//! failures are returned to the caller, which shows them with a retry action.

use crate::domain::{NewComment, RawComment, RawMedia, RawStory};
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Story listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryQuery {
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    /// Only featured stories
    pub featured: bool,
    /// Only reader-submitted stories
    pub community: bool,
}

impl Default for StoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: crate::constants::STORIES_PAGE_SIZE,
            featured: false,
            community: false,
        }
    }
}

/// One page of stories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryPage {
    pub stories: Vec<RawStory>,
    /// Total matching stories when the server reports it
    pub total: Option<u64>,
}

/// Like state returned by like/unlike
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LikeStatus {
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub liked: Option<bool>,
}

/// Lists come either bare or wrapped with a total
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "results", alias = "data", alias = "stories", alias = "comments", alias = "media")]
        items: Vec<T>,
        #[serde(default, alias = "count")]
        total: Option<u64>,
    },
}

impl<T> ListBody<T> {
    fn into_parts(self) -> (Vec<T>, Option<u64>) {
        match self {
            ListBody::Bare(items) => (items, None),
            ListBody::Wrapped { items, total } => (items, total),
        }
    }
}

/// Content endpoints consumed by the views
pub trait ContentApi: Send + Sync {
    fn list_stories<'a>(&'a self, query: &'a StoryQuery) -> BoxFuture<'a, Result<StoryPage>>;

    fn like_story<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<LikeStatus>>;

    fn unlike_story<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<LikeStatus>>;

    fn list_comments<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<Vec<RawComment>>>;

    fn create_comment<'a>(
        &'a self,
        story_id: &'a str,
        content: &'a str,
    ) -> BoxFuture<'a, Result<RawComment>>;

    fn featured_media<'a>(&'a self) -> BoxFuture<'a, Result<Vec<RawMedia>>>;
}

/// reqwest-backed content client
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpContentClient {
    pub fn new(http: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http,
            base_url: api_base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Authenticate requests (likes and comments need it)
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        super::endpoint(&self.base_url, path)
    }

    /// `stories/{id}/{resource}` with the id percent-encoded as one segment
    fn story_url(&self, story_id: &str, resource: &str) -> Result<String> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| Error::Invalid {
            message: format!("invalid API base URL {}: {e}", self.base_url),
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::Invalid {
                message: format!("API base URL {} cannot take a path", self.base_url),
            })?
            .pop_if_empty()
            .push("stories")
            .push(story_id)
            .push(resource);
        Ok(url.into())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url, "Content API request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like responses may be empty (204); that is not an error
    async fn read_like(response: reqwest::Response) -> Result<LikeStatus> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LikeStatus::default());
        }
        Ok(serde_json::from_slice(&bytes).unwrap_or_default())
    }

    async fn get_stories(&self, query: &StoryQuery) -> Result<StoryPage> {
        let url = self.url("stories");
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if query.featured {
            params.push(("featured", "true".to_string()));
        }
        if query.community {
            params.push(("submitted", "true".to_string()));
        }

        let response = self.send(self.http.get(&url).query(&params), &url).await?;
        let (stories, total) = Self::read_json::<ListBody<RawStory>>(response)
            .await?
            .into_parts();

        tracing::debug!(count = stories.len(), page = query.page, "Fetched stories");
        Ok(StoryPage { stories, total })
    }

    async fn set_like(&self, story_id: &str, liked: bool) -> Result<LikeStatus> {
        let url = self.story_url(story_id, "like")?;
        let request = if liked {
            self.http.post(&url)
        } else {
            self.http.delete(&url)
        };
        let response = self.send(request, &url).await?;
        Self::read_like(response).await
    }

    async fn get_comments(&self, story_id: &str) -> Result<Vec<RawComment>> {
        let url = self.story_url(story_id, "comments")?;
        let response = self.send(self.http.get(&url), &url).await?;
        Ok(Self::read_json::<ListBody<RawComment>>(response).await?.into_parts().0)
    }

    async fn post_comment(&self, story_id: &str, content: &str) -> Result<RawComment> {
        let url = self.story_url(story_id, "comments")?;
        let request = self.http.post(&url).json(&NewComment { content });
        let response = self.send(request, &url).await?;
        Self::read_json(response).await
    }

    async fn get_featured_media(&self) -> Result<Vec<RawMedia>> {
        let url = self.url("media/featured");
        let response = self.send(self.http.get(&url), &url).await?;
        Ok(Self::read_json::<ListBody<RawMedia>>(response).await?.into_parts().0)
    }
}

impl ContentApi for HttpContentClient {
    fn list_stories<'a>(&'a self, query: &'a StoryQuery) -> BoxFuture<'a, Result<StoryPage>> {
        Box::pin(self.get_stories(query))
    }

    fn like_story<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<LikeStatus>> {
        Box::pin(self.set_like(story_id, true))
    }

    fn unlike_story<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<LikeStatus>> {
        Box::pin(self.set_like(story_id, false))
    }

    fn list_comments<'a>(&'a self, story_id: &'a str) -> BoxFuture<'a, Result<Vec<RawComment>>> {
        Box::pin(self.get_comments(story_id))
    }

    fn create_comment<'a>(
        &'a self,
        story_id: &'a str,
        content: &'a str,
    ) -> BoxFuture<'a, Result<RawComment>> {
        Box::pin(self.post_comment(story_id, content))
    }

    fn featured_media<'a>(&'a self) -> BoxFuture<'a, Result<Vec<RawMedia>>> {
        Box::pin(self.get_featured_media())
    }
}
