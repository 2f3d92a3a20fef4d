//! Remote Preferences
//!
//! Reads and writes the signed-in user's display language on the preferences
//! resource. Body shape on both directions: `{ "display": { "language": "it" } }`.

use crate::constants::PREFERENCES_PATH;
use crate::error::{Error, Result};
use crate::i18n::Locale;
use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;

/// Remote preferences endpoint
pub trait PreferencesApi: Send + Sync {
    /// Fetch the stored display language; `Ok(None)` when the body carries none
    fn fetch_language<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<Option<String>>>;

    /// Store the display language
    fn push_language<'a>(&'a self, token: &'a str, locale: Locale) -> BoxFuture<'a, Result<()>>;
}

#[derive(Debug, Serialize)]
struct PreferencesUpdate<'a> {
    display: DisplayUpdate<'a>,
}

#[derive(Debug, Serialize)]
struct DisplayUpdate<'a> {
    language: &'a str,
}

/// Extract `display.language` from a preferences document
pub fn language_from_preferences(body: &Value) -> Option<String> {
    body.pointer("/display/language")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}

/// reqwest-backed preferences client
#[derive(Debug, Clone)]
pub struct HttpPreferencesClient {
    http: reqwest::Client,
    url: String,
}

impl HttpPreferencesClient {
    pub fn new(http: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http,
            url: super::endpoint(api_base_url, PREFERENCES_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, token: &str) -> Result<Option<String>> {
        let response = self.http.get(&self.url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(language_from_preferences(&body)),
            Err(e) => {
                tracing::debug!(error = %e, url = %self.url, "Preferences body is not JSON");
                Ok(None)
            }
        }
    }

    async fn push(&self, token: &str, locale: Locale) -> Result<()> {
        let body = PreferencesUpdate {
            display: DisplayUpdate {
                language: locale.code(),
            },
        };

        let response = self
            .http
            .put(&self.url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(())
    }
}

impl PreferencesApi for HttpPreferencesClient {
    fn fetch_language<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(self.fetch(token))
    }

    fn push_language<'a>(&'a self, token: &'a str, locale: Locale) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.push(token, locale))
    }
}
