//! Service Layer
//!
//! HTTP clients for the remote preferences and content APIs, plus the
//! runtime bridge and retry policy used by background work.
//!
//! ```text
//! LanguageStore ──▶ PreferencesApi ──▶ /users/me/preferences
//! StoriesState  ──▶ ContentApi     ──▶ /stories, /media/featured
//! ```

mod content;
mod events;
mod preferences;
mod retry;
pub mod runtime;

pub use content::*;
pub use events::*;
pub use preferences::*;
pub use retry::*;

use crate::error::Result;
use crate::states::AppSettings;
use std::time::Duration;

/// Join an API root and a relative path with exactly one slash
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Shared reqwest client configured from settings
pub fn build_http_client(settings: &AppSettings) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = settings.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}
