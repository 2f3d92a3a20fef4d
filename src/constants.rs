//! Constants
//!
//! Storage keys, endpoint paths and defaults shared across the crate.

/// Local storage key holding the chosen locale code
pub const LANGUAGE_STORAGE_KEY: &str = "pawtales.language";

/// Local storage key holding the encrypted auth token
pub const AUTH_TOKEN_STORAGE_KEY: &str = "pawtales.auth_token";

/// Local storage file name inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "pawtales.toml";

/// Default API root
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default root for uploaded media (thumbnails, videos)
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://localhost:8000";

/// Preferences resource, relative to the API root
pub const PREFERENCES_PATH: &str = "users/me/preferences";

/// Shown when a story has no thumbnail
pub const PLACEHOLDER_THUMBNAIL_PATH: &str = "/static/images/story-placeholder.jpg";

/// Stories requested per page
pub const STORIES_PAGE_SIZE: u32 = 12;

/// Default log directive when neither settings nor RUST_LOG provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Preference sync retry defaults (retries are disabled unless configured)
pub const SYNC_MAX_RETRIES: u32 = 0;
pub const SYNC_INITIAL_DELAY_MS: u64 = 1000;
pub const SYNC_MAX_DELAY_MS: u64 = 30000;
pub const SYNC_MULTIPLIER: f64 = 2.0;
pub const SYNC_JITTER: f64 = 0.1;
