//! GalleryState - featured media

use tracing::warn;

use super::LanguageStore;
use super::load_state::LoadState;
use crate::domain::MediaItem;
use crate::i18n::Key;
use crate::services::ContentApi;

/// State for the gallery page
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub items: Vec<MediaItem>,
    pub load_state: LoadState,
}

impl GalleryState {
    /// Fetch featured media; on failure the previous items stay visible
    pub async fn refresh(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        media_base_url: &str,
    ) {
        self.load_state = LoadState::Loading;

        match api.featured_media().await {
            Ok(media) => {
                self.items = media
                    .iter()
                    .filter(|m| !m.url.trim().is_empty())
                    .map(|m| MediaItem::from_raw(m, media_base_url))
                    .collect();
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load featured media");
                self.load_state = LoadState::Error(language.tr(Key::GalleryLoadError).into());
            }
        }
    }

    pub async fn retry(
        &mut self,
        api: &dyn ContentApi,
        language: &LanguageStore,
        media_base_url: &str,
    ) {
        self.refresh(api, language, media_base_url).await
    }

    /// Re-translate a pending error message after a locale change
    pub fn relocalize(&mut self, language: &LanguageStore) {
        if self.load_state.is_error() {
            self.load_state = LoadState::Error(language.tr(Key::GalleryLoadError).into());
        }
    }

    pub fn videos(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter().filter(|m| m.is_video())
    }
}
