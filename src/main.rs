//! Pawtales - Main Entry Point
//!
//! Loads settings, initializes the language store and prints localized
//! samples. Usage: `pawtales [LOCALE] [--stories]`

use std::sync::Arc;

use chrono::Utc;
use pawtales::error::Result;
use pawtales::i18n::Key;
use pawtales::i18n::format::{DateFormatOptions, DateStyle};
use pawtales::services::{
    HttpContentClient, HttpPreferencesClient, StoreEvent, build_http_client,
};
use pawtales::states::{
    AppSettings, InMemoryDocument, LanguageStore, StoriesState, load_auth_token,
};
use pawtales::utils::FileStorage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, settings_error) = match AppSettings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (AppSettings::default(), Some(e)),
    };

    // RUST_LOG wins over the settings file
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| EnvFilter::try_new(&settings.log_filter).ok())
        .unwrap_or_else(|| EnvFilter::new(pawtales::constants::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = settings_error {
        tracing::error!(error = %e, "Failed to load settings, using defaults");
    }
    tracing::info!(api = %settings.api_base_url, "Starting Pawtales...");

    let mut locale_arg = None;
    let mut show_stories = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--stories" => show_stories = true,
            code => locale_arg = Some(code.to_string()),
        }
    }

    let http = build_http_client(&settings)?;
    let storage = Arc::new(FileStorage::open_default()?);
    let document = Arc::new(InMemoryDocument::new());

    let mut language = LanguageStore::builder()
        .storage(storage.clone())
        .document(document.clone())
        .remote(Arc::new(HttpPreferencesClient::new(
            http.clone(),
            &settings.api_base_url,
        )))
        .sync_retry(settings.sync.clone())
        .build()?;
    let events = language.subscribe();

    language.initialize().await;
    let sync_pending = match locale_arg {
        Some(code) => {
            language.change_locale(&code);
            load_auth_token(storage.as_ref()).is_some()
        }
        None => false,
    };

    println!("{}", document.html_open_tag());
    for info in language.list_languages() {
        let marker = if info.locale == language.locale() { "*" } else { " " };
        println!("{marker} {} {} ({})", info.flag, info.name, info.code);
    }

    println!();
    println!("{}", language.tr(Key::AppTitle));
    println!("{}", language.tr(Key::AppTagline));
    println!("{}", language.tr_with(Key::AppGreeting, &[("name", "Ada")]));
    println!(
        "{}",
        language.format_date(&Utc::now(), Some(DateFormatOptions::style(DateStyle::Full)))
    );
    println!("{}", language.format_number(1234567.891, None));
    println!("{}", language.format_currency(99.99, None));

    if show_stories {
        let content = HttpContentClient::new(http, &settings.api_base_url)
            .with_token(load_auth_token(storage.as_ref()));
        let mut stories = StoriesState::new();
        stories
            .refresh(&content, &language, &settings.media_base_url)
            .await;

        if let Some(message) = stories.load_state.error_message() {
            println!("{message} ({})", language.tr(Key::StoriesRetry));
        } else if stories.stories.is_empty() {
            println!("{}", language.tr(Key::StoriesEmpty));
        }
        for story in &stories.stories {
            println!(
                "- {} | {} | {} | {} | {}",
                story.title,
                story.author_name,
                story.date,
                story.reading_time,
                story.likes_label(&language)
            );
        }
    }

    // Give a pending preference sync the chance to finish before exiting
    let deadline = std::time::Duration::from_secs(5);
    while sync_pending && let Ok(event) = events.recv_timeout(deadline) {
        if !matches!(event, StoreEvent::LocaleChanged { .. }) {
            tracing::debug!(?event, "Preference sync finished");
            break;
        }
    }

    Ok(())
}
