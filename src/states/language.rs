//! Language Store
//!
//! Single source of truth for the active locale and its catalog. Views get
//! the store passed in; nothing reaches it through a global.
//!
//! ```text
//! initialize():  remote preference ──▶ local storage ──▶ default (it)
//!
//! change_locale(code)
//!   ├─ 1. in-memory state          (always)
//!   ├─ 2. local storage            (failure logged)
//!   ├─ 3. document lang attribute  (failure logged)
//!   └─ 4. spawn remote push        (signed in only; failure logged, dropped)
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, TimeZone};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, info, warn};

use super::document::{DocumentHost, InMemoryDocument};
use super::session::load_auth_token;
use crate::constants::LANGUAGE_STORAGE_KEY;
use crate::error::Result;
use crate::i18n::format::{self, DateFormatOptions, NumberFormatOptions};
use crate::i18n::{Catalog, Catalogs, Key, LanguageInfo, Locale, interpolate, list_languages};
use crate::services::{PreferencesApi, RetryConfig, StoreEvent, runtime};
use crate::utils::{LocalStorage, MemoryStorage};

/// Pending events kept for subscribers; the oldest is evicted when full
const EVENT_CAPACITY: usize = 64;

/// Active locale and the catalog it selects
#[derive(Debug, Clone)]
pub struct LanguageState {
    locale: Locale,
    catalog: Arc<Catalog>,
}

impl LanguageState {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Where `initialize` found the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Remote,
    LocalStorage,
    Default,
}

/// Builder for [`LanguageStore`]
pub struct LanguageStoreBuilder {
    storage: Option<Arc<dyn LocalStorage>>,
    document: Option<Arc<dyn DocumentHost>>,
    remote: Option<Arc<dyn PreferencesApi>>,
    catalogs: Option<Catalogs>,
    sync_retry: RetryConfig,
}

impl LanguageStoreBuilder {
    /// Where the chosen locale and the auth token are persisted
    pub fn storage(mut self, storage: Arc<dyn LocalStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn document(mut self, document: Arc<dyn DocumentHost>) -> Self {
        self.document = Some(document);
        self
    }

    /// Remote preferences endpoint; without one the store is local only
    pub fn remote(mut self, remote: Arc<dyn PreferencesApi>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Replace the bundled catalogs
    pub fn catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = Some(catalogs);
        self
    }

    pub fn sync_retry(mut self, retry: RetryConfig) -> Self {
        self.sync_retry = retry;
        self
    }

    /// Build a store set to the default locale; call `initialize` next
    pub fn build(self) -> Result<LanguageStore> {
        let catalogs = match self.catalogs {
            Some(catalogs) => catalogs,
            None => Catalogs::bundled()?,
        };
        let locale = Locale::default();
        let (tx, rx) = crossbeam_channel::bounded(EVENT_CAPACITY);

        Ok(LanguageStore {
            state: LanguageState {
                locale,
                catalog: catalogs.get(locale),
            },
            catalogs,
            storage: self.storage.unwrap_or_else(|| Arc::new(MemoryStorage::new())),
            document: self.document.unwrap_or_else(|| Arc::new(InMemoryDocument::new())),
            remote: self.remote,
            sync_retry: self.sync_retry,
            generation: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        })
    }
}

/// Active locale, translations and locale-aware formatting
pub struct LanguageStore {
    state: LanguageState,
    catalogs: Catalogs,
    storage: Arc<dyn LocalStorage>,
    document: Arc<dyn DocumentHost>,
    remote: Option<Arc<dyn PreferencesApi>>,
    sync_retry: RetryConfig,
    /// Bumped on every change; background pushes for older values stop retrying
    generation: Arc<AtomicU64>,
    tx: Sender<StoreEvent>,
    rx: Receiver<StoreEvent>,
}

impl LanguageStore {
    pub fn builder() -> LanguageStoreBuilder {
        LanguageStoreBuilder {
            storage: None,
            document: None,
            remote: None,
            catalogs: None,
            sync_retry: RetryConfig::default(),
        }
    }

    // ==================== Lifecycle ====================

    /// Pick the starting locale: remote preference, then local storage, then default.
    ///
    /// Never fails; every lookup problem is logged and falls through.
    pub async fn initialize(&mut self) -> Locale {
        let (locale, source) = if let Some(locale) = self.remote_preference().await {
            if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, locale.code()) {
                warn!(error = %e, "Failed to persist remote language locally");
            }
            (locale, LocaleSource::Remote)
        } else if let Some(locale) = self.persisted_locale() {
            (locale, LocaleSource::LocalStorage)
        } else {
            (Locale::default(), LocaleSource::Default)
        };

        self.state = LanguageState {
            locale,
            catalog: self.catalogs.get(locale),
        };
        self.update_document(locale);

        info!(locale = %locale, source = ?source, "Language initialized");
        self.emit(StoreEvent::LocaleChanged {
            locale,
            coerced: false,
        });
        locale
    }

    async fn remote_preference(&self) -> Option<Locale> {
        let remote = self.remote.as_ref()?;
        let token = load_auth_token(self.storage.as_ref())?;

        match remote.fetch_language(&token).await {
            Ok(Some(code)) => {
                let locale = Locale::parse_lenient(&code);
                if locale.is_none() {
                    warn!(code = %code, "Remote preference names an unsupported language");
                }
                locale
            }
            Ok(None) => {
                debug!("Remote preferences carry no language");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch remote preferences, using local value");
                None
            }
        }
    }

    fn persisted_locale(&self) -> Option<Locale> {
        match self.storage.get(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => {
                let locale = Locale::parse_lenient(&code);
                if locale.is_none() {
                    warn!(code = %code, "Stored language is not supported, ignoring it");
                }
                locale
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored language");
                None
            }
        }
    }

    // ==================== Locale changes ====================

    /// Switch to `code`; unsupported codes switch to the default locale.
    ///
    /// Returns the locale actually applied. Storage, document and remote
    /// failures are logged and never undo the in-memory change.
    pub fn change_locale(&mut self, code: &str) -> Locale {
        match Locale::parse(code) {
            Some(locale) => self.commit(locale, false),
            None => {
                warn!(
                    code = %code,
                    fallback = %Locale::default(),
                    "Unsupported language requested, using default"
                );
                self.commit(Locale::default(), true)
            }
        }
    }

    /// Switch to a known locale
    pub fn set_locale(&mut self, locale: Locale) -> Locale {
        self.commit(locale, false)
    }

    fn commit(&mut self, locale: Locale, coerced: bool) -> Locale {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.state = LanguageState {
            locale,
            catalog: self.catalogs.get(locale),
        };

        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, locale.code()) {
            warn!(error = %e, locale = %locale, "Failed to persist language");
        }

        self.update_document(locale);
        self.spawn_remote_sync(locale, generation);

        info!(locale = %locale, "Language changed");
        self.emit(StoreEvent::LocaleChanged { locale, coerced });
        locale
    }

    fn update_document(&self, locale: Locale) {
        if let Err(e) = self.document.set_language(locale.code()) {
            warn!(error = %e, locale = %locale, "Failed to set document language");
        }
    }

    fn spawn_remote_sync(&self, locale: Locale, generation: u64) {
        let Some(remote) = self.remote.clone() else {
            return;
        };
        let Some(token) = load_auth_token(self.storage.as_ref()) else {
            debug!("Not signed in, skipping remote language sync");
            return;
        };

        let retry = self.sync_retry.clone();
        let latest = self.generation.clone();
        let tx = self.tx.clone();
        let rx = self.rx.clone();

        runtime::spawn_named("preferences-sync", async move {
            let event =
                push_with_retry(remote.as_ref(), &token, locale, &retry, generation, &latest).await;
            push_event(&tx, &rx, event);
        });
    }

    fn emit(&self, event: StoreEvent) {
        push_event(&self.tx, &self.rx, event);
    }

    // ==================== Lookups ====================

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.state.locale
    }

    /// Look up a dotted key in the active catalog and fill `{name}` placeholders.
    ///
    /// Missing keys come back verbatim so they stand out on the page.
    pub fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.state.catalog.get(key) {
            Some(text) if args.is_empty() => text.to_string(),
            Some(text) => interpolate(text, args),
            None => {
                warn!(key = %key, locale = %self.state.locale, "Missing translation");
                key.to_string()
            }
        }
    }

    pub fn tr(&self, key: Key) -> String {
        self.translate(key.as_str(), &[])
    }

    pub fn tr_with(&self, key: Key, args: &[(&str, &str)]) -> String {
        self.translate(key.as_str(), args)
    }

    /// Supported languages for the switcher
    pub fn list_languages(&self) -> [LanguageInfo; 2] {
        list_languages()
    }

    // ==================== Formatting ====================

    pub fn format_date<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        options: Option<DateFormatOptions>,
    ) -> String {
        format::format_date(date, self.state.locale, &options.unwrap_or_default())
    }

    pub fn format_number(&self, n: f64, options: Option<NumberFormatOptions>) -> String {
        format::format_number(n, self.state.locale, &options.unwrap_or_default())
    }

    /// Format money; the currency defaults to EUR for `it` and USD for `en`
    pub fn format_currency(&self, amount: f64, currency: Option<&str>) -> String {
        let currency = currency.unwrap_or_else(|| self.state.locale.default_currency());
        format::format_currency(amount, self.state.locale, currency)
    }

    // ==================== Events ====================

    /// Receiver for store events
    ///
    /// All receivers share one bounded queue: each event reaches one of them,
    /// and the oldest pending events give way to new ones.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        self.rx.clone()
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("locale", &self.state.locale)
            .field("remote", &self.remote.is_some())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

/// Queue an event, evicting the oldest pending ones until it fits
fn push_event(tx: &Sender<StoreEvent>, rx: &Receiver<StoreEvent>, mut event: StoreEvent) {
    loop {
        match tx.try_send(event) {
            Ok(()) => return,
            Err(TrySendError::Full(rejected)) => {
                if let Ok(evicted) = rx.try_recv() {
                    debug!(?evicted, "Store event queue full, dropping oldest event");
                }
                event = rejected;
            }
            Err(TrySendError::Disconnected(_)) => return,
        }
    }
}

/// Push `locale`, retrying per `retry` while no newer change has been made
async fn push_with_retry(
    remote: &dyn PreferencesApi,
    token: &str,
    locale: Locale,
    retry: &RetryConfig,
    generation: u64,
    latest: &AtomicU64,
) -> StoreEvent {
    let mut attempts = 0;

    loop {
        if latest.load(Ordering::SeqCst) != generation {
            debug!(locale = %locale, "Newer language change pending, abandoning sync");
            return StoreEvent::RemoteSyncSuperseded { locale };
        }

        attempts += 1;
        match remote.push_language(token, locale).await {
            Ok(()) => {
                debug!(locale = %locale, attempts, "Language preference synced");
                return StoreEvent::RemoteSyncSucceeded { locale, attempts };
            }
            Err(e) => match retry.delay_for(attempts) {
                Some(delay) => {
                    debug!(error = %e, delay = ?delay, attempts, "Retrying language sync");
                    tokio::time::sleep(delay).await;
                }
                None => {
                    warn!(error = %e, locale = %locale, attempts, "Failed to sync language preference");
                    return StoreEvent::RemoteSyncFailed {
                        locale,
                        attempts,
                        reason: e.to_string().into(),
                    };
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::states::session::store_auth_token;
    use futures::future::BoxFuture;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    /// Scripted preferences endpoint
    #[derive(Default)]
    struct FakeRemote {
        preference: Option<&'static str>,
        fail_fetch: bool,
        /// Number of pushes that fail before pushes start succeeding
        failing_pushes: AtomicU32,
        pushed: Mutex<Vec<Locale>>,
    }

    impl FakeRemote {
        fn unreachable() -> Self {
            Self {
                fail_fetch: true,
                failing_pushes: AtomicU32::new(u32::MAX),
                ..Self::default()
            }
        }

        fn pushed(&self) -> Vec<Locale> {
            self.pushed.lock().expect("lock").clone()
        }
    }

    fn offline() -> Error {
        Error::Status {
            status: 503,
            url: "http://prefs.test".into(),
        }
    }

    impl PreferencesApi for FakeRemote {
        fn fetch_language<'a>(&'a self, _token: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
            Box::pin(async move {
                if self.fail_fetch {
                    return Err(offline());
                }
                Ok(self.preference.map(str::to_string))
            })
        }

        fn push_language<'a>(&'a self, _token: &'a str, locale: Locale) -> BoxFuture<'a, Result<()>> {
            Box::pin(async move {
                self.pushed.lock().expect("lock").push(locale);
                let remaining = self.failing_pushes.load(Ordering::SeqCst);
                if remaining > 0 {
                    self.failing_pushes.store(remaining.saturating_sub(1), Ordering::SeqCst);
                    return Err(offline());
                }
                Ok(())
            })
        }
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl LocalStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage {
                message: "quota exceeded".into(),
            })
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn test_catalogs() -> Catalogs {
        let it = Catalog::from_json(r#"{ "greeting": "Ciao {name}", "nav": { "home": "Home" } }"#)
            .expect("it");
        let en = Catalog::from_json(r#"{ "greeting": "Hello {name}", "nav": { "home": "Home" } }"#)
            .expect("en");
        Catalogs::new(it, en)
    }

    fn signed_in_storage() -> Arc<MemoryStorage> {
        let storage = Arc::new(MemoryStorage::new());
        store_auth_token(storage.as_ref(), "token").expect("token");
        storage
    }

    fn wait_for_sync(events: &Receiver<StoreEvent>) -> StoreEvent {
        loop {
            let event = events
                .recv_timeout(Duration::from_secs(5))
                .expect("sync event");
            if !matches!(event, StoreEvent::LocaleChanged { .. }) {
                return event;
            }
        }
    }

    #[test]
    fn translate_matches_catalog_for_each_supported_locale() {
        let mut store = LanguageStore::builder().build().expect("store");
        let catalogs = Catalogs::bundled().expect("catalogs");

        for locale in Locale::ALL {
            store.change_locale(locale.code());
            for key in Key::ALL {
                assert_eq!(
                    Some(store.tr(*key).as_str()),
                    catalogs.get(locale).get(key.as_str()),
                    "{locale}: {key}"
                );
            }
        }
    }

    #[test]
    fn unsupported_code_behaves_like_default() {
        let storage = Arc::new(MemoryStorage::new());
        let document = Arc::new(InMemoryDocument::new());
        let mut store = LanguageStore::builder()
            .storage(storage.clone())
            .document(document.clone())
            .build()
            .expect("store");
        let events = store.subscribe();

        store.change_locale("en");
        assert_eq!(store.change_locale("fr"), Locale::It);
        assert_eq!(store.locale(), Locale::It);
        assert_eq!(store.tr(Key::NavStories), "Storie");
        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY).expect("get").as_deref(), Some("it"));
        assert_eq!(document.language().as_deref(), Some("it"));

        let last = events.try_iter().last().expect("event");
        assert_eq!(last, StoreEvent::LocaleChanged { locale: Locale::It, coerced: true });
    }

    #[test]
    fn uppercase_or_padded_codes_are_coerced() {
        let mut store = LanguageStore::builder().build().expect("store");
        let events = store.subscribe();

        for code in ["EN", " en ", "En"] {
            assert_eq!(store.change_locale(code), Locale::It, "{code:?}");
            assert_eq!(
                events.try_iter().last(),
                Some(StoreEvent::LocaleChanged { locale: Locale::It, coerced: true })
            );
        }
    }

    #[test]
    fn full_event_queue_keeps_the_latest_change() {
        let mut store = LanguageStore::builder().build().expect("store");

        for i in 0..(EVENT_CAPACITY + 5) {
            store.change_locale(if i % 2 == 0 { "en" } else { "it" });
        }
        store.change_locale("en");

        let drained: Vec<_> = store.subscribe().try_iter().collect();
        assert_eq!(drained.len(), EVENT_CAPACITY);
        assert_eq!(
            drained.last(),
            Some(&StoreEvent::LocaleChanged { locale: store.locale(), coerced: false })
        );
        assert_eq!(store.locale(), Locale::En);
    }

    #[test]
    fn missing_key_returns_key_itself() {
        let store = LanguageStore::builder().build().expect("store");
        assert_eq!(store.translate("a.b.c", &[]), "a.b.c");
        assert_eq!(store.translate("nav", &[]), "nav");
    }

    #[test]
    fn interpolation_fills_and_keeps_unmatched() {
        let mut store = LanguageStore::builder()
            .catalogs(test_catalogs())
            .build()
            .expect("store");
        store.change_locale("en");

        assert_eq!(store.translate("greeting", &[("name", "Ada")]), "Hello Ada");
        assert_eq!(store.translate("greeting", &[("other", "x")]), "Hello {name}");
        assert_eq!(store.translate("greeting", &[]), "Hello {name}");
    }

    #[tokio::test]
    async fn persisted_locale_survives_restart() {
        let storage = Arc::new(MemoryStorage::new());

        let mut first = LanguageStore::builder().storage(storage.clone()).build().expect("store");
        first.change_locale("en");
        drop(first);

        let mut restarted = LanguageStore::builder().storage(storage).build().expect("store");
        assert_eq!(restarted.initialize().await, Locale::En);
        assert_eq!(restarted.locale(), Locale::En);
    }

    #[tokio::test]
    async fn remote_preference_wins_over_local_value() {
        let storage = signed_in_storage();
        storage.set(LANGUAGE_STORAGE_KEY, "it").expect("set");
        let remote = Arc::new(FakeRemote {
            preference: Some("en"),
            ..FakeRemote::default()
        });

        let document = Arc::new(InMemoryDocument::new());
        let mut store = LanguageStore::builder()
            .storage(storage.clone())
            .document(document.clone())
            .remote(remote)
            .build()
            .expect("store");

        assert_eq!(store.initialize().await, Locale::En);
        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY).expect("get").as_deref(), Some("en"));
        assert_eq!(document.language().as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_local_then_default() {
        let storage = signed_in_storage();
        let remote = Arc::new(FakeRemote::unreachable());

        let mut store = LanguageStore::builder()
            .storage(storage.clone())
            .remote(remote.clone())
            .build()
            .expect("store");
        assert_eq!(store.initialize().await, Locale::It);

        storage.set(LANGUAGE_STORAGE_KEY, "en").expect("set");
        let mut store = LanguageStore::builder()
            .storage(storage)
            .remote(remote)
            .build()
            .expect("store");
        assert_eq!(store.initialize().await, Locale::En);
    }

    #[tokio::test]
    async fn unsupported_remote_or_stored_values_are_ignored() {
        let storage = signed_in_storage();
        storage.set(LANGUAGE_STORAGE_KEY, "de").expect("set");
        let remote = Arc::new(FakeRemote {
            preference: Some("klingon"),
            ..FakeRemote::default()
        });

        let mut store = LanguageStore::builder()
            .storage(storage)
            .remote(remote)
            .build()
            .expect("store");
        assert_eq!(store.initialize().await, Locale::It);
    }

    #[tokio::test]
    async fn signed_out_users_skip_the_remote() {
        let remote = Arc::new(FakeRemote {
            preference: Some("en"),
            ..FakeRemote::default()
        });
        let mut store = LanguageStore::builder()
            .remote(remote.clone())
            .build()
            .expect("store");

        assert_eq!(store.initialize().await, Locale::It);
        store.change_locale("en");
        assert!(remote.pushed().is_empty());
    }

    #[test]
    fn storage_failure_does_not_block_change() {
        let document = Arc::new(InMemoryDocument::new());
        let mut store = LanguageStore::builder()
            .storage(Arc::new(ReadOnlyStorage))
            .document(document.clone())
            .build()
            .expect("store");

        assert_eq!(store.change_locale("en"), Locale::En);
        assert_eq!(store.tr(Key::NavStories), "Stories");
        assert_eq!(document.language().as_deref(), Some("en"));
    }

    #[test]
    fn remote_sync_failure_is_dropped_without_touching_state() {
        let remote = Arc::new(FakeRemote::unreachable());
        let mut store = LanguageStore::builder()
            .storage(signed_in_storage())
            .remote(remote.clone())
            .build()
            .expect("store");
        let events = store.subscribe();

        assert_eq!(store.change_locale("en"), Locale::En);

        match wait_for_sync(&events) {
            StoreEvent::RemoteSyncFailed { locale, attempts, .. } => {
                assert_eq!(locale, Locale::En);
                assert_eq!(attempts, 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(remote.pushed(), vec![Locale::En]);
    }

    #[test]
    fn remote_sync_retries_when_configured() {
        let remote = Arc::new(FakeRemote {
            failing_pushes: AtomicU32::new(2),
            ..FakeRemote::default()
        });
        let mut store = LanguageStore::builder()
            .storage(signed_in_storage())
            .remote(remote.clone())
            .sync_retry(RetryConfig {
                max_retries: 3,
                initial_delay_ms: 5,
                max_delay_ms: 20,
                multiplier: 2.0,
                jitter: 0.0,
            })
            .build()
            .expect("store");
        let events = store.subscribe();

        store.change_locale("en");

        assert_eq!(
            wait_for_sync(&events),
            StoreEvent::RemoteSyncSucceeded {
                locale: Locale::En,
                attempts: 3
            }
        );
        assert_eq!(remote.pushed(), vec![Locale::En; 3]);
    }

    #[test]
    fn newer_change_supersedes_pending_retries() {
        let remote = Arc::new(FakeRemote {
            failing_pushes: AtomicU32::new(1),
            ..FakeRemote::default()
        });
        let mut store = LanguageStore::builder()
            .storage(signed_in_storage())
            .remote(remote.clone())
            .sync_retry(RetryConfig {
                max_retries: 5,
                initial_delay_ms: 300,
                max_delay_ms: 300,
                multiplier: 1.0,
                jitter: 0.0,
            })
            .build()
            .expect("store");
        let events = store.subscribe();

        store.change_locale("en");
        // Let the first push fail and start backing off
        std::thread::sleep(Duration::from_millis(100));
        store.change_locale("it");

        let mut outcomes = vec![wait_for_sync(&events), wait_for_sync(&events)];
        outcomes.sort_by_key(|e| format!("{e:?}"));
        assert!(outcomes.contains(&StoreEvent::RemoteSyncSuperseded { locale: Locale::En }));
        assert!(outcomes.contains(&StoreEvent::RemoteSyncSucceeded {
            locale: Locale::It,
            attempts: 1
        }));
        assert_eq!(store.locale(), Locale::It);
    }

    #[test]
    fn formatters_follow_active_locale() {
        let mut store = LanguageStore::builder().build().expect("store");

        assert_eq!(store.format_currency(99.99, None), "99,99\u{a0}€");
        assert_eq!(store.format_number(1234567.5, None), "1.234.567,5");

        store.change_locale("en");
        assert_eq!(store.format_currency(99.99, None), "$99.99");
        assert_eq!(store.format_currency(99.99, Some("EUR")), "€99.99");
        assert_eq!(
            store.format_number(2.5, Some(NumberFormatOptions::fixed(2))),
            "2.50"
        );
    }

    #[test]
    fn list_languages_is_static() {
        let store = LanguageStore::builder().build().expect("store");
        let codes: Vec<_> = store.list_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["it", "en"]);
    }
}
