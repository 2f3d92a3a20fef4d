//! Store Events
//!
//! Notifications emitted by the language store for views that re-render on
//! locale changes, and for observing the outcome of background syncs.

use crate::i18n::Locale;
use std::sync::Arc;

/// Events emitted by the language store
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// The active locale changed (also emitted by `initialize`)
    LocaleChanged {
        locale: Locale,
        /// Whether the caller asked for an unsupported code
        coerced: bool,
    },

    /// The remote preferences endpoint accepted the locale
    RemoteSyncSucceeded { locale: Locale, attempts: u32 },

    /// Every attempt failed; the failure has been logged and dropped
    RemoteSyncFailed {
        locale: Locale,
        attempts: u32,
        reason: Arc<str>,
    },

    /// A newer locale change superseded this sync before it finished
    RemoteSyncSuperseded { locale: Locale },
}
