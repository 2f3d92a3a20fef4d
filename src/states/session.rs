//! Session - the stored auth token
//!
//! The token is written sealed. Values that do not open (written by an older
//! client in clear text) are used as-is.

use crate::constants::AUTH_TOKEN_STORAGE_KEY;
use crate::error::Result;
use crate::helpers::{open, seal};
use crate::utils::LocalStorage;

/// Stored auth token, if any; storage failures count as "signed out"
pub fn load_auth_token(storage: &dyn LocalStorage) -> Option<String> {
    let stored = match storage.get(AUTH_TOKEN_STORAGE_KEY) {
        Ok(Some(value)) if !value.trim().is_empty() => value,
        Ok(_) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read auth token from storage");
            return None;
        }
    };

    Some(open(&stored).unwrap_or(stored))
}

/// Persist the auth token after sign in
pub fn store_auth_token(storage: &dyn LocalStorage, token: &str) -> Result<()> {
    storage.set(AUTH_TOKEN_STORAGE_KEY, &seal(token)?)
}

/// Forget the auth token on sign out
pub fn clear_auth_token(storage: &dyn LocalStorage) -> Result<()> {
    storage.remove(AUTH_TOKEN_STORAGE_KEY)
}
