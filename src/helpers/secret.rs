//! Token sealing for local storage.
//!
//! The auth token is kept in local storage as Base64 of `[nonce (12 bytes)][ciphertext]`,
//! sealed with AES-256-GCM so the storage file never holds it in clear text.

use crate::error::{Error, Result};
use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Sealing key compiled into the binary.
///
/// WARNING: this only keeps the token out of plain sight; a keychain backed
/// key would be needed to protect it from someone who can read the binary.
const SEAL_KEY: &[u8; 32] = b"Pawtales-LocalStorage-Seal-Key!!";

const NONCE_LEN: usize = 12;

/// Seal a secret for storage
pub fn seal(secret: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(SEAL_KEY.into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let sealed = cipher
        .encrypt(&nonce, secret.as_bytes())
        .map_err(|e| Error::Invalid {
            message: format!("Sealing failed: {e}"),
        })?;

    let mut payload = nonce.to_vec();
    payload.extend_from_slice(&sealed);
    Ok(BASE64.encode(payload))
}

/// Open a value produced by [`seal`]
pub fn open(sealed: &str) -> Result<String> {
    let payload = BASE64.decode(sealed.trim()).map_err(|e| Error::Invalid {
        message: format!("Base64 decode failed: {e}"),
    })?;

    if payload.len() < NONCE_LEN {
        return Err(Error::Invalid {
            message: "Sealed value too short".to_string(),
        });
    }

    let (nonce, body) = payload.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(SEAL_KEY.into());
    let plain = cipher
        .decrypt(Nonce::<Aes256Gcm>::from_slice(nonce), body)
        .map_err(|e| Error::Invalid {
            message: format!("Opening sealed value failed: {e}"),
        })?;

    String::from_utf8(plain).map_err(|e| Error::Invalid {
        message: format!("UTF-8 decode failed: {e}"),
    })
}
