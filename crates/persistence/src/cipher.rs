// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-run symmetric encryption of receiver names.
//!
//! ## Format
//!
//! A token is the URL-safe base64 encoding of `nonce (24 bytes) || ciphertext`,
//! where the ciphertext is `XChaCha20-Poly1305(key, nonce, name)`. The key is
//! exported with the same base64 alphabet.
//!
//! ## Known limitation
//!
//! The key is written into the same file as the tokens. Encryption only
//! keeps the names from being read at a glance (e.g. by the organiser
//! opening the file); anyone with the file can decrypt it. Protection of
//! the file itself is left to filesystem and transport access control.

use crate::error::PersistenceError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 24;

/// Encrypts and decrypts receiver names with one run's key.
pub struct NameCipher {
    key: Key,
    aead: XChaCha20Poly1305,
}

impl std::fmt::Debug for NameCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameCipher").finish_non_exhaustive()
    }
}

impl NameCipher {
    /// Creates a cipher with a freshly generated random key.
    #[must_use]
    pub fn generate() -> Self {
        let key: Key = XChaCha20Poly1305::generate_key(&mut OsRng);
        Self::from_key(key)
    }

    /// Recreates a cipher from a key exported with [`Self::encoded_key`].
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidKey` if the text is not base64 or
    /// does not decode to a 32-byte key.
    pub fn from_encoded_key(encoded: &str) -> Result<Self, PersistenceError> {
        let bytes: Vec<u8> = URL_SAFE
            .decode(encoded.trim())
            .map_err(|err| PersistenceError::InvalidKey(err.to_string()))?;
        if bytes.len() != KEY_LEN {
            return Err(PersistenceError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self::from_key(Key::clone_from_slice(&bytes)))
    }

    fn from_key(key: Key) -> Self {
        let aead: XChaCha20Poly1305 = XChaCha20Poly1305::new(&key);
        Self { key, aead }
    }

    /// Returns the key in its stored text form.
    #[must_use]
    pub fn encoded_key(&self) -> String {
        URL_SAFE.encode(self.key.as_slice())
    }

    /// Encrypts a name under a fresh random nonce.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EncryptionFailed` if the AEAD rejects the input.
    pub fn encrypt(&self, name: &str) -> Result<String, PersistenceError> {
        let nonce: XNonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext: Vec<u8> = self
            .aead
            .encrypt(&nonce, name.as_bytes())
            .map_err(|_| PersistenceError::EncryptionFailed)?;

        let mut token: Vec<u8> = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        token.extend_from_slice(nonce.as_slice());
        token.extend_from_slice(&ciphertext);
        Ok(URL_SAFE.encode(token))
    }

    /// Decrypts a token produced by [`Self::encrypt`] with the same key.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DecryptionFailed` if the token is malformed,
    /// was produced with another key, or does not hold UTF-8 text.
    pub fn decrypt(&self, token: &str) -> Result<String, PersistenceError> {
        let bytes: Vec<u8> = URL_SAFE
            .decode(token.trim())
            .map_err(|err| PersistenceError::DecryptionFailed(err.to_string()))?;
        if bytes.len() < NONCE_LEN {
            return Err(PersistenceError::DecryptionFailed(String::from(
                "token shorter than nonce",
            )));
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let plaintext: Vec<u8> = self
            .aead
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                PersistenceError::DecryptionFailed(String::from("authentication failed"))
            })?;

        String::from_utf8(plaintext)
            .map_err(|err| PersistenceError::DecryptionFailed(err.to_string()))
    }
}
