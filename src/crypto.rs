// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Passphrase cipher step.
//!
//! Runs outside the codec pipeline: callers seal text before encoding it and
//! open it after decoding. The sealed form is plain ASCII so it can feed any
//! text codec:
//!
//! ```text
//! base64(salt) ":" base64(nonce) ":" base64(ciphertext || tag)
//! ```
//!
//! The AES-256-GCM-SIV key is derived with Argon2id from the passphrase and a
//! random 16-byte salt. A random 12-byte nonce is drawn per message, so
//! sealing the same text twice yields different output.

use core::fmt;

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use argon2::Argon2;
use zeroize::Zeroizing;

use crate::text::base64;
use crate::ErrorCode;

/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// Argon2 salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Errors from [`seal`] and [`open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The passphrase is empty.
    MissingPassword,
    /// Argon2 rejected the key derivation inputs.
    KeyDerivation,
    /// AES-GCM-SIV encryption failed.
    EncryptionFailed,
    /// The sealed text is not `salt:nonce:ciphertext` in Base64.
    InvalidFormat,
    /// Authentication failed (wrong passphrase or tampered data).
    DecryptionFailed,
    /// The decrypted bytes are not valid UTF-8.
    InvalidUtf8,
}

impl CipherError {
    /// Stable client-facing code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingPassword => ErrorCode::InvalidOptions,
            Self::InvalidFormat => ErrorCode::InvalidInput,
            _ => ErrorCode::CryptoError,
        }
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPassword => write!(f, "password is required for encryption"),
            Self::KeyDerivation => write!(f, "key derivation failed"),
            Self::EncryptionFailed => write!(f, "encryption failed"),
            Self::InvalidFormat => {
                write!(f, "invalid encrypted format (expected salt:iv:ciphertext)")
            }
            Self::DecryptionFailed => write!(f, "decryption failed (wrong password?)"),
            Self::InvalidUtf8 => write!(f, "decrypted text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for CipherError {}

fn derive_key(passphrase: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, CipherError> {
    let mut key = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(passphrase.as_bytes(), salt, &mut *key)
        .map_err(|_| CipherError::KeyDerivation)?;
    Ok(key)
}

fn cipher_for(passphrase: &str, salt: &[u8]) -> Result<Aes256GcmSiv, CipherError> {
    let key = derive_key(passphrase, salt)?;
    Aes256GcmSiv::new_from_slice(&*key).map_err(|_| CipherError::KeyDerivation)
}

/// Encrypt `plaintext` under `passphrase`.
///
/// # Errors
/// [`CipherError::MissingPassword`] if `passphrase` is empty.
pub fn seal(plaintext: &str, passphrase: &str) -> Result<String, CipherError> {
    use rand::RngCore;

    if passphrase.is_empty() {
        return Err(CipherError::MissingPassword);
    }

    let mut rng = rand::thread_rng();
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let ciphertext = cipher_for(passphrase, &salt)?
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| CipherError::EncryptionFailed)?;

    Ok(format!(
        "{}:{}:{}",
        base64::encode_bytes(&salt),
        base64::encode_bytes(&nonce),
        base64::encode_bytes(&ciphertext)
    ))
}

/// Decrypt text produced by [`seal`].
///
/// # Errors
/// - [`CipherError::MissingPassword`] if `passphrase` is empty.
/// - [`CipherError::InvalidFormat`] if `sealed` is malformed.
/// - [`CipherError::DecryptionFailed`] on a wrong passphrase or tampering.
/// - [`CipherError::InvalidUtf8`] if the plaintext is not UTF-8.
pub fn open(sealed: &str, passphrase: &str) -> Result<String, CipherError> {
    if passphrase.is_empty() {
        return Err(CipherError::MissingPassword);
    }

    let parts: Vec<&str> = sealed.split(':').collect();
    let [salt, nonce, ciphertext] = parts.as_slice() else {
        return Err(CipherError::InvalidFormat);
    };
    let decode = |s: &str| base64::decode_bytes(s).map_err(|_| CipherError::InvalidFormat);
    let salt = decode(*salt)?;
    let nonce = decode(*nonce)?;
    let ciphertext = decode(*ciphertext)?;
    if salt.len() != SALT_LEN || nonce.len() != NONCE_LEN {
        return Err(CipherError::InvalidFormat);
    }

    let plaintext = cipher_for(passphrase, &salt)?
        .decrypt(Nonce::from_slice(&nonce), ciphertext.as_slice())
        .map_err(|_| CipherError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
}
