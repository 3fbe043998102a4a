//! Activation-key encryption using AES-256-CBC.
//!
//! The wire format is `ivhex:cipherhex`: a 32-character lowercase hex IV,
//! a colon, and even-length lowercase hex ciphertext (PKCS#7 padded).
//! Case-insensitive hex is accepted on input. This format is the only
//! artifact that crosses the trust boundary, so its stability is a
//! compatibility requirement for keys already in the field.
//!
//! The format carries no authentication tag, and CBC is malleable: an
//! attacker who flips IV bits XORs the matching bytes of the first
//! plaintext block without touching the padding, so [`decrypt`] cannot
//! detect such edits. Callers must treat the recovered plaintext as
//! untrusted input and validate its contents.

use crate::error::{CryptoError, CryptoResult};
use crate::secret::SecretKey;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the initialization vector in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// Length of the hex-encoded IV segment.
pub const IV_HEX_LEN: usize = IV_SIZE * 2;

/// Why a decryption attempt was rejected.
///
/// Internal only: callers receive a uniform `None` so an attacker probing
/// with forged keys cannot distinguish failure causes. Operator logs may
/// still record the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecryptFailure {
    MissingDelimiter,
    BadIvLength,
    OddCiphertextLength,
    BadHex,
    BadPadding,
}

/// Encrypts plaintext into the `ivhex:cipherhex` activation-key format.
///
/// A fresh random 16-byte IV is drawn from the OS RNG for every call;
/// IVs are never reused.
pub fn encrypt(secret: &SecretKey, plaintext: &[u8]) -> CryptoResult<String> {
    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(secret.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    if ciphertext.is_empty() {
        // PKCS#7 always emits at least one block; reaching here means the
        // cipher backend misbehaved.
        return Err(CryptoError::Encryption("empty ciphertext".to_string()));
    }

    Ok(format!("{}:{}", hex::encode(iv), hex::encode(ciphertext)))
}

/// Decrypts an `ivhex:cipherhex` string back to plaintext.
///
/// Returns `None` for every malformed, tampered, or wrong-key input;
/// the cause is deliberately not exposed. Never panics on attacker input.
#[must_use]
pub fn decrypt(secret: &SecretKey, encoded: &str) -> Option<Vec<u8>> {
    match decrypt_inner(secret, encoded) {
        Ok(plaintext) => Some(plaintext),
        Err(reason) => {
            tracing::debug!(?reason, "activation key decryption rejected");
            None
        }
    }
}

fn decrypt_inner(secret: &SecretKey, encoded: &str) -> Result<Vec<u8>, DecryptFailure> {
    // First segment is the IV; everything after the first colon is the
    // ciphertext field.
    let (iv_hex, cipher_hex) = encoded
        .split_once(':')
        .ok_or(DecryptFailure::MissingDelimiter)?;

    if iv_hex.len() != IV_HEX_LEN {
        return Err(DecryptFailure::BadIvLength);
    }
    if cipher_hex.len() % 2 != 0 {
        return Err(DecryptFailure::OddCiphertextLength);
    }

    let iv_bytes = hex::decode(iv_hex).map_err(|_| DecryptFailure::BadHex)?;
    let ciphertext = hex::decode(cipher_hex).map_err(|_| DecryptFailure::BadHex)?;

    let iv: [u8; IV_SIZE] = iv_bytes.try_into().map_err(|_| DecryptFailure::BadIvLength)?;

    // Covers wrong key, truncated blocks, and tampered data alike: any of
    // them surfaces as a padding error.
    Aes256CbcDec::new(secret.as_bytes().into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| DecryptFailure::BadPadding)
}
