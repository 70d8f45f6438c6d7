//! src/crypto/secretbox.rs
//! Block cipher codec: XSalsa20-Poly1305 (NaCl `crypto_secretbox`) per block.
//!
//! A sealed block is laid out as `tag (16) || ciphertext (n)`, exactly what
//! `crypto_secretbox_easy` produces, so `sealed.len() == plaintext.len() + 16`.
//!
//! The streaming paths use the in-place variants against one buffer of
//! [`BLOCK_SIZE`] bytes: plaintext lives at `buf[16..]`, the tag at `buf[..16]`.
//! The allocating [`BlockCipher::seal`] / [`BlockCipher::open`] wrappers exist
//! for callers that handle single blocks.

use crate::aliases::DataKey;
use crate::consts::{BLOCK_DATA_SIZE, BLOCK_HEADER_SIZE, BLOCK_SIZE};
use crate::crypto::nonce::Nonce;
use crate::error::CryptError;
use xsalsa20poly1305::aead::{AeadInPlace, KeyInit};
use xsalsa20poly1305::{Key, Nonce as XNonce, Tag, XSalsa20Poly1305};

/// Seals and opens individual blocks under one data key.
#[derive(Clone)]
pub struct BlockCipher {
    cipher: XSalsa20Poly1305,
}

impl BlockCipher {
    /// Key the codec for one container.
    #[inline]
    pub fn new(key: &DataKey) -> Self {
        Self {
            cipher: XSalsa20Poly1305::new(Key::from_slice(key.expose_secret())),
        }
    }

    /// Seal `buf[16..]` in place and write the tag into `buf[..16]`.
    ///
    /// `buf` must be the full sealed-block span: 16 bytes of tag room followed by
    /// at most [`BLOCK_DATA_SIZE`] bytes of plaintext.
    pub fn seal_in_place(&self, nonce: &Nonce, buf: &mut [u8]) -> Result<(), CryptError> {
        if buf.len() < BLOCK_HEADER_SIZE {
            return Err(CryptError::Format(format!(
                "seal buffer of {} bytes has no room for the {BLOCK_HEADER_SIZE}-byte tag",
                buf.len()
            )));
        }
        if buf.len() > BLOCK_SIZE {
            return Err(CryptError::Format(format!(
                "plaintext block of {} bytes exceeds {BLOCK_DATA_SIZE}",
                buf.len() - BLOCK_HEADER_SIZE
            )));
        }

        let (tag_out, body) = buf.split_at_mut(BLOCK_HEADER_SIZE);
        let tag = self
            .cipher
            .encrypt_in_place_detached(XNonce::from_slice(nonce.as_bytes()), b"", body)
            .map_err(|_| CryptError::Format("block too large to seal".into()))?;
        tag_out.copy_from_slice(tag.as_slice());
        Ok(())
    }

    /// Verify and decrypt a sealed block in place.
    ///
    /// On success the plaintext is `buf[16..]` and its length is returned. On
    /// failure the buffer contents are unspecified and must not be emitted.
    ///
    /// # Errors
    ///
    /// - [`CryptError::Format`] if `buf` is 16 bytes or shorter (no room for
    ///   tag + data) or longer than [`BLOCK_SIZE`]
    /// - [`CryptError::Authentication`] if the tag does not verify
    pub fn open_in_place(&self, nonce: &Nonce, buf: &mut [u8]) -> Result<usize, CryptError> {
        if buf.len() <= BLOCK_HEADER_SIZE {
            return Err(CryptError::Format(format!(
                "truncated block: {} bytes cannot hold a {BLOCK_HEADER_SIZE}-byte tag and data",
                buf.len()
            )));
        }
        if buf.len() > BLOCK_SIZE {
            return Err(CryptError::Format(format!(
                "block of {} bytes exceeds {BLOCK_SIZE}",
                buf.len()
            )));
        }

        let (tag, body) = buf.split_at_mut(BLOCK_HEADER_SIZE);
        let tag = Tag::clone_from_slice(tag);
        self.cipher
            .decrypt_in_place_detached(XNonce::from_slice(nonce.as_bytes()), b"", body, &tag)
            .map_err(|_| CryptError::Authentication)?;
        Ok(body.len())
    }

    /// Seal one plaintext chunk, returning `tag || ciphertext`.
    pub fn seal(&self, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, CryptError> {
        let mut sealed = vec![0u8; BLOCK_HEADER_SIZE + plaintext.len()];
        sealed[BLOCK_HEADER_SIZE..].copy_from_slice(plaintext);
        self.seal_in_place(nonce, &mut sealed)?;
        Ok(sealed)
    }

    /// Open one sealed block, returning the plaintext.
    pub fn open(&self, nonce: &Nonce, sealed: &[u8]) -> Result<Vec<u8>, CryptError> {
        let mut buf = sealed.to_vec();
        let len = self.open_in_place(nonce, &mut buf)?;
        buf.drain(..BLOCK_HEADER_SIZE);
        debug_assert_eq!(buf.len(), len);
        Ok(buf)
    }
}
