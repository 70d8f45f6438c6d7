//! src/crypto/nonce.rs
//! Per-file nonce sequence.
//!
//! The container header records a random 24-byte initial nonce. Block `i` is
//! sealed under `initial + i`, where the addition treats all 24 bytes as one
//! little-endian integer and wraps on overflow. Writer and reader both advance
//! exactly once per block, in block order, which is what keeps every
//! (key, nonce) pair unique within a file.

use crate::consts::FILE_NONCE_SIZE;
use crate::crypto::rng::{fill_random, SecureRandomExt};
use crate::error::CryptError;
use crate::utils::increment_le;
use std::fmt;

/// 24-byte XSalsa20 nonce, used as a little-endian block counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; FILE_NONCE_SIZE]);

impl Nonce {
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; FILE_NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn as_bytes(&self) -> &[u8; FILE_NONCE_SIZE] {
        &self.0
    }

    /// Step to the nonce of the next block.
    #[inline(always)]
    pub fn advance(&mut self) {
        increment_le(&mut self.0);
    }

    /// The nonce of the next block, leaving `self` untouched.
    #[inline(always)]
    #[must_use]
    pub fn successor(&self) -> Self {
        let mut next = *self;
        next.advance();
        next
    }
}

impl SecureRandomExt for Nonce {
    /// Fresh initial nonce for a new container.
    #[inline]
    fn random() -> Result<Self, CryptError> {
        let mut bytes = [0u8; FILE_NONCE_SIZE];
        fill_random(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; FILE_NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; FILE_NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_little_endian() {
        let mut nonce = Nonce::from_bytes([0u8; 24]);
        nonce.advance();
        let mut expected = [0u8; 24];
        expected[0] = 1;
        assert_eq!(nonce.as_bytes(), &expected);
    }

    #[test]
    fn advance_carries_into_high_bytes() {
        let mut bytes = [0u8; 24];
        bytes[..8].fill(0xFF);
        let mut nonce = Nonce::from_bytes(bytes);
        nonce.advance();

        let mut expected = [0u8; 24];
        expected[8] = 1;
        assert_eq!(nonce.as_bytes(), &expected);
    }

    #[test]
    fn advance_wraps_instead_of_panicking() {
        let mut nonce = Nonce::from_bytes([0xFF; 24]);
        nonce.advance();
        assert_eq!(nonce.as_bytes(), &[0u8; 24]);
    }

    #[test]
    fn successor_leaves_original_alone() {
        let nonce = Nonce::from_bytes([9u8; 24]);
        let next = nonce.successor();
        assert_eq!(nonce.as_bytes(), &[9u8; 24]);
        assert_eq!(next.as_bytes()[0], 10);
    }

    #[test]
    fn random_nonces_are_distinct() {
        assert_ne!(Nonce::random().unwrap(), Nonce::random().unwrap());
    }

    #[test]
    fn displays_as_hex() {
        let nonce = Nonce::from_bytes([0xAB; 24]);
        assert_eq!(nonce.to_string(), "ab".repeat(24));
    }
}
