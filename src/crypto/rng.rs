// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets and initial file nonces.
//!
//! Adds `T::random()` to every `Fixed<[u8; N]>` (and to [`Nonce`](crate::Nonce)).
//! A failing OS source is reported as [`CryptError::Io`].

use crate::error::CryptError;
use rand::rngs::OsRng;
use rand::TryRngCore;
use secure_gate::Fixed;

/// Extension trait: gives `.random()` to types built from OS randomness.
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type.
    fn random() -> Result<Self, CryptError>;
}

/// Fills `dest` from the operating system's CSPRNG.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), CryptError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| CryptError::Io(std::io::Error::other(e)))
}

/// Blanket impl: every `Fixed<[u8; N]>` (e.g. [`DataKey`](crate::DataKey)) gets `.random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, CryptError> {
        let mut secret = Fixed::new([0u8; N]);
        fill_random(secret.expose_secret_mut())?;
        Ok(secret)
    }
}
