// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`kdf`] - scrypt password → [`DataKey`](crate::aliases::DataKey)
//! - [`nonce`] - 24-byte little-endian block counter
//! - [`secretbox`] - per-block XSalsa20-Poly1305 seal/open
//! - [`rng`] - OS randomness for fresh nonces

pub mod kdf;
pub mod nonce;
pub mod rng;
pub mod secretbox;
