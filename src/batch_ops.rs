//! src/batch_ops.rs
//! Parallel encryption/decryption of independent containers (feature `batch-ops`).
//!
//! Each pair is a separate container with its own random initial nonce, so
//! sharing one key across the batch never reuses a (key, nonce) pair.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::aliases::DataKey;
use crate::{decrypt, encrypt, CryptError};

/// Encrypt every `(source, destination)` pair in parallel under `key`.
///
/// Stops at the first error; destinations of other pairs may be partially written.
pub fn encrypt_batch<R, W>(batch: &mut [(R, W)], key: &DataKey) -> Result<(), CryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, key))
}

/// Decrypt every `(source, destination)` pair in parallel under `key`.
pub fn decrypt_batch<R, W>(batch: &mut [(R, W)], key: &DataKey) -> Result<(), CryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, key))
}
