//! tests/common.rs
//! Common constants and helpers shared across test files

use rclone_crypt::consts::{BLOCK_DATA_SIZE, BLOCK_SIZE, FILE_HEADER_SIZE};
use rclone_crypt::{decrypt, encrypt, CryptError, DataKey};
use std::io::Cursor;

/// Non-empty password for tests that need real scrypt output.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"Hello";

#[allow(dead_code)]
pub const TEST_SALT: &[u8] = b"sea salt";

/// The all-zero key an empty password derives to; skips scrypt.
#[allow(dead_code)]
pub fn zero_key() -> DataKey {
    DataKey::new([0u8; 32])
}

/// Deterministic, non-repeating-per-block test data.
#[allow(dead_code)]
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[allow(dead_code)]
pub fn encrypt_vec(plaintext: &[u8], key: &DataKey) -> Vec<u8> {
    let mut out = Vec::new();
    encrypt(Cursor::new(plaintext), &mut out, key).unwrap();
    out
}

#[allow(dead_code)]
pub fn decrypt_vec(container: &[u8], key: &DataKey) -> Result<Vec<u8>, CryptError> {
    let mut out = Vec::new();
    decrypt(Cursor::new(container), &mut out, key)?;
    Ok(out)
}

/// Container length for `plaintext_len` bytes of input.
#[allow(dead_code)]
pub fn expected_container_len(plaintext_len: usize) -> usize {
    let full = plaintext_len / BLOCK_DATA_SIZE;
    let rest = plaintext_len % BLOCK_DATA_SIZE;
    FILE_HEADER_SIZE + full * BLOCK_SIZE + if rest > 0 { rest + 16 } else { 0 }
}
