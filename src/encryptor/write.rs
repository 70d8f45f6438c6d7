//! src/encryptor/write.rs
//! Container write helpers

use crate::error::CryptError;
use std::io::Write;

/// Write one sealed block (`tag || ciphertext`) as a single contiguous write.
#[inline]
pub fn write_block<W: Write + ?Sized>(writer: &mut W, sealed: &[u8]) -> Result<(), CryptError> {
    writer.write_all(sealed).map_err(CryptError::Io)
}
