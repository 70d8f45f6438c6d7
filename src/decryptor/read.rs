//! src/decryptor/read.rs
//! Block framing on the read side

use crate::consts::{BLOCK_HEADER_SIZE, BLOCK_SIZE};
use crate::error::CryptError;
use crate::utils::read_full;
use std::io::Read;

/// Read the next candidate block into `buf` (which must hold [`BLOCK_SIZE`] bytes).
///
/// Returns the number of bytes read:
/// - `0` - clean end of stream
/// - `17..=BLOCK_SIZE` - a block to open; anything below `BLOCK_SIZE` is the last one
///
/// # Errors
///
/// - [`CryptError::Format`] - 1 to 16 bytes remain: a truncated block that cannot
///   even hold its tag
/// - [`CryptError::Io`] - the reader failed
#[inline]
pub fn read_block<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize, CryptError> {
    debug_assert!(buf.len() >= BLOCK_SIZE);
    let n = read_full(reader, &mut buf[..BLOCK_SIZE])?;
    if n != 0 && n <= BLOCK_HEADER_SIZE {
        return Err(CryptError::Format(format!(
            "truncated block: {n} bytes, need more than {BLOCK_HEADER_SIZE}"
        )));
    }
    Ok(n)
}
