//! src/encryptor/stream.rs
//! Block loop of the container writer.
//!
//! `HeaderWritten → {BlockWritten}* → Done`: pull up to 64 KiB of plaintext,
//! seal it under the current nonce, write `tag || ciphertext`, advance the
//! nonce. A short chunk is the terminal block; an empty read after a full block
//! (or on the very first read) ends the stream without writing anything.

use crate::aliases::new_block_buffer;
use crate::consts::{BLOCK_DATA_SIZE, BLOCK_HEADER_SIZE};
use crate::crypto::nonce::Nonce;
use crate::crypto::secretbox::BlockCipher;
use crate::encryptor::write::write_block;
use crate::error::CryptError;
use crate::utils::{read_full, StreamSummary};
use std::io::{Read, Write};
use tracing::trace;

/// Seal every plaintext chunk of `source` into `destination`.
///
/// Expects the header to be written already; `nonce` must be the nonce recorded
/// in it. The caller owns the nonce sequence for this key: reusing `nonce` for a
/// second stream under the same key breaks confidentiality.
pub fn encrypt_stream<R, W>(
    source: &mut R,
    destination: &mut W,
    cipher: &BlockCipher,
    mut nonce: Nonce,
) -> Result<StreamSummary, CryptError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = new_block_buffer();
    let mut summary = StreamSummary::default();

    loop {
        let n = read_full(source, &mut buf[BLOCK_HEADER_SIZE..])?;
        if n == 0 {
            break;
        }

        let sealed = &mut buf[..BLOCK_HEADER_SIZE + n];
        cipher.seal_in_place(&nonce, sealed)?;
        write_block(destination, sealed)?;
        trace!(block = summary.blocks, len = n, "sealed block");

        nonce.advance();
        summary.blocks += 1;
        summary.plaintext_bytes += n as u64;

        if n < BLOCK_DATA_SIZE {
            break;
        }
    }

    Ok(summary)
}
