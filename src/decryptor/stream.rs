//! src/decryptor/stream.rs
//! Block loop of the container reader.
//!
//! `HeaderVerified → {BlockVerified}* → Done`, mirroring the writer: read one
//! candidate block, open it under the current nonce, write the plaintext,
//! advance the nonce. A short block is the terminal one; an empty read is a
//! clean end of stream.

use crate::aliases::new_block_buffer;
use crate::consts::{BLOCK_HEADER_SIZE, BLOCK_SIZE};
use crate::crypto::nonce::Nonce;
use crate::crypto::secretbox::BlockCipher;
use crate::decryptor::read::read_block;
use crate::error::CryptError;
use crate::utils::StreamSummary;
use std::io::{Read, Write};
use tracing::{trace, warn};

/// Open every block of `source` into `destination`.
///
/// Expects the header to be consumed already; `nonce` is the nonce it recorded.
/// Stops at the first failing block: nothing of that block is written, while
/// earlier blocks stay written and must be discarded by the caller.
pub fn decrypt_stream<R, W>(
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
        let n = read_block(source, &mut buf)?;
        if n == 0 {
            break;
        }

        let len = cipher
            .open_in_place(&nonce, &mut buf[..n])
            .inspect_err(|e| {
                if matches!(e, CryptError::Authentication) {
                    warn!(block = summary.blocks, "block failed authentication");
                }
            })?;
        destination.write_all(&buf[BLOCK_HEADER_SIZE..BLOCK_HEADER_SIZE + len])?;
        trace!(block = summary.blocks, len, "opened block");

        nonce.advance();
        summary.blocks += 1;
        summary.plaintext_bytes += len as u64;

        if n < BLOCK_SIZE {
            break;
        }
    }

    Ok(summary)
}
