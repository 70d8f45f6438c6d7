//! src/decryptor/decrypt.rs
//! Container decryption: header check + opened blocks

use crate::aliases::DataKey;
use crate::crypto::secretbox::BlockCipher;
use crate::decryptor::stream::decrypt_stream;
use crate::error::CryptError;
use crate::header::read_header;
use crate::utils::{attribute_io_error, create_output, open_input, TrackedIo};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Decrypt the container read from `input` into `output`.
///
/// The header is verified before any block is processed. Every block is
/// authenticated before its plaintext is written.
///
/// # Errors
///
/// - [`CryptError::Format`] - not a container, or truncated header/block
/// - [`CryptError::Authentication`] - wrong key, or the container was modified
/// - [`CryptError::Io`] - reading `input` or writing `output` failed
///
/// On error, whatever was already written to `output` is invalid.
pub fn decrypt<R, W>(mut input: R, mut output: W, key: &DataKey) -> Result<(), CryptError>
where
    R: Read,
    W: Write,
{
    let header = read_header(&mut input)?;
    debug!(nonce = %header.nonce, "verified container header");

    let cipher = BlockCipher::new(key);
    let summary = decrypt_stream(&mut input, &mut output, &cipher, header.nonce)?;
    debug!(
        blocks = summary.blocks,
        bytes = summary.plaintext_bytes,
        "decryption complete"
    );
    Ok(())
}

/// Decrypt the container at `input_path` into `output_path`.
///
/// The output file is created (or truncated) before the header is checked. If
/// decryption fails the partial output is left on disk and must be discarded.
///
/// # Errors
///
/// As [`decrypt`], with I/O failures reported as [`CryptError::File`] naming the
/// offending path.
pub fn decrypt_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    key: &DataKey,
) -> Result<(), CryptError> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());

    let mut input = TrackedIo::new(BufReader::new(open_input(input_path)?));
    let mut output = TrackedIo::new(BufWriter::new(create_output(output_path)?));

    decrypt(&mut input, &mut output, key)
        .and_then(|()| output.flush().map_err(CryptError::Io))
        .map_err(|e| attribute_io_error(e, &input, input_path, &output, output_path))
}
