//! src/encryptor/encrypt.rs
//! Container encryption: header + sealed blocks

use crate::aliases::DataKey;
use crate::crypto::nonce::Nonce;
use crate::crypto::rng::SecureRandomExt;
use crate::crypto::secretbox::BlockCipher;
use crate::encryptor::stream::encrypt_stream;
use crate::error::CryptError;
use crate::header::{write_header, FileHeader};
use crate::utils::{attribute_io_error, create_output, open_input, TrackedIo};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Encrypt `input` into a new container written to `output`.
///
/// A fresh random initial nonce is drawn for every call, so encrypting the same
/// plaintext twice under the same key yields different containers.
///
/// `output` is not flushed; wrap it in a `BufWriter` and flush it yourself, or use
/// [`encrypt_file`].
///
/// # Errors
///
/// - [`CryptError::Io`] - reading `input` or writing `output` failed
///
/// # Example
///
/// ```
/// use rclone_crypt::{decrypt, derive_key, encrypt};
/// use std::io::Cursor;
///
/// let key = derive_key(b"", b"")?; // all-zero test key
/// let mut container = Vec::new();
/// encrypt(Cursor::new(b"hello"), &mut container, &key)?;
///
/// let mut plain = Vec::new();
/// decrypt(Cursor::new(container), &mut plain, &key)?;
/// assert_eq!(plain, b"hello");
/// # Ok::<(), rclone_crypt::CryptError>(())
/// ```
pub fn encrypt<R, W>(input: R, output: W, key: &DataKey) -> Result<(), CryptError>
where
    R: Read,
    W: Write,
{
    encrypt_with_nonce(input, output, key, Nonce::random()?)
}

/// Encrypt with a caller-chosen initial nonce (deterministic output).
///
/// Used for known-answer tests and reproducible fixtures. Never call this twice
/// with the same `(key, nonce)` for different plaintexts.
pub fn encrypt_with_nonce<R, W>(
    mut input: R,
    mut output: W,
    key: &DataKey,
    nonce: Nonce,
) -> Result<(), CryptError>
where
    R: Read,
    W: Write,
{
    let header = FileHeader::new(nonce);
    write_header(&mut output, &header)?;
    debug!(nonce = %header.nonce, "wrote container header");

    let cipher = BlockCipher::new(key);
    let summary = encrypt_stream(&mut input, &mut output, &cipher, header.nonce)?;
    debug!(
        blocks = summary.blocks,
        bytes = summary.plaintext_bytes,
        "encryption complete"
    );
    Ok(())
}

/// Encrypt the file at `input_path` into a new container at `output_path`.
///
/// The output file is created (or truncated), flushed on success and closed on
/// every exit path. On failure it may hold a partial container and must be
/// discarded.
///
/// # Errors
///
/// - [`CryptError::File`] - either file could not be opened, read, written or flushed
pub fn encrypt_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    key: &DataKey,
) -> Result<(), CryptError> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());

    let mut input = TrackedIo::new(BufReader::new(open_input(input_path)?));
    let mut output = TrackedIo::new(BufWriter::new(create_output(output_path)?));

    encrypt(&mut input, &mut output, key)
        .and_then(|()| output.flush().map_err(CryptError::Io))
        .map_err(|e| attribute_io_error(e, &input, input_path, &output, output_path))
}
