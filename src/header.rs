//! # Header Parsing
//!
//! Every container starts with a fixed 32-byte header:
//!
//! ```text
//! offset 0 : 8 bytes  magic "RCLONE\0\0"
//! offset 8 : 24 bytes initial nonce
//! ```
//!
//! The header is written exactly once by the encryptor and verified exactly once
//! by the decryptor, before any block is touched.

use crate::consts::{FILE_HEADER_SIZE, FILE_MAGIC, FILE_MAGIC_SIZE, FILE_NONCE_SIZE};
use crate::crypto::nonce::Nonce;
use crate::error::CryptError;
use crate::utils::read_full;
use std::io::{Read, Write};

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Nonce of block 0.
    pub nonce: Nonce,
}

impl FileHeader {
    pub const LEN: usize = FILE_HEADER_SIZE;

    #[inline(always)]
    pub const fn new(nonce: Nonce) -> Self {
        Self { nonce }
    }

    /// Serialized form: magic followed by the nonce.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[..FILE_MAGIC_SIZE].copy_from_slice(FILE_MAGIC);
        out[FILE_MAGIC_SIZE..].copy_from_slice(self.nonce.as_bytes());
        out
    }
}

/// Write the magic tag and `header.nonce`.
#[inline]
pub fn write_header<W: Write + ?Sized>(writer: &mut W, header: &FileHeader) -> Result<(), CryptError> {
    writer.write_all(&header.to_bytes())?;
    Ok(())
}

/// Read and validate a container header.
///
/// Reads exactly [`FILE_HEADER_SIZE`] bytes on success, leaving `reader`
/// positioned at block 0. Nothing is decrypted, so this is also the cheap way
/// to check whether a file is a container at all.
///
/// # Errors
///
/// - [`CryptError::Format`] - fewer than 8 bytes, wrong magic, or a short nonce
/// - [`CryptError::Io`] - the reader failed
///
/// # Example
///
/// ```
/// use rclone_crypt::read_header;
/// use std::io::Cursor;
///
/// let mut bytes = b"RCLONE\x00\x00".to_vec();
/// bytes.extend_from_slice(&[0x11; 24]);
/// let header = read_header(&mut Cursor::new(bytes))?;
/// assert_eq!(header.nonce.as_bytes(), &[0x11; 24]);
///
/// assert!(read_header(&mut Cursor::new(b"NOTRCLONE")).is_err());
/// # Ok::<(), rclone_crypt::CryptError>(())
/// ```
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<FileHeader, CryptError> {
    let mut magic = [0u8; FILE_MAGIC_SIZE];
    let n = read_full(reader, &mut magic)?;
    if n < FILE_MAGIC_SIZE {
        return Err(CryptError::Format(format!(
            "truncated header: {n} of {FILE_MAGIC_SIZE} magic bytes"
        )));
    }
    if &magic != FILE_MAGIC {
        return Err(CryptError::Format(
            "not a recognized container: invalid magic".into(),
        ));
    }

    let mut nonce = [0u8; FILE_NONCE_SIZE];
    let n = read_full(reader, &mut nonce)?;
    if n < FILE_NONCE_SIZE {
        return Err(CryptError::Format(format!(
            "truncated header: {n} of {FILE_NONCE_SIZE} nonce bytes"
        )));
    }

    Ok(FileHeader::new(Nonce::from_bytes(nonce)))
}
