// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::error::CryptError;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Adds one to `bytes` read as a little-endian unsigned integer, wrapping on
/// overflow (same semantics as libsodium's `sodium_increment`).
#[inline(always)]
pub fn increment_le(bytes: &mut [u8]) {
    let mut i = 0;
    while i < bytes.len() {
        let (sum, carry) = bytes[i].overflowing_add(1);
        bytes[i] = sum;
        if !carry {
            return;
        }
        i += 1;
    }
}

/// Reads until `buf` is full or the reader reports end of stream.
///
/// Returns the number of bytes read; anything below `buf.len()` means EOF was
/// reached. Retries on [`io::ErrorKind::Interrupted`] like `read_exact` does.
#[inline]
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Stream wrapper that remembers whether any read/write/flush on it failed.
///
/// The file helpers use it to tell which of the two files an I/O error came
/// from, so the error can name the right path.
pub(crate) struct TrackedIo<T> {
    inner: T,
    failed: bool,
}

impl<T> TrackedIo<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    pub(crate) fn failed(&self) -> bool {
        self.failed
    }

    #[inline(always)]
    fn track<U>(&mut self, result: io::Result<U>) -> io::Result<U> {
        if result.is_err() {
            self.failed = true;
        }
        result
    }
}

impl<T: Read> Read for TrackedIo<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        self.track(result)
    }
}

impl<T: Write> Write for TrackedIo<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.track(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.track(result)
    }
}

/// Opens `path` for reading, reporting failures with the path attached.
pub(crate) fn open_input(path: &Path) -> Result<File, CryptError> {
    File::open(path).map_err(|source| CryptError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates (truncates) `path` for writing, reporting failures with the path attached.
pub(crate) fn create_output(path: &Path) -> Result<File, CryptError> {
    File::create(path).map_err(|source| CryptError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Attaches the path of whichever stream failed to a bare I/O error.
pub(crate) fn attribute_io_error<R, W>(
    err: CryptError,
    input: &TrackedIo<R>,
    input_path: &Path,
    output: &TrackedIo<W>,
    output_path: &Path,
) -> CryptError {
    if input.failed() {
        err.with_path(input_path)
    } else if output.failed() {
        err.with_path(output_path)
    } else {
        err
    }
}

/// What a finished block loop processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Blocks sealed or opened.
    pub blocks: u64,
    /// Plaintext bytes consumed (encrypt) or produced (decrypt).
    pub plaintext_bytes: u64,
}
