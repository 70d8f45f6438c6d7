//! # Secure-Gate Type Aliases
//!
//! Every secret the library handles lives in a [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrapper (zeroized on drop, redacted `Debug`) or, for the block scratch
//! buffer, in [`zeroize::Zeroizing`].
//!
//! - [`SpanBuffer<N>`] - generic fixed-size secret
//! - [`DataKey`] - 32-byte XSalsa20-Poly1305 body key
//! - [`PasswordString`] - password text
//! - [`BlockBuffer`] - per-call scratch buffer holding one sealed block
//!
//! All secure types require explicit `.expose_secret()` or `.expose_secret_mut()`
//! to reach the data.

use crate::consts::{BLOCK_SIZE, DATA_KEY_SIZE};
use secure_gate::dynamic_alias;
use zeroize::Zeroizing;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

/// Body encryption key produced by [`derive_key`](crate::derive_key).
pub type DataKey = SpanBuffer<DATA_KEY_SIZE>;

dynamic_alias!(PasswordString, String); // secure-gate 0.5 emits `pub type`

/// Scratch buffer for one sealed block (tag + up to 64 KiB of data).
pub type BlockBuffer = Zeroizing<Vec<u8>>;

/// Allocates a zeroed [`BlockBuffer`] of [`BLOCK_SIZE`] bytes.
#[inline]
pub fn new_block_buffer() -> BlockBuffer {
    Zeroizing::new(vec![0u8; BLOCK_SIZE])
}
