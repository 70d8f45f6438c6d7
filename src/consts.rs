//! # Constants
//!
//! Container layout and key-derivation parameters. Every value here is part of
//! the on-disk format: changing any of them breaks compatibility with existing
//! containers.

/// Magic tag at offset 0 of every container.
pub const FILE_MAGIC: &[u8; FILE_MAGIC_SIZE] = b"RCLONE\x00\x00";

/// Length of [`FILE_MAGIC`].
pub const FILE_MAGIC_SIZE: usize = 8;

/// Length of the initial nonce stored right after the magic.
pub const FILE_NONCE_SIZE: usize = 24;

/// Total header length: magic + nonce.
pub const FILE_HEADER_SIZE: usize = FILE_MAGIC_SIZE + FILE_NONCE_SIZE;

/// Poly1305 tag prefixed to every block.
pub const BLOCK_HEADER_SIZE: usize = 16;

/// Maximum plaintext carried by one block (64 KiB).
pub const BLOCK_DATA_SIZE: usize = 64 * 1024;

/// Maximum sealed block length: tag + full plaintext chunk.
pub const BLOCK_SIZE: usize = BLOCK_HEADER_SIZE + BLOCK_DATA_SIZE;

/// Data key length (XSalsa20-Poly1305 key).
pub const DATA_KEY_SIZE: usize = 32;

/// scrypt CPU/memory cost as log2(N); N = 16384.
pub const SCRYPT_LOG_N: u8 = 14;

/// scrypt block-size parameter.
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism parameter.
pub const SCRYPT_P: u32 = 1;

/// Salt substituted when the caller supplies an empty one.
///
/// This is a fixed value shared by every container encrypted without an
/// explicit salt. It only makes precomputed attacks slightly harder than no salt
/// at all; it is **not** a substitute for a random per-file salt. Kept
/// byte-for-byte for compatibility with existing containers.
pub const DEFAULT_SALT: [u8; 16] = [
    0xA8, 0x0D, 0xF4, 0x3A, 0x8F, 0xBD, 0x03, 0x08, 0xA7, 0xCA, 0xB8, 0x3E, 0x58, 0x1F, 0x86, 0xB1,
];
