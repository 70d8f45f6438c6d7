// src/lib.rs

//! Streaming file encryption in the rclone crypt container format.
//!
//! A container is a 32-byte header (`"RCLONE\0\0"` + random 24-byte nonce)
//! followed by 64 KiB plaintext blocks, each sealed with XSalsa20-Poly1305
//! under a 32-byte key derived from a password with scrypt.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_file};
pub use encryptor::{encrypt, encrypt_file, encrypt_with_nonce};
pub use error::CryptError;

// Key derivation
pub use builders::ScryptBuilder;
pub use crypto::kdf::scrypt::{derive_key, derive_key_into};

// Building blocks for custom flows
pub use aliases::DataKey;
pub use crypto::nonce::Nonce;
pub use crypto::rng::SecureRandomExt;
pub use crypto::secretbox::BlockCipher;
pub use header::{read_header, FileHeader};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
