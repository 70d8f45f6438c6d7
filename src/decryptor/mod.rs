// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &key)?` for a full container.
//! Files: `decrypt_file(src_path, dst_path, &key)?`.
//! Helpers: `read_block`, `decrypt_stream` for custom flows that parse the
//! header themselves.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_file};
pub use read::read_block;
pub use stream::decrypt_stream;
