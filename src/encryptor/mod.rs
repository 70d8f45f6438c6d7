// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &key)?` for a full container.
//! Files: `encrypt_file(src_path, dst_path, &key)?`.
//! Testing: `encrypt_with_nonce(...)` pins the initial nonce.

pub(crate) mod encrypt;
pub(crate) mod stream;
pub(crate) mod write;

pub use encrypt::{encrypt, encrypt_file, encrypt_with_nonce};
pub use stream::encrypt_stream;
pub use write::write_block;
