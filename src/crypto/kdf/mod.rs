//! # Key Derivation Functions (KDF)
//!
//! Password → [`DataKey`](crate::aliases::DataKey) conversion.
//!
//! - [`scrypt`] - scrypt (N = 16384, r = 8, p = 1), the only KDF the format uses
//!
//! For most use cases, call [`derive_key`](crate::derive_key) or the
//! [`ScryptBuilder`](crate::builders::ScryptBuilder).

pub mod scrypt;
