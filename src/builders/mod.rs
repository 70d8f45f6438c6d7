//! # Builders
//!
//! Builder patterns for configuring key derivation.
//!
//! ## Modules
//!
//! - [`scrypt_builder`] - Builder for the container's scrypt key derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API with the format's fixed defaults and the
//! options a caller may legitimately change (currently: the salt).

pub mod scrypt_builder;

pub use scrypt_builder::ScryptBuilder;
