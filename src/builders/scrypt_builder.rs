//! src/builders/scrypt_builder.rs
//! scrypt key derivation builder

use crate::aliases::DataKey;
use crate::consts::{DATA_KEY_SIZE, DEFAULT_SALT};
use crate::crypto::kdf::scrypt::derive_key_into;
use crate::error::CryptError;

/// scrypt key derivation builder.
///
/// Work factors are fixed by the container format (N = 16384, r = 8, p = 1);
/// only the salt is configurable. Without [`with_salt`](Self::with_salt) the
/// built-in [`DEFAULT_SALT`] is used.
///
/// # Thread Safety
///
/// This type is `Send + Sync` and holds no secrets.
///
/// # Example
///
/// ```
/// use rclone_crypt::builders::ScryptBuilder;
///
/// let key = ScryptBuilder::new().with_salt(b"pepper").derive(b"")?;
/// assert_eq!(key.expose_secret(), &[0u8; 32]); // empty password → zero key
/// # Ok::<(), rclone_crypt::CryptError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScryptBuilder {
    salt: Vec<u8>,
}

impl ScryptBuilder {
    /// Builder using the default salt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom salt. An empty salt falls back to [`DEFAULT_SALT`].
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = salt.as_ref().to_vec();
        self
    }

    /// The salt scrypt will actually run with.
    #[must_use]
    pub fn effective_salt(&self) -> &[u8] {
        if self.salt.is_empty() {
            &DEFAULT_SALT
        } else {
            &self.salt
        }
    }

    /// `true` when no custom salt was set and the shared default applies.
    #[must_use]
    pub fn uses_default_salt(&self) -> bool {
        self.salt.is_empty()
    }

    /// Derive into a caller-provided secure buffer.
    #[inline]
    pub fn derive_into(&self, password: &[u8], out_key: &mut DataKey) -> Result<(), CryptError> {
        derive_key_into(password, &self.salt, out_key)
    }

    /// Derive and return a fresh key.
    #[inline]
    pub fn derive(&self, password: &[u8]) -> Result<DataKey, CryptError> {
        let mut key = DataKey::new([0u8; DATA_KEY_SIZE]);
        self.derive_into(password, &mut key)?;
        Ok(key)
    }
}
