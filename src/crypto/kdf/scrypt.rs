//! src/crypto/kdf/scrypt.rs

use crate::aliases::DataKey;
use crate::consts::{DATA_KEY_SIZE, DEFAULT_SALT, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use crate::error::CryptError;

use ::scrypt::{scrypt, Params};

/// Derive the 32-byte body key from `password` and `salt`.
///
/// - Empty `password` → all-zero key. This is a fixed, **insecure** key kept for
///   reproducible tests and compatibility; never use it to protect real data.
/// - Empty `salt` → [`DEFAULT_SALT`] is used instead (weak fallback, see its docs).
/// - Otherwise scrypt(N = 16384, r = 8, p = 1) with a 32-byte output.
///
/// # Errors
///
/// [`CryptError::KeyDerivation`] if scrypt rejects the parameters or output length,
/// which cannot happen with the fixed parameters above.
#[inline]
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<DataKey, CryptError> {
    let mut key = DataKey::new([0u8; DATA_KEY_SIZE]);
    derive_key_into(password, salt, &mut key)?;
    Ok(key)
}

/// Derive the body key directly into a caller-provided secure buffer.
#[inline]
pub fn derive_key_into(
    password: &[u8],
    salt: &[u8],
    out_key: &mut DataKey,
) -> Result<(), CryptError> {
    if password.is_empty() {
        out_key.expose_secret_mut().fill(0);
        return Ok(());
    }

    let salt = if salt.is_empty() { &DEFAULT_SALT[..] } else { salt };

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, out_key.expose_secret().len())
        .map_err(|e| CryptError::KeyDerivation(format!("invalid scrypt parameters: {e}")))?;

    scrypt(password, salt, &params, out_key.expose_secret_mut())
        .map_err(|e| CryptError::KeyDerivation(format!("scrypt failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_gives_zero_key() {
        for salt in [&b""[..], b"salt", &DEFAULT_SALT] {
            let key = derive_key(b"", salt).unwrap();
            assert_eq!(key.expose_secret(), &[0u8; 32]);
        }
    }

    #[test]
    fn empty_salt_means_default_salt() {
        let a = derive_key(b"hunter2", b"").unwrap();
        let b = derive_key(b"hunter2", &DEFAULT_SALT).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn into_overwrites_previous_contents() {
        let mut key = DataKey::new([0xEE; 32]);
        derive_key_into(b"", b"", &mut key).unwrap();
        assert_eq!(key.expose_secret(), &[0u8; 32]);
    }
}
