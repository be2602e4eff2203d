//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), which
//! carry their own parameters, so the cost can be raised later without invalidating stored
//! hashes.

use std::sync::LazyLock;

use argon2::{
    password_hash::{self, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

const SALT_LEN: usize = 16;

/// Verified in place of a stored hash when a login names an unknown account
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("shiftboard-unknown-account").ok());

/// Hashes `password` with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt: [u8; SALT_LEN] = rand::random();
    let salt = SaltString::encode_b64(&salt)
        .map_err(|e| Error::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks `password` against a hash produced by [`hash_password`].
///
/// Returns `Err(Error::ParseError)` if the stored hash is malformed or not an Argon2 hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| Error::ParseError(format!("Malformed password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::ParseError(format!("Unusable password hash: {}", e))),
    }
}

/// Verifies `password` against a throwaway hash and discards the result.
///
/// Costs the same as [`verify_password`] on a real account.
pub fn verify_unknown_account(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

#[cfg(test)]
mod tests {
    use argon2::{
        password_hash::SaltString, Algorithm, Argon2, Params, PasswordHasher, Version,
    };

    use super::{hash_password, verify_password, DUMMY_HASH};

    /// Expect the hashed password to verify and any other to fail
    #[test]
    fn verifies_only_matching_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    /// Expect two hashes of the same password to differ by salt
    #[test]
    fn salts_every_hash() {
        assert_ne!(hash_password("secret").unwrap(), hash_password("secret").unwrap());
    }

    /// Expect stored hashes with different cost parameters to still verify
    #[test]
    fn honours_stored_parameters() {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
        let salt = SaltString::encode_b64(&[7u8; 16]).unwrap();
        let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(b"secret", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password("secret", &hash).unwrap());
        assert!(!verify_password("other", &hash).unwrap());
    }

    /// Expect the stand-in hash for unknown accounts to verify without error and never match
    #[test]
    fn unknown_account_hash_is_usable() {
        let hash = DUMMY_HASH.as_deref().unwrap();

        assert!(!verify_password("password", hash).unwrap());
    }

    /// Expect malformed hashes to be rejected with an error
    #[test]
    fn rejects_malformed_hash() {
        assert!(verify_password("secret", "plaintext").is_err());
        assert!(verify_password("secret", "").is_err());
        assert!(verify_password("secret", "sha256$1$AAAA$AAAA").is_err());
    }
}
