//! Password hashing built around Argon2id.
//! Parameters are pinned in one place so every stored hash carries the same
//! work factor.

use argon2::password_hash::SaltString;
use argon2::{
    password_hash, Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use rand::rngs::OsRng;

// Fixed work factor; changing these only affects newly stored hashes.
const MEMORY_COST_KIB: u32 = 19 * 1024;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

fn argon2_config() -> Result<Argon2<'static>, password_hash::Error> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a plaintext password and returns the PHC string.
/// The result embeds the salt and parameters, so it can be verified later.
pub(super) fn hash_password(plaintext: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = argon2_config()?;
    let password_hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string();
    Ok(password_hash)
}

/// Verifies a plaintext password against a stored hash.
/// A malformed stored hash verifies as `false` rather than erroring.
pub(super) fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };

    match argon2_config() {
        Ok(argon2) => argon2
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hashes_and_verifies_passwords() {
        let hash = hash_password("secret1").expect("hashing should succeed");
        assert!(verify_password("secret1", &hash));
        assert!(!verify_password("other12", &hash));
    }

    #[test]
    fn hash_never_contains_the_plaintext() {
        let hash = hash_password("secret1").expect("hashing should succeed");
        assert!(!hash.contains("secret1"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn malformed_stored_hash_fails_closed() {
        assert!(!verify_password("secret1", "not-a-phc-string"));
        assert!(!verify_password("secret1", ""));
    }
}
