//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format so the algorithm parameters and salt
//! travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

/// Hashes a plaintext password using Argon2id with a random salt.
///
/// # Arguments
/// - `password` - Plaintext password from the registration request
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash (algorithm, params, salt and hash)
/// - `Err(password_hash::Error)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}
