//! Short code derivation and validation utilities.
//!
//! Short codes are the first [`CODE_LENGTH`] hex characters of
//! `SHA-256(url ++ decimal(counter))`. The counter starts at 0 and is bumped
//! by the shortener whenever a candidate is already taken.

use sha2::{Digest, Sha256};

/// Length of a short code in characters.
pub const CODE_LENGTH: usize = 7;

/// Derives the candidate short code for `url` at collision counter `counter`.
///
/// # Examples
///
/// ```
/// use hash_shortener::utils::code_generator::hash_code;
///
/// assert_eq!(hash_code("https://www.example.com/page", 0), "246f633");
/// ```
pub fn hash_code(url: &str, counter: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(counter.to_string().as_bytes());

    let mut code = hex::encode(hasher.finalize());
    code.truncate(CODE_LENGTH);
    code
}

/// Returns true if `code` has the shape of a short code: exactly
/// [`CODE_LENGTH`] ASCII alphanumeric characters.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
