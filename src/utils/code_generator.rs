//! Random short code generation.

use rand::Rng;

/// Symbols a generated short code is drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code of `length` characters over [`ALPHABET`].
///
/// Eight characters give 62^8 (about 2.2 * 10^14) combinations, so
/// collisions are rare but still possible; callers must check availability.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
