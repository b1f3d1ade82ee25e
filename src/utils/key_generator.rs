//! Random key generation for public short keys and secret admin keys.
//!
//! Keys are drawn from a 62-symbol alphanumeric alphabet using the system
//! CSPRNG. The secret key doubles as a bearer capability for link
//! administration, so a predictable source is not acceptable here.

/// Alphabet for generated keys: A-Z, a-z, 0-9.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest byte value usable without introducing modulo bias (4 * 62).
const UNBIASED_LIMIT: u8 = 248;

/// Default key length for both public and secret keys.
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Generates a random alphanumeric key of the given length.
///
/// Every character is drawn uniformly from [`ALPHABET`]. Bytes at or above
/// [`UNBIASED_LIMIT`] are rejected and redrawn so the distribution stays
/// uniform across all 62 symbols.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_key(length: usize) -> String {
    let mut key = String::with_capacity(length);
    let mut buffer = [0u8; 64];

    while key.len() < length {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte >= UNBIASED_LIMIT {
                continue;
            }

            key.push(ALPHABET[(byte % 62) as usize] as char);

            if key.len() == length {
                break;
            }
        }
    }

    key
}
