//! Random identifier generation
//!
//! Two flavours of fixed-length identifiers:
//! - digit strings drawn from the operating system CSPRNG, suitable for
//!   verification codes and tokens
//! - alpha strings drawn from the thread-local generator, used for upload
//!   file names and other "unique enough" names
//!
//! The thread-local generator is seeded once from the OS and reseeds itself
//! periodically, so high-frequency callers never share a clock-derived seed.

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Output alphabet of [`random_digits`], indexed by `byte % 10`.
pub const DIGIT_TABLE: &[u8; 10] = b"1234567890";

/// Output alphabet of [`random_string`].
pub const ALPHA_TABLE: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a string of `length` random decimal digits.
///
/// # Panics
///
/// Panics if the operating system random source cannot supply `length`
/// bytes. A broken entropy source is not something callers can recover
/// from; use [`try_random_digits`] to observe the failure instead.
pub fn random_digits(length: usize) -> String {
    match try_random_digits(length) {
        Ok(digits) => digits,
        Err(e) => panic!("{e}"),
    }
}

/// Fallible form of [`random_digits`].
pub fn try_random_digits(length: usize) -> Result<String> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::Randomness(format!("failed to read {length} random bytes: {e}")))?;

    Ok(digits_from_bytes(&bytes))
}

/// Map raw bytes onto [`DIGIT_TABLE`].
fn digits_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| DIGIT_TABLE[usize::from(*b) % DIGIT_TABLE.len()] as char)
        .collect()
}

/// Generate a string of `length` random ASCII letters (`[a-zA-Z]`).
///
/// Not meant for secrets: use [`random_digits`] when the value guards
/// anything.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHA_TABLE[rng.random_range(0..ALPHA_TABLE.len())] as char)
        .collect()
}
