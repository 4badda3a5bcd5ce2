//! Slug allocation for published sites.
//!
//! A slug is a readable prefix derived from the title plus a random suffix:
//! `"My Shop"` becomes something like `my-shop-k3x9q0a`. Uniqueness is
//! probabilistic (36^7 suffixes per prefix); the store's primary key is the
//! final arbiter.

use rand::Rng;

/// Maximum number of characters taken from the title.
pub const PREFIX_MAX_CHARS: usize = 20;

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 7;

/// Upper bound on slug length: prefix + hyphen + suffix.
pub const SLUG_MAX_LEN: usize = PREFIX_MAX_CHARS + 1 + SUFFIX_LEN;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Derive a slug for `title` using `rng` for the suffix.
///
/// Lower-cases the title, turns spaces into hyphens, keeps the first
/// [`PREFIX_MAX_CHARS`] characters, appends `-` and a [`SUFFIX_LEN`]-character
/// suffix, then drops everything outside `[a-z0-9-]`.
pub fn allocate<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    let prefix: String = title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .take(PREFIX_MAX_CHARS)
        .collect();
    let suffix = random_suffix(rng);

    format!("{prefix}-{suffix}")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// [`SUFFIX_LEN`] characters drawn uniformly from `[a-z0-9]`.
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
