//! SHA-512 truncated to 256 bits, prefixed with a domain byte.

use sha2::{Digest, Sha512};

use crate::HASH_BYTES;

#[inline]
fn truncate(digest: &[u8]) -> [u8; HASH_BYTES] {
    let mut out = [0u8; HASH_BYTES];
    out.copy_from_slice(&digest[..HASH_BYTES]);
    out
}

/// `Hash_b(input) = SHA-512(b || input)[..32]`.
#[inline]
#[must_use]
pub fn hash_prefix(b: u8, input: impl AsRef<[u8]>) -> [u8; HASH_BYTES] {
    let digest = Sha512::new().chain_update([b]).chain_update(input).finalize();
    truncate(&digest)
}

/// `Hash_b(parts[0] || parts[1] || ...)` without materialising the
/// concatenation.
#[must_use]
pub fn hash_prefix_parts(b: u8, parts: &[&[u8]]) -> [u8; HASH_BYTES] {
    let mut h = Sha512::new();
    h.update([b]);
    for part in parts {
        h.update(part);
    }
    truncate(&h.finalize())
}
