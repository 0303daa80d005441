//! KEM-level hash adapters over [`sntrup_hash`].

use sntrup_hash::{
    DOMAIN_CONFIRM, DOMAIN_PLAINTEXT, DOMAIN_PUBLIC_KEY, HASH_BYTES, hash_prefix,
    hash_prefix_parts,
};
use zeroize::Zeroize;

use crate::params::{CIPHERTEXT_BYTES, PUBLIC_KEY_BYTES, SMALL_BYTES};

/// Public-key digest cached in the secret key.
pub(crate) fn hash_cache(pk: &[u8; PUBLIC_KEY_BYTES]) -> [u8; HASH_BYTES] {
    hash_prefix(DOMAIN_PUBLIC_KEY, pk)
}

/// `H2(H3(r_enc) || cache)`.
pub(crate) fn hash_confirm(
    r_enc: &[u8; SMALL_BYTES], cache: &[u8; HASH_BYTES],
) -> [u8; HASH_BYTES] {
    let mut x = hash_prefix(DOMAIN_PLAINTEXT, r_enc);
    let out = hash_prefix_parts(DOMAIN_CONFIRM, &[&x[..], &cache[..]]);
    x.zeroize();
    out
}

/// `Hb(H3(r_enc) || ct)`; `b` is [`DOMAIN_SESSION`] on acceptance and
/// [`DOMAIN_REJECT`] on rejection.
///
/// [`DOMAIN_SESSION`]: sntrup_hash::DOMAIN_SESSION
/// [`DOMAIN_REJECT`]: sntrup_hash::DOMAIN_REJECT
pub(crate) fn hash_session(
    b: u8, r_enc: &[u8; SMALL_BYTES], ct: &[u8; CIPHERTEXT_BYTES],
) -> [u8; HASH_BYTES] {
    let mut x = hash_prefix(DOMAIN_PLAINTEXT, r_enc);
    let out = hash_prefix_parts(b, &[&x[..], &ct[..]]);
    x.zeroize();
    out
}
