//! sntrup761 parameters and wire sizes.

pub use sntrup_hash::HASH_BYTES;
pub use sntrup_math::{P, Q, Q12, ROUNDED_BYTES, RQ_BYTES, SMALL_BYTES, W};

/// Public key: the `Rq` encoding of `h`.
pub const PUBLIC_KEY_BYTES: usize = RQ_BYTES;

/// Secret key: `f`, `1/g` in `R3`, the public key, `rho`, and the public-key
/// hash.
pub const SECRET_KEY_BYTES: usize = 2 * SMALL_BYTES + PUBLIC_KEY_BYTES + SMALL_BYTES + HASH_BYTES;

/// Confirmation tag appended to the rounded ciphertext.
pub const CONFIRM_BYTES: usize = HASH_BYTES;

/// Ciphertext: rounded encoding plus confirmation tag.
pub const CIPHERTEXT_BYTES: usize = ROUNDED_BYTES + CONFIRM_BYTES;

/// Shared secret.
pub const SHARED_SECRET_BYTES: usize = HASH_BYTES;

const _: () = {
    assert!(PUBLIC_KEY_BYTES == 1158);
    assert!(SECRET_KEY_BYTES == 1763);
    assert!(CIPHERTEXT_BYTES == 1039);
    assert!(SHARED_SECRET_BYTES == 32);
    assert!(SMALL_BYTES == 191);
    assert!(ROUNDED_BYTES == 1007);
};
