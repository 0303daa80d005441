//! `sntrup-rs` -- Streamlined NTRU Prime key encapsulation, parameter set
//! sntrup761.
//!
//! Keys and ciphertexts are fixed-size byte strings compatible with the
//! published sntrup761 wire format. Decapsulation never fails: a tampered
//! ciphertext yields a pseudorandom shared secret (implicit rejection).
//!
//! ```
//! use rand_chacha::ChaCha20Rng;
//! use rand_core::SeedableRng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let (pk, sk) = sntrup_rs::keypair(&mut rng);
//! let (ct, ss) = sntrup_rs::encapsulate(&pk, &mut rng);
//! assert_eq!(sntrup_rs::decapsulate(&ct, &sk).as_ref(), ss.as_ref());
//! ```

#![deny(unsafe_code)]

mod hash;
pub mod kem;
pub mod params;
pub mod pke;
mod random;
pub mod types;

pub use kem::{decapsulate, encapsulate, keypair, try_encapsulate, try_keypair};
pub use sntrup_math as math;
pub use types::{Ciphertext, PublicKey, SecretKey, SharedSecret};

/// Errors returned by fallible constructors and by entry points that draw
/// from a fallible random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input byte slice has the wrong length for the target type.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
    /// The random source reported a failure.
    #[error("random source failure")]
    RandomSource,
}
