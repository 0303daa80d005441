//! `sntrup-math` -- core mathematical primitives for Streamlined NTRU Prime.
//!
//! `no_std`, zero-allocation arithmetic over `R3 = F3[x]/(x^p - x - 1)` and
//! `Rq = Fq[x]/(x^p - x - 1)` for the sntrup761 parameter set. Sub-modules
//! cover constant-time masks, divisionless modular reduction, the oblivious
//! sorting network, mixed-radix encoding, fixed wire packings, short
//! polynomial sampling, and the two polynomial rings.
//!
//! Nothing here branches on or indexes by secret data.

#![no_std]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod ct;
pub mod encode;
pub mod pack;
pub mod poly;
pub mod reduce;
pub mod sample;
pub mod sort;

pub use poly::{R3, Rq};

/// Polynomial ring degree (number of coefficients).
pub const P: usize = 761;

/// Field modulus of `Rq`.
pub const Q: i16 = 4591;

/// `(q - 1) / 2`: bound of the centered representatives of `Fq`.
pub const Q12: i16 = (Q - 1) / 2;

/// Number of nonzero coefficients in a short polynomial.
pub const W: usize = 286;

/// Encoded size of a small (ternary) polynomial, four coefficients per byte.
pub const SMALL_BYTES: usize = P.div_ceil(4);

/// Encoded size of an `Rq` element.
pub const RQ_BYTES: usize = 1158;

/// Encoded size of a rounded `Rq` element.
pub const ROUNDED_BYTES: usize = 1007;

/// Radix of a rounded coefficient: the number of multiples of 3 in `Fq`.
pub const ROUNDED_RADIX: u16 = ((Q as u16) + 2) / 3;

const _: () = {
    assert!(SMALL_BYTES == 191);
    assert!(P % 4 == 1);
    assert!(W <= P);
    assert!((Q as usize) < 16384);
    assert!(ROUNDED_RADIX == 1531);
};
