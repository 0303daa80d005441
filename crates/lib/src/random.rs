//! Sampling from the caller's random source.
//!
//! Every 32-bit sample is its own 4-byte request. Deterministic generators
//! used for known-answer tests rekey after each request, so the request
//! granularity is part of the output.

use rand_core::TryCryptoRng;
use zeroize::Zeroize;

use crate::{
    math::R3,
    params::{P, SMALL_BYTES},
};

/// One uniform 32-bit word from a 4-byte request.
pub(crate) fn urandom32<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<u32, R::Error> {
    let mut c = [0u8; 4];
    rng.try_fill_bytes(&mut c)?;
    // Combined by addition.
    let out = (c[0] as u32)
        .wrapping_add((c[1] as u32) << 8)
        .wrapping_add((c[2] as u32) << 16)
        .wrapping_add((c[3] as u32) << 24);
    c.zeroize();
    Ok(out)
}

fn words<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<[u32; P], R::Error> {
    let mut out = [0u32; P];
    for w in &mut out {
        *w = urandom32(rng)?;
    }
    Ok(out)
}

/// Uniform short polynomial (weight exactly `W`).
pub(crate) fn short_random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<R3, R::Error> {
    let mut list = words(rng)?;
    let out = R3::short_from_list(&list);
    list.zeroize();
    Ok(out)
}

/// Uniform ternary polynomial.
pub(crate) fn small_random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<R3, R::Error> {
    let mut list = words(rng)?;
    let out = R3::small_from_list(&list);
    list.zeroize();
    Ok(out)
}

/// Implicit-rejection seed, drawn as a single request.
pub(crate) fn rho<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<[u8; SMALL_BYTES], R::Error> {
    let mut out = [0u8; SMALL_BYTES];
    rng.try_fill_bytes(&mut out)?;
    Ok(out)
}
