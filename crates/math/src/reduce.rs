//! Divisionless modular reduction for small moduli (`0 < m < 16384`), and
//! the centered `F3` / `Fq` representatives built on it.
//!
//! A hardware divide takes time depending on the dividend. Here the only
//! division is `2^31 / m`, so runtime depends on the modulus alone; callers
//! must only vary `m` across public boundaries.

use crate::{Q, Q12};

/// Unsigned divmod by a 14-bit modulus: returns `(x / m, x % m)`.
///
/// Uses the reciprocal `v = floor(2^31 / m)` and two multiply-shift
/// correction rounds, then a final masked fix-up.
#[inline]
#[must_use]
pub const fn divmod_u14(x: u32, m: u16) -> (u32, u16) {
    debug_assert!(m > 0 && m < 16384);
    let m32 = m as u32;
    let v = 0x8000_0000u32 / m32;

    let mut x = x;
    let mut q = 0u32;

    // v * m is within m of 2^31, so one round leaves x below 3m.
    let qpart = ((x as u64 * v as u64) >> 31) as u32;
    x = x.wrapping_sub(qpart.wrapping_mul(m32));
    q = q.wrapping_add(qpart);

    // x <= m from here on.
    let qpart = ((x as u64 * v as u64) >> 31) as u32;
    x = x.wrapping_sub(qpart.wrapping_mul(m32));
    q = q.wrapping_add(qpart);

    x = x.wrapping_sub(m32);
    q = q.wrapping_add(1);
    let mask = (x >> 31).wrapping_neg();
    x = x.wrapping_add(mask & m32);
    q = q.wrapping_add(mask);

    (q, x as u16)
}

/// `x mod m` for unsigned `x`.
#[inline]
#[must_use]
pub const fn mod_u14(x: u32, m: u16) -> u16 {
    divmod_u14(x, m).1
}

/// Signed divmod by a 14-bit modulus: floor quotient and non-negative
/// remainder in `[0, m)`.
///
/// Biases `x` by `2^31` into the unsigned domain, then removes the bias by
/// subtracting the quotient and remainder of `2^31` itself.
#[inline]
#[must_use]
pub const fn divmod_i32_u14(x: i32, m: u16) -> (i32, u16) {
    let (uq, ur) = divmod_u14(0x8000_0000u32.wrapping_add(x as u32), m);
    let (uq2, ur2) = divmod_u14(0x8000_0000, m);
    let mut ur = ur.wrapping_sub(ur2);
    let mut uq = uq.wrapping_sub(uq2);
    let mask = ((ur >> 15) as u32).wrapping_neg();
    ur = ur.wrapping_add((mask as u16) & m);
    uq = uq.wrapping_add(mask);
    (uq as i32, ur)
}

/// `x mod m` in `[0, m)` for signed `x`.
#[inline]
#[must_use]
pub const fn mod_i32_u14(x: i32, m: u16) -> u16 {
    divmod_i32_u14(x, m).1
}

/// Centered reduction mod 3 into `{-1, 0, 1}`.
///
/// `x` must not be close to the top of `i16`.
#[inline]
#[must_use]
pub const fn f3_freeze(x: i16) -> i8 {
    mod_i32_u14(x as i32 + 1, 3) as i8 - 1
}

/// Centered reduction mod q into `[-(q-1)/2, (q-1)/2]`.
///
/// `x` must not be close to the top of `i32`.
#[inline]
#[must_use]
pub const fn fq_freeze(x: i32) -> i16 {
    mod_i32_u14(x + Q12 as i32, Q as u16) as i16 - Q12
}

/// Multiplicative inverse in `Fq` as `a^(q-2)`, by `q - 3` fixed
/// multiplications regardless of `a`. Returns 0 for `a = 0`.
#[must_use]
pub const fn fq_recip(a: i16) -> i16 {
    let mut ai = a;
    let mut i = 1;
    while i < Q - 2 {
        ai = fq_freeze(a as i32 * ai as i32);
        i += 1;
    }
    ai
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::{RngCore, SeedableRng};

    #[test]
    fn divmod_u14_matches_hardware_division() {
        let mut rng = ChaCha20Rng::seed_from_u64(12345);
        for m in [1u16, 2, 3, 255, 256, 1531, 4591, 16383] {
            for x in [0u32, 1, m as u32 - 1, m as u32, u32::MAX, 0x8000_0000] {
                assert_eq!(divmod_u14(x, m), (x / m as u32, (x % m as u32) as u16));
            }
            for _ in 0..2000 {
                let x = rng.next_u32();
                assert_eq!(divmod_u14(x, m), (x / m as u32, (x % m as u32) as u16));
            }
        }
    }

    #[test]
    fn divmod_i32_u14_is_floor_division() {
        let mut rng = ChaCha20Rng::seed_from_u64(22222);
        for m in [3u16, 1531, 4591] {
            for _ in 0..2000 {
                let x = rng.next_u32() as i32;
                let (q, r) = divmod_i32_u14(x, m);
                assert_eq!(q, x.div_euclid(m as i32));
                assert_eq!(r as i32, x.rem_euclid(m as i32));
            }
            let (q, r) = divmod_i32_u14(i32::MIN, m);
            assert_eq!(q, i32::MIN.div_euclid(m as i32));
            assert_eq!(r as i32, i32::MIN.rem_euclid(m as i32));
        }
    }

    #[test]
    fn f3_freeze_centered() {
        for x in -3000i16..3000 {
            let r = f3_freeze(x);
            assert!((-1..=1).contains(&r));
            assert_eq!((x as i32 - r as i32).rem_euclid(3), 0);
        }
    }

    #[test]
    fn fq_freeze_centered() {
        for x in [-10_000_000i32, -4591, -2296, -2295, 0, 2295, 2296, 4591, 10_000_000] {
            let r = fq_freeze(x);
            assert!((-Q12..=Q12).contains(&r), "{x} -> {r}");
            assert_eq!((x - r as i32).rem_euclid(Q as i32), 0);
        }
    }

    #[test]
    fn fq_recip_inverts() {
        for a in [1i16, -1, 2, 3, 1234, -2295, 2295] {
            let inv = fq_recip(a);
            assert_eq!(fq_freeze(a as i32 * inv as i32), 1, "a = {a}");
        }
        assert_eq!(fq_recip(0), 0);
    }
}
