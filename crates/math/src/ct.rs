//! Constant-time masks and selection over ring coefficients. No
//! secret-dependent branching.
//!
//! A *mask* is an integer that is either `0` or all-ones (`-1`). Every helper
//! here derives or consumes masks with shifts and bitwise operations only.

/// `-1` if `x != 0`, else `0`.
#[inline]
#[must_use]
pub const fn nonzero_mask(x: i16) -> i16 {
    let v = (x as u16) as u32;
    // 0 stays 0; 1..=65535 wraps into the top half, so bit 31 is set.
    let v = v.wrapping_neg() >> 31;
    (v as i16).wrapping_neg()
}

/// `-1` if `x < 0`, else `0`.
#[inline]
#[must_use]
pub const fn negative_mask(x: i16) -> i16 {
    let u = (x as u16) >> 15;
    (u as i16).wrapping_neg()
}

/// `a` where `mask == -1`, `b` where `mask == 0`.
#[inline]
#[must_use]
pub const fn select_i8(mask: i16, a: i8, b: i8) -> i8 {
    b ^ ((mask as i8) & (a ^ b))
}

/// Swap `a[i]` and `b[i]` for every `i` when `mask == -1`; no-op when `0`.
#[inline]
pub fn cswap_i8(a: &mut [i8], b: &mut [i8], mask: i16) {
    debug_assert_eq!(a.len(), b.len());
    let m = mask as i8;
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let t = m & (*x ^ *y);
        *x ^= t;
        *y ^= t;
    }
}

/// Swap `a[i]` and `b[i]` for every `i` when `mask == -1`; no-op when `0`.
#[inline]
pub fn cswap_i16(a: &mut [i16], b: &mut [i16], mask: i16) {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let t = mask & (*x ^ *y);
        *x ^= t;
        *y ^= t;
    }
}
