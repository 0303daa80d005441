//! Ternary polynomial sampling from uniform 32-bit words.

use zeroize::Zeroize;

use crate::{P, W, sort::sort_u32};

/// Short polynomial: exactly `W` coefficients in `{-1, 1}`, the rest zero,
/// uniformly placed.
///
/// The low two bits of each word are overwritten so that the first `W`
/// words end in `00` or `10` (trits `-1` and `1`) and the rest end in `01`
/// (trit 0). The upper 30 bits act as random sort keys, so the oblivious
/// sort moves the tags into uniform positions.
pub fn short_from_list(out: &mut [i8; P], words: &[u32; P]) {
    let mut list = *words;
    for x in &mut list[..W] {
        *x &= !1;
    }
    for x in &mut list[W..] {
        *x = (*x & !2) | 1;
    }
    sort_u32(&mut list);
    for (c, &x) in out.iter_mut().zip(list.iter()) {
        *c = (x & 3) as i8 - 1;
    }
    list.zeroize();
}

/// Unrestricted ternary polynomial: each coefficient maps the low 30 bits of
/// its word onto `{-1, 0, 1}` by scaling, without division.
pub fn small_from_list(out: &mut [i8; P], words: &[u32; P]) {
    for (c, &x) in out.iter_mut().zip(words.iter()) {
        *c = (((x & 0x3fff_ffff) * 3) >> 30) as i8 - 1;
    }
}
