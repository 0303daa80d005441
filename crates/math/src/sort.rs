//! Oblivious sorting network for 32-bit integers.
//!
//! The sequence of compared index pairs depends only on the length, and each
//! compare-exchange is branch-free, so sorting a secret list reveals nothing
//! about its contents.

/// Branch-free compare-exchange: afterwards `a <= b`.
///
/// Both values are widened to `i64`, where their difference cannot overflow;
/// its sign says whether to swap.
#[inline(always)]
fn minmax(a: i32, b: i32) -> (i32, i32) {
    let mask = ((b as i64 - a as i64) >> 63) as i32;
    let t = mask & (a ^ b);
    (a ^ t, b ^ t)
}

/// Flipping the top bit maps unsigned order onto signed order.
const SIGN_BIT: u32 = 0x8000_0000;

/// Visit the comparator pairs of the network for `n` inputs, in order.
fn network(n: usize, mut cmp: impl FnMut(usize, usize)) {
    if n < 2 {
        return;
    }
    let mut top = 1;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p >= 1 {
        for i in 0..n - p {
            if i & p == 0 {
                cmp(i, i + p);
            }
        }
        let mut q = top;
        while q > p {
            for i in 0..n - q {
                if i & p == 0 {
                    cmp(i + p, i + q);
                }
            }
            q >>= 1;
        }
        p >>= 1;
    }
}

/// Sort `x` ascending as signed integers.
pub fn sort_i32(x: &mut [i32]) {
    network(x.len(), |i, j| {
        (x[i], x[j]) = minmax(x[i], x[j]);
    });
}

/// Sort `x` ascending as unsigned integers, by sorting the sign-flipped
/// values as signed.
pub fn sort_u32(x: &mut [u32]) {
    x.iter_mut().for_each(|v| *v ^= SIGN_BIT);
    network(x.len(), |i, j| {
        let (a, b) = minmax(x[i] as i32, x[j] as i32);
        (x[i], x[j]) = (a as u32, b as u32);
    });
    x.iter_mut().for_each(|v| *v ^= SIGN_BIT);
}
