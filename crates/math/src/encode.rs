//! Mixed-radix encoding of integer sequences.
//!
//! Position `i` holds a value in `[0, m[i])` with `1 <= m[i] < 16384`.
//! Adjacent positions are merged pairwise into a single radix `m[i]*m[i+1]`,
//! low bytes are flushed while the merged radix is at least 2^14, and the
//! halved sequence is encoded the same way until one value remains. The
//! output is within a few bytes of `sum(log256(m[i]))`.
//!
//! The moduli are public: control flow here depends on `m` only, never on the
//! values being encoded.

use crate::reduce::{divmod_u14, mod_u14};

/// Merged radices at or above this are flushed a byte at a time.
const FLUSH: u32 = 16384;

/// Pairwise halving of `N <= usize::MAX` positions ends within this many levels.
const MAX_LEVELS: usize = usize::BITS as usize;

/// Bytes flushed from a pair whose merged radix is `m`.
#[inline]
const fn pair_bytes(m: u32) -> usize {
    if m > 256 * (FLUSH - 1) {
        2
    } else if m >= FLUSH {
        1
    } else {
        0
    }
}

/// Bytes holding the last remaining value, of radix `m`.
#[inline]
const fn tail_bytes(m: u16) -> usize {
    if m == 1 {
        0
    } else if m <= 256 {
        1
    } else {
        2
    }
}

/// Replace the first `n` radices of `m` with those of the next level and
/// return its length.
const fn next_level(m: &mut [u16], n: usize) -> usize {
    let mut i = 0;
    while i + 1 < n {
        let mm = m[i] as u32 * m[i + 1] as u32;
        m[i / 2] = match pair_bytes(mm) {
            2 => (((mm + 255) >> 8) + 255) >> 8,
            1 => (mm + 255) >> 8,
            _ => mm,
        } as u16;
        i += 2;
    }
    if i < n {
        m[i / 2] = m[i];
    }
    n.div_ceil(2)
}

/// Bytes flushed by the pairs of one level.
const fn level_bytes(m: &[u16], n: usize) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i + 1 < n {
        total += pair_bytes(m[i] as u32 * m[i + 1] as u32);
        i += 2;
    }
    total
}

/// Length of [`encode`]'s output for the radices `m`.
#[must_use]
pub const fn encoded_len<const N: usize>(m: &[u16; N]) -> usize {
    if N == 0 {
        return 0;
    }
    let mut mk = *m;
    let mut n = N;
    let mut total = 0;
    while n > 1 {
        total += level_bytes(&mk, n);
        n = next_level(&mut mk, n);
    }
    total + tail_bytes(mk[0])
}

/// Encode `r` under radices `m` into exactly `encoded_len(m)` bytes.
///
/// # Panics
///
/// If `out.len() != encoded_len(m)`.
pub fn encode<const N: usize>(out: &mut [u8], r: &[u16; N], m: &[u16; N]) {
    assert_eq!(out.len(), encoded_len(m), "encode: output length");
    if N == 0 {
        return;
    }
    let mut r = *r;
    let mut m = *m;
    let mut pos = 0;
    let mut n = N;

    while n > 1 {
        let mut i = 0;
        while i + 1 < n {
            let m0 = m[i] as u32;
            let mut x = r[i] as u32 + r[i + 1] as u32 * m0;
            let mut mm = m[i + 1] as u32 * m0;
            while mm >= FLUSH {
                out[pos] = x as u8;
                pos += 1;
                x >>= 8;
                mm = (mm + 255) >> 8;
            }
            r[i / 2] = x as u16;
            m[i / 2] = mm as u16;
            i += 2;
        }
        if i < n {
            r[i / 2] = r[i];
            m[i / 2] = m[i];
        }
        n = n.div_ceil(2);
    }

    let mut x = r[0];
    let mut mm = m[0] as u32;
    while mm > 1 {
        out[pos] = x as u8;
        pos += 1;
        x >>= 8;
        mm = (mm + 255) >> 8;
    }
    debug_assert_eq!(pos, out.len());
}

/// Decode `encoded_len(m)` bytes into values `out[i] in [0, m[i])`.
///
/// Every byte string decodes to some in-range sequence; a string that
/// [`encode`] never produces yields values that re-encode differently.
///
/// # Panics
///
/// If `s.len() != encoded_len(m)`.
pub fn decode<const N: usize>(out: &mut [u16; N], s: &[u8], m: &[u16; N]) {
    assert_eq!(s.len(), encoded_len(m), "decode: input length");
    if N == 0 {
        return;
    }

    // Bytes are laid out level by level; record where each level ends.
    let mut ends = [0usize; MAX_LEVELS];
    let mut depth = 0;
    let mut mk = *m;
    let mut n = N;
    let mut pos = 0;
    while n > 1 {
        pos += level_bytes(&mk, n);
        ends[depth] = pos;
        depth += 1;
        n = next_level(&mut mk, n);
    }

    out[0] = match tail_bytes(mk[0]) {
        0 => 0,
        1 => mod_u14(s[pos] as u32, mk[0]),
        _ => mod_u14(s[pos] as u32 | (s[pos + 1] as u32) << 8, mk[0]),
    };

    // Expand level k+1 (held in out[..ceil(n/2)]) into level k in place,
    // highest index first so no unread value is overwritten.
    for k in (0..depth).rev() {
        let mut mk = *m;
        let mut n = N;
        for _ in 0..k {
            n = next_level(&mut mk, n);
        }

        if n % 2 == 1 {
            out[n - 1] = out[(n - 1) / 2];
        }
        let mut pos = ends[k];
        for j in (0..n / 2).rev() {
            let i = 2 * j;
            let (m0, m1) = (mk[i], mk[i + 1]);
            let (bottom_r, bottom_t) = match pair_bytes(m0 as u32 * m1 as u32) {
                2 => {
                    pos -= 2;
                    (s[pos] as u32 | (s[pos + 1] as u32) << 8, 1 << 16)
                }
                1 => {
                    pos -= 1;
                    (s[pos] as u32, 1 << 8)
                }
                _ => (0, 1),
            };
            let x = bottom_r + bottom_t * out[j] as u32;
            let (hi, lo) = divmod_u14(x, m0);
            out[i] = lo;
            out[i + 1] = mod_u14(hi, m1);
        }
    }
}
