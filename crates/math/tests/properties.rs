//! Property tests for the codec, the sorting network and the samplers.

use proptest::prelude::*;
use sntrup_math::{
    P, R3, W,
    encode::{decode, encode, encoded_len},
    sort::{sort_i32, sort_u32},
};

fn radix() -> impl Strategy<Value = u16> {
    // Bias toward tiny radices so the zero- and one-byte paths are hit.
    prop_oneof![1u16..4, 1u16..300, 1u16..16384]
}

fn radices_and_values<const N: usize>() -> impl Strategy<Value = ([u16; N], [u16; N])> {
    prop::collection::vec(radix(), N)
        .prop_flat_map(|m| {
            let values: Vec<_> = m.iter().map(|&mi| 0..mi).collect();
            (Just(m), values)
        })
        .prop_map(|(m, r)| (m.try_into().unwrap(), r.try_into().unwrap()))
}

fn roundtrip<const N: usize>(m: &[u16; N], r: &[u16; N]) -> Result<(), TestCaseError> {
    let mut buf = vec![0u8; encoded_len(m)];
    encode(&mut buf, r, m);
    let mut back = [0u16; N];
    decode(&mut back, &buf, m);
    prop_assert_eq!(&back, r);
    Ok(())
}

fn words() -> impl Strategy<Value = [u32; P]> {
    prop::collection::vec(any::<u32>(), P).prop_map(|v| v.try_into().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn codec_roundtrip_1((m, r) in radices_and_values::<1>()) {
        roundtrip(&m, &r)?;
    }

    #[test]
    fn codec_roundtrip_2((m, r) in radices_and_values::<2>()) {
        roundtrip(&m, &r)?;
    }

    #[test]
    fn codec_roundtrip_7((m, r) in radices_and_values::<7>()) {
        roundtrip(&m, &r)?;
    }

    #[test]
    fn codec_roundtrip_64((m, r) in radices_and_values::<64>()) {
        roundtrip(&m, &r)?;
    }

    #[test]
    fn codec_roundtrip_101((m, r) in radices_and_values::<101>()) {
        roundtrip(&m, &r)?;
    }

    #[test]
    fn decode_is_total((m, _) in radices_and_values::<37>(), seed in any::<u8>()) {
        let buf: Vec<u8> = (0..encoded_len(&m)).map(|i| (i as u8).wrapping_mul(seed)).collect();
        let mut out = [0u16; 37];
        decode(&mut out, &buf, &m);
        prop_assert!(out.iter().zip(m.iter()).all(|(v, mi)| v < mi));
    }

    #[test]
    fn sort_i32_matches_std(mut v in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = v.clone();
        expected.sort_unstable();
        sort_i32(&mut v);
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn sort_u32_matches_std(mut v in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut expected = v.clone();
        expected.sort_unstable();
        sort_u32(&mut v);
        prop_assert_eq!(v, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn short_weight_is_exact(w in words()) {
        let f = R3::short_from_list(&w);
        prop_assert_eq!(f.coeffs().iter().filter(|&&c| c != 0).count(), W);
        prop_assert_eq!(f.weight_mask(), 0);
    }

    #[test]
    fn r3_product_stays_ternary(a in words(), b in words()) {
        let f = R3::small_from_list(&a);
        let g = R3::small_from_list(&b);
        let fg = &f * &g;
        prop_assert!(fg.coeffs().iter().all(|c| (-1..=1).contains(c)));
    }
}
