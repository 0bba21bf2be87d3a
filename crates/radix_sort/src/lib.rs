//! LSD radix sort over `i64` slices with a configurable base.
//!
//! The input is split by sign so digit extraction only ever sees magnitudes:
//! each group is run through stable counting-sort passes over successive digit
//! places, then the negative group is negated back and reversed before the
//! non-negative group is appended. Stability of every individual pass is what
//! makes the multi-pass scheme correct.

use std::error::Error;
use std::fmt;

pub const DEFAULT_BASE: u64 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RadixSortError {
    /// Digit extraction needs at least two digit values; base 0 divides by
    /// zero and base 1 never exhausts the digit places.
    InvalidBase { base: u64 },
}

impl fmt::Display for RadixSortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase { base } => {
                write!(f, "radix sort base must be at least 2, got {base}")
            }
        }
    }
}

impl Error for RadixSortError {}

/// Sorts `data` ascending. Fails before touching the input if `base < 2`.
pub fn radix_sort(data: &mut [i64], base: u64) -> Result<(), RadixSortError> {
    if base < 2 {
        return Err(RadixSortError::InvalidBase { base });
    }
    radix_sort_validated(data, base);
    Ok(())
}

/// Base-10 sort; infallible since the base precondition holds by construction.
pub fn radix_sort_decimal(data: &mut [i64]) {
    radix_sort_validated(data, DEFAULT_BASE);
}

fn radix_sort_validated(data: &mut [i64], base: u64) {
    debug_assert!(base >= 2);

    if data.len() < 2 {
        return;
    }
    if is_sorted_non_decreasing(data) {
        return;
    }

    // Magnitudes as u64 so i64::MIN has an exact representation.
    let mut neg: Vec<u64> = Vec::new();
    let mut pos: Vec<u64> = Vec::new();
    for &x in data.iter() {
        if x < 0 {
            neg.push(x.unsigned_abs());
        } else {
            pos.push(x as u64);
        }
    }

    sort_magnitudes(&mut neg, base);
    sort_magnitudes(&mut pos, base);

    // The negative group is ascending by magnitude, i.e. descending by true
    // value; reverse and negate to restore ascending order. Wrapping negation
    // maps the 2^63 magnitude back to i64::MIN.
    let mut out = 0usize;
    for &m in neg.iter().rev() {
        data[out] = (m as i64).wrapping_neg();
        out += 1;
    }
    for &m in &pos {
        data[out] = m as i64;
        out += 1;
    }
}

/// Stable LSD passes over `group` until the top digit of its maximum is done.
fn sort_magnitudes(group: &mut [u64], base: u64) {
    let Some(&max_abs) = group.iter().max() else {
        return;
    };

    let mut output = vec![0_u64; group.len()];
    let mut counts = vec![0_usize; base as usize];

    let mut exp = 1_u64;
    while max_abs / exp > 0 {
        counting_sort_pass(group, &mut output, &mut counts, exp, base);
        // Past this point the next place value would overflow u64, and every
        // remaining digit of max_abs is zero anyway.
        let Some(next) = exp.checked_mul(base) else {
            break;
        };
        exp = next;
    }
}

/// One stable counting-sort pass keyed on `(value / exp) % base`. The reverse
/// scan with decremented cumulative counts preserves the relative order of
/// elements sharing a digit.
fn counting_sort_pass(
    group: &mut [u64],
    output: &mut [u64],
    counts: &mut [usize],
    exp: u64,
    base: u64,
) {
    counts.fill(0);

    for &x in group.iter() {
        counts[((x / exp) % base) as usize] += 1;
    }

    for digit in 1..counts.len() {
        counts[digit] += counts[digit - 1];
    }

    for &x in group.iter().rev() {
        let digit = ((x / exp) % base) as usize;
        counts[digit] -= 1;
        output[counts[digit]] = x;
    }

    group.copy_from_slice(output);
}

#[inline]
fn is_sorted_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i64], base: u64) {
        let mut actual = data.to_vec();
        radix_sort(&mut actual, base).unwrap();

        let mut expected = data.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "base={} input_len={}", base, data.len());
    }

    #[test]
    fn edge_cases() {
        let cases: [Vec<i64>; 7] = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -2],
            vec![5, 5, -3, -3, 1, 1, -4, -4, 2, 2, 0, 0],
        ];

        for case in &cases {
            for &base in &[2_u64, 10, 16] {
                assert_sorts_like_std(case, base);
            }
        }
    }

    #[test]
    fn known_cases() {
        let mut data = vec![170, 45, 75, -90, -802, 24, 2, 66];
        radix_sort_decimal(&mut data);
        assert_eq!(data, vec![-802, -90, 2, 24, 45, 66, 75, 170]);

        let mut data = vec![5, -3, 0];
        radix_sort(&mut data, 2).unwrap();
        assert_eq!(data, vec![-3, 0, 5]);
    }

    #[test]
    fn rejects_degenerate_bases() {
        let original = vec![3, 1, 2];
        for &base in &[0_u64, 1] {
            let mut data = original.clone();
            assert_eq!(
                radix_sort(&mut data, base),
                Err(RadixSortError::InvalidBase { base })
            );
            // Fails fast: the input is left untouched.
            assert_eq!(data, original);
        }
    }

    #[test]
    fn invalid_base_error_is_descriptive() {
        let err = RadixSortError::InvalidBase { base: 1 };
        assert_eq!(err.to_string(), "radix sort base must be at least 2, got 1");
    }

    #[test]
    fn negatives_precede_non_negatives() {
        let mut data = vec![3, -1, 0, -7, 2, -1, 9];
        radix_sort_decimal(&mut data);
        assert_eq!(data, vec![-7, -1, -1, 0, 2, 3, 9]);
    }

    #[test]
    fn bases_agree() {
        let mut rng = StdRng::seed_from_u64(0xBA5E_2026);
        let data: Vec<i64> = (0..512).map(|_| rng.random_range(-10_000..10_000)).collect();

        let mut by_base: Vec<Vec<i64>> = Vec::new();
        for &base in &[2_u64, 10, 16] {
            let mut sorted = data.clone();
            radix_sort(&mut sorted, base).unwrap();
            by_base.push(sorted);
        }

        assert_eq!(by_base[0], by_base[1]);
        assert_eq!(by_base[1], by_base[2]);
    }

    #[test]
    fn counting_pass_is_stable() {
        // 21 and 11 share the units digit 1; one pass keyed on exp=1 must
        // keep 21 ahead of 11 while moving 32 behind both.
        let mut group = vec![32_u64, 21, 11, 2];
        let mut output = vec![0_u64; group.len()];
        let mut counts = vec![0_usize; 10];
        counting_sort_pass(&mut group, &mut output, &mut counts, 1, 10);
        assert_eq!(group, vec![21, 11, 32, 2]);
    }

    #[test]
    fn idempotent_on_sorted_input() {
        let mut data: Vec<i64> = (-128..128).collect();
        let expected = data.clone();
        radix_sort_decimal(&mut data);
        assert_eq!(data, expected);
        radix_sort_decimal(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn extreme_magnitudes() {
        // i64::MIN has no positive counterpart; the u64 magnitude path and
        // wrapping negation must round-trip it.
        let cases: [Vec<i64>; 3] = [
            vec![i64::MIN],
            vec![i64::MIN, i64::MAX],
            vec![i64::MAX, i64::MIN, 0, i64::MIN + 1, i64::MAX - 1],
        ];
        for case in &cases {
            for &base in &[2_u64, 10, 16] {
                assert_sorts_like_std(case, base);
            }
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 64, 127, 512, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<i64>());
            }
            for &base in &[2_u64, 10, 16, 256] {
                assert_sorts_like_std(&data, base);
            }
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random_range(-8_i64..8) * 17);
            }
            assert_sorts_like_std(&data, 10);
        }
    }
}
