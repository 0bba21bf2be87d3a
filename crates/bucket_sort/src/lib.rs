//! Bucket sort over `f64` slices.
//!
//! Elements are partitioned into `len` equal-width value ranges, each bucket is
//! sorted locally, and the buckets are concatenated in index order. With
//! uniformly distributed input the expected bucket size is constant, giving
//! expected linear time. NaN and infinite values are outside the contract.

/// Buckets at or below this size are insertion-sorted; larger ones fall back
/// to the standard library unstable sort.
pub const INSERTION_THRESHOLD: usize = 32;

/// Added to the value range's denominator so the maximum element cannot round
/// up to index `bucket_count`. The clamp in `bucket_index` covers any residual
/// boundary case; both are load-bearing.
const RANGE_EPSILON: f64 = 1e-6;

pub fn bucket_sort(data: &mut [f64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let Some((min, max)) = min_max(data) else {
        return;
    };
    let range = max - min;

    // One bucket per element on average.
    let bucket_count = len;
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); bucket_count];

    if range == 0.0 {
        // All elements equal: the partition formula would divide a zero
        // numerator by the bare epsilon, so bypass it entirely.
        buckets[0].extend_from_slice(data);
    } else {
        for &x in data.iter() {
            let idx = bucket_index(x, min, range, bucket_count);
            buckets[idx].push(x);
        }
    }

    let mut out = 0usize;
    for bucket in &mut buckets {
        if bucket.len() <= INSERTION_THRESHOLD {
            insertion_sort(bucket);
        } else {
            bucket.sort_unstable_by(f64::total_cmp);
        }
        data[out..out + bucket.len()].copy_from_slice(bucket);
        out += bucket.len();
    }
}

#[inline]
fn bucket_index(value: f64, min: f64, range: f64, bucket_count: usize) -> usize {
    let idx = (bucket_count as f64 * (value - min) / (range + RANGE_EPSILON)) as usize;
    // The cast already truncates toward zero and saturates; the clamp keeps
    // the maximum element in range under any rounding of the division.
    idx.min(bucket_count - 1)
}

#[inline]
fn insertion_sort(data: &mut [f64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *data.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *data.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *data.get_unchecked_mut(j) = key;
        }
    }
}

#[inline]
fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}
