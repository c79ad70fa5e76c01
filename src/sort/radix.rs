//! Sequential LSD radix sort (spec §4.3), grounded on
//! `examples/original_source/include/burst/algorithm/detail/radix_sort.hpp`: `collect`
//! gathers one histogram per digit position in a single pass over the input (the
//! `collect_impl`/`partial_sum_max` pair), then `radix_sort_impl` ping-pongs between the
//! input slice and the scratch buffer one digit at a time, skipping a digit entirely when
//! every element shares the same value there (`maximums[radix_number] == range_size`).

use super::counting::{collect_counters, dispose};
use crate::error::{Error, Result};
use crate::key::OrderedIntegral;
use cuneiform::cuneiform;

/// One digit position's histogram: 256 buckets plus the leading sentinel, the same
/// shape as the teacher's `RadixCounts`, cache-line aligned for the same reason —
/// every element's scatter pass touches its bucket's counter, so keeping the whole row
/// in one or two cache lines matters far more than it would for a one-off count.
#[cuneiform]
#[derive(Clone, Copy)]
struct RadixHistogram {
    counts: [usize; 257],
}

impl RadixHistogram {
    fn zeroed() -> Self {
        RadixHistogram { counts: [0usize; 257] }
    }
}

/// A key that can be decomposed into a fixed number of 8-bit digits, least significant
/// first.
///
/// Grounded on the source's `radix_sort_traits::radix_count`/`nth_radix`: there, the
/// digit count is derived from `sizeof(key)` and the digit extractor is a byte shift.
/// Here the same byte-at-a-time decomposition is expressed as a trait over the unsigned
/// integral types [`crate::key::OrderedIntegral`] normalizes keys onto.
pub trait RadixDigits: Copy {
    /// Number of 8-bit digits needed to cover every bit of `Self`.
    const DIGIT_COUNT: usize;

    /// The `d`-th digit (0 = least significant byte).
    fn digit(self, d: usize) -> u8;
}

macro_rules! impl_radix_digits {
    ($($t:ty),* $(,)?) => {
        $(
            impl RadixDigits for $t {
                const DIGIT_COUNT: usize = std::mem::size_of::<$t>();

                #[inline(always)]
                fn digit(self, d: usize) -> u8 {
                    self.to_le_bytes()[d]
                }
            }
        )*
    };
}

impl_radix_digits!(u8, u16, u32, u64, u128, usize);

/// Sorts `input` in place by `key`, using `buffer` as scratch space of the same length.
///
/// `key` is composed with [`OrderedIntegral::to_ordered_integral`] so that signed
/// integers and floats participate correctly; the digit extractor defaults to plain
/// byte decomposition of that ordered-integral representation. Use
/// [`radix_sort_by`] to supply a custom digit extractor (spec §6's optional `radix`
/// parameter).
pub fn radix_sort<T, K, F>(input: &mut [T], buffer: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    K: OrderedIntegral,
    K::Integral: RadixDigits,
    F: Fn(&T) -> K,
{
    radix_sort_by(input, buffer, key, |integral, d| integral.digit(d))
}

/// As [`radix_sort`], but with an explicit `radix(key, position) -> digit` extractor in
/// place of the default byte decomposition.
pub fn radix_sort_by<T, K, F, R>(
    input: &mut [T],
    buffer: &mut [T],
    key: F,
    radix: R,
) -> Result<()>
where
    T: Clone,
    K: OrderedIntegral,
    K::Integral: RadixDigits,
    F: Fn(&T) -> K,
    R: Fn(K::Integral, usize) -> u8,
{
    let len = input.len();
    if buffer.len() < len {
        return Err(Error::BufferTooSmall {
            need: len,
            have: buffer.len(),
        });
    }
    if len <= 1 {
        return Ok(());
    }

    let integral = |x: &T| key(x).to_ordered_integral();
    let digit_count = K::Integral::DIGIT_COUNT;

    // One-digit keys delegate straight to counting sort (spec: "the 1-digit case is
    // handled by delegating to counting sort into B then copying back").
    if digit_count == 1 {
        let byte_key = |x: &T| radix(integral(x), 0);
        let mut counters = collect_counters(input, &byte_key);
        dispose(input, &byte_key, &mut counters, &mut buffer[..len]);
        input.clone_from_slice(&buffer[..len]);
        return Ok(());
    }

    // Single pass: histogram every digit position at once, and detect an
    // already-key-sorted input as a short-circuit.
    let mut histograms: Vec<RadixHistogram> = (0..digit_count).map(|_| RadixHistogram::zeroed()).collect();
    let mut sorted = true;
    let mut previous: Option<K::Integral> = None;
    for item in input.iter() {
        let value = integral(item);
        if let Some(prev) = previous {
            if value < prev {
                sorted = false;
            }
        }
        previous = Some(value);
        for (d, histogram) in histograms.iter_mut().enumerate() {
            histogram.counts[radix(value, d) as usize + 1] += 1;
        }
    }
    if sorted {
        return Ok(());
    }
    for histogram in histograms.iter_mut() {
        for i in 1..histogram.counts.len() {
            histogram.counts[i] += histogram.counts[i - 1];
        }
    }

    // A digit position whose histogram has a single non-empty bucket puts every
    // element in the same place relative to one another, so the pass is a pure copy.
    let is_constant = |histogram: &RadixHistogram| -> bool {
        let mut seen_non_empty = false;
        for bucket in 0..256 {
            if histogram.counts[bucket + 1] > histogram.counts[bucket] {
                if seen_non_empty {
                    return false;
                }
                seen_non_empty = true;
            }
        }
        true
    };

    for d in 0..digit_count {
        let from_input = d % 2 == 0;
        if is_constant(&histograms[d]) {
            if from_input {
                buffer[..len].clone_from_slice(&input[..len]);
            } else {
                input.clone_from_slice(&buffer[..len]);
            }
            continue;
        }

        let mut cursor = histograms[d];
        if from_input {
            for item in input.iter() {
                let slot = radix(integral(item), d) as usize;
                buffer[cursor.counts[slot]] = item.clone();
                cursor.counts[slot] += 1;
            }
        } else {
            for item in buffer[..len].iter() {
                let slot = radix(integral(item), d) as usize;
                input[cursor.counts[slot]] = item.clone();
                cursor.counts[slot] += 1;
            }
        }
    }
    // `digit_count` is even for every multi-digit key (u16/u32/u64/u128/usize all have
    // an even byte width), so the final pass always lands back in `input`.
    debug_assert_eq!(digit_count % 2, 0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_u32_keys() {
        let mut input = [100500u32, 42, 99999, 1000, 0];
        let mut buffer = [0u32; 5];
        radix_sort(&mut input, &mut buffer, |&x| x).unwrap();
        assert_eq!(input, [0, 42, 1000, 99999, 100500]);
    }

    #[test]
    fn stable_across_ties() {
        let mut input = [(3u32, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        let mut buffer = input;
        radix_sort(&mut input, &mut buffer, |(k, _)| *k).unwrap();
        assert_eq!(
            input,
            [(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]
        );
    }

    #[test]
    fn short_circuits_on_already_sorted_input() {
        let mut input: Vec<u64> = (0..2000).collect();
        let mut buffer = vec![0u64; 2000];
        radix_sort(&mut input, &mut buffer, |&x| x).unwrap();
        assert!(input.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn handles_signed_keys_via_ordered_integral() {
        let mut input = [-5i64, 3, -1, 0, 7, i64::MIN, i64::MAX];
        let mut buffer = input;
        radix_sort(&mut input, &mut buffer, |&x| x).unwrap();
        let mut expected = input;
        expected.sort();
        assert_eq!(input, expected);
    }

    #[test]
    fn rejects_undersized_buffer() {
        let mut input = [1u32, 2, 3];
        let mut buffer = [0u32; 2];
        let err = radix_sort(&mut input, &mut buffer, |&x| x).unwrap_err();
        assert_eq!(err, Error::BufferTooSmall { need: 3, have: 2 });
    }

    #[test]
    fn single_byte_keys_delegate_to_counting_sort() {
        let mut input = [0x12u8, 0xfd, 0x00, 0x15, 0x66];
        let mut buffer = [0u8; 5];
        radix_sort(&mut input, &mut buffer, |&x| x).unwrap();
        assert_eq!(input, [0x00, 0x12, 0x15, 0x66, 0xfd]);
    }
}
