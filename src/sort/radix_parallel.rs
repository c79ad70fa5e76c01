//! Parallel LSD radix sort (spec §4.4): every scatter pass of §4.3 delegates to
//! [`super::counting_sort_parallel`] with a per-pass byte-digit key, keeping the
//! short-circuit and constant-digit-skip optimizations of the sequential version.
//! Falls back to [`super::radix_sort`] when the policy requests fewer than two workers.

use super::radix::RadixDigits;
use crate::error::{Error, Result};
use crate::key::OrderedIntegral;
use crate::pool::ParallelPolicy;

/// As [`super::radix_sort`], but scattering each digit pass across `policy.workers()`
/// threads via [`super::counting_sort_parallel`].
pub fn radix_sort_parallel<T, K, F>(
    input: &mut [T],
    buffer: &mut [T],
    key: F,
    policy: &ParallelPolicy,
) -> Result<()>
where
    T: Clone + Send + Sync,
    K: OrderedIntegral,
    K::Integral: RadixDigits,
    F: Fn(&T) -> K + Sync,
{
    let len = input.len();
    if buffer.len() < len {
        return Err(Error::BufferTooSmall {
            need: len,
            have: buffer.len(),
        });
    }
    if policy.is_sequential() {
        return super::radix_sort(input, buffer, key);
    }
    if len <= 1 {
        return Ok(());
    }

    let integral = |x: &T| key(x).to_ordered_integral();
    let digit_count = K::Integral::DIGIT_COUNT;

    if digit_count == 1 {
        let byte_key = |x: &T| integral(x).digit(0);
        super::counting_sort_parallel(input, byte_key, &mut buffer[..len], policy)?;
        input.clone_from_slice(&buffer[..len]);
        return Ok(());
    }

    let mut histograms = vec![[0usize; 257]; digit_count];
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
            histogram[value.digit(d) as usize + 1] += 1;
        }
    }
    if sorted {
        return Ok(());
    }

    let is_constant = |histogram: &[usize; 257]| -> bool {
        let mut seen_non_empty = false;
        for bucket in 0..256 {
            if histogram[bucket + 1] > histogram[bucket] {
                if seen_non_empty {
                    return false;
                }
                seen_non_empty = true;
            }
        }
        true
    };

    log::trace!(
        "parallel radix sort: {} digit(s), {} element(s), {} worker(s)",
        digit_count,
        len,
        policy.workers()
    );

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

        let digit_key = |x: &T| integral(x).digit(d);
        if from_input {
            super::counting_sort_parallel(input, digit_key, &mut buffer[..len], policy)?;
        } else {
            super::counting_sort_parallel(&buffer[..len], digit_key, input, policy)?;
        }
    }
    debug_assert_eq!(digit_count % 2, 0);

    Ok(())
}
