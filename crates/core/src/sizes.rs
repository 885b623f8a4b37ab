//! Cache and dataset sizes per epoch
//!
//! Both sizes grow linearly and are then walked down until the row count is
//! prime, which keeps the modulo-indexed lookups evenly spread.

use crate::params::{
    CACHE_BYTES_GROWTH, CACHE_BYTES_INIT, DATASET_BYTES_GROWTH, DATASET_BYTES_INIT, HASH_BYTES,
    MAX_EPOCH, MIX_BYTES,
};

/// Cache size in bytes for `epoch`; epochs past [`MAX_EPOCH`] get its size
pub fn cache_size(epoch: u64) -> u64 {
    prime_aligned(
        CACHE_BYTES_INIT + CACHE_BYTES_GROWTH * epoch.min(MAX_EPOCH),
        HASH_BYTES as u64,
    )
}

/// Full dataset size in bytes for `epoch`; epochs past [`MAX_EPOCH`] get its size
pub fn full_size(epoch: u64) -> u64 {
    prime_aligned(
        DATASET_BYTES_INIT + DATASET_BYTES_GROWTH * epoch.min(MAX_EPOCH),
        MIX_BYTES as u64,
    )
}

/// Largest `size <= upper - unit`, stepping by `2 * unit`, with `size / unit` prime
fn prime_aligned(upper: u64, unit: u64) -> u64 {
    let mut size = upper - unit;
    while !is_prime(size / unit) {
        size -= 2 * unit;
    }
    size
}

/// Deterministic trial division over 6k +/- 1 candidates
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut d = 5u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}
