//! Light cache generation
//!
//! Sergio Demian Lerner's SeqMemoHash: a sequential Keccak-512 chain followed
//! by `CACHE_ROUNDS` passes of data-dependent relinking. Every row depends on
//! the row before it, so this loop must stay sequential.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::params::{CACHE_ROUNDS, H256, HASH_BYTES};
use crate::primitives::keccak512;

/// Build a cache of `cache_size` bytes from `seed`
pub fn make_cache(cache_size: u64, seed: &H256) -> Result<Vec<u8>> {
    let len = usize::try_from(cache_size)
        .map_err(|_| Error::InvalidInput("cache size exceeds address space"))?;
    let mut cache = vec![0u8; len];
    fill_cache(&mut cache, seed)?;
    Ok(cache)
}

/// Fill `cache` in place. The buffer length is the cache size.
pub fn fill_cache(cache: &mut [u8], seed: &H256) -> Result<()> {
    let rows = cache_rows(cache.len())?;

    cache[..HASH_BYTES].copy_from_slice(&keccak512(seed));
    for i in 1..rows {
        let (done, rest) = cache.split_at_mut(i * HASH_BYTES);
        rest[..HASH_BYTES].copy_from_slice(&keccak512(&done[(i - 1) * HASH_BYTES..]));
    }

    for _ in 0..CACHE_ROUNDS {
        for i in 0..rows {
            let at = i * HASH_BYTES;
            let link = u32::from_le_bytes([cache[at], cache[at + 1], cache[at + 2], cache[at + 3]])
                as usize
                % rows;
            let prev = (rows - 1 + i) % rows;

            let mut mixed = [0u8; HASH_BYTES];
            for (k, byte) in mixed.iter_mut().enumerate() {
                *byte = cache[prev * HASH_BYTES + k] ^ cache[link * HASH_BYTES + k];
            }
            cache[at..at + HASH_BYTES].copy_from_slice(&keccak512(&mixed));
        }
    }

    Ok(())
}

/// Number of rows in a cache of `len` bytes, validating the size
pub(crate) fn cache_rows(len: usize) -> Result<usize> {
    if len == 0 || len % HASH_BYTES != 0 {
        return Err(Error::InvalidInput(
            "cache size must be a non-zero multiple of 64 bytes",
        ));
    }
    let rows = len / HASH_BYTES;
    if rows > u32::MAX as usize {
        return Err(Error::InvalidInput("cache has more rows than a u32 can index"));
    }
    Ok(rows)
}
