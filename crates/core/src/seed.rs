//! Epoch seed derivation
//!
//! `seed(0)` is 32 zero bytes and `seed(n) = keccak256(seed(n - 1))`. There is
//! no shortcut, so long-lived callers resume from the last seed they derived.

use crate::params::{EPOCH_LENGTH, H256};
use crate::primitives::keccak256;

/// Seed of epoch 0
pub const GENESIS_SEED: H256 = [0u8; 32];

/// Epoch a block number falls into
#[inline]
pub fn epoch_of_block(block_number: u64) -> u64 {
    block_number / EPOCH_LENGTH
}

/// Seed hash for `epoch`, chained from genesis
pub fn seed_hash(epoch: u64) -> H256 {
    advance(GENESIS_SEED, epoch)
}

/// Seed hash for the epoch containing `block_number`
pub fn seed_hash_for_block(block_number: u64) -> H256 {
    seed_hash(epoch_of_block(block_number))
}

/// Seed hash for `epoch`, resuming from a known `(known_epoch, known_seed)`
/// pair when it lies at or before `epoch`.
pub fn seed_hash_from(known_epoch: u64, known_seed: &H256, epoch: u64) -> H256 {
    if epoch >= known_epoch {
        advance(*known_seed, epoch - known_epoch)
    } else {
        seed_hash(epoch)
    }
}

/// Find the epoch whose seed is `seed`, searching epochs `0..max_epoch`
pub fn find_epoch(seed: &H256, max_epoch: u64) -> Option<u64> {
    let mut current = GENESIS_SEED;
    for epoch in 0..max_epoch {
        if &current == seed {
            return Some(epoch);
        }
        current = keccak256(&current);
    }
    None
}

fn advance(mut seed: H256, steps: u64) -> H256 {
    for _ in 0..steps {
        seed = keccak256(&seed);
    }
    seed
}
