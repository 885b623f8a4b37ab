//! Hashimoto: the dataset-bound mixing function
//!
//! The header hash and nonce are expanded into a 128-byte mix, which then
//! absorbs `ACCESSES` pseudo-randomly chosen dataset pages. The mix is folded
//! down to the 32-byte mix digest, and the PoW digest commits to both the
//! expanded seed and the mix digest.

use crate::dataset::{CacheView, dataset_rows};
use crate::error::{Error, Result};
use crate::params::{ACCESSES, H256, HASH_BYTES, MIX_NODES, MIX_WORDS, NODE_WORDS};
use crate::primitives::{Node, fnv, keccak256, keccak512, node_at, node_from_bytes};

/// Output of one hashimoto run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MixResult {
    /// Folded mix, published alongside the nonce for verification
    pub mix_digest: H256,
    /// Value compared against the difficulty target
    pub pow_digest: H256,
}

/// Run hashimoto over a dataset of `full_size` bytes whose rows come from `lookup`
pub fn hashimoto<F>(header: &H256, nonce: u64, full_size: u64, mut lookup: F) -> Result<MixResult>
where
    F: FnMut(u32) -> Result<Node>,
{
    let rows = dataset_rows(full_size)?;
    let pages = rows / MIX_NODES as u32;

    let seed = expand_seed(header, nonce);
    let seed_words = node_from_bytes(&seed);
    let mut mix: [u32; MIX_WORDS] = core::array::from_fn(|w| seed_words[w % NODE_WORDS]);

    for access in 0..ACCESSES {
        let page = fnv(seed_words[0] ^ access, mix[access as usize % MIX_WORDS]) % pages;
        for n in 0..MIX_NODES {
            let row = lookup(page * MIX_NODES as u32 + n as u32)?;
            let lane = &mut mix[n * NODE_WORDS..(n + 1) * NODE_WORDS];
            for (word, row_word) in lane.iter_mut().zip(row.iter()) {
                *word = fnv(*word, *row_word);
            }
        }
    }

    let mut mix_digest = [0u8; 32];
    for (out, quad) in mix_digest.chunks_exact_mut(4).zip(mix.chunks_exact(4)) {
        let folded = fnv(fnv(fnv(quad[0], quad[1]), quad[2]), quad[3]);
        out.copy_from_slice(&folded.to_le_bytes());
    }

    Ok(MixResult {
        pow_digest: final_digest(&seed, &mix_digest),
        mix_digest,
    })
}

/// Light mode: every row is recomputed from the cache
pub fn hashimoto_light(
    cache: &CacheView<'_>,
    full_size: u64,
    header: &H256,
    nonce: u64,
) -> Result<MixResult> {
    hashimoto(header, nonce, full_size, |index| Ok(cache.item(index)))
}

/// Full mode: rows are read from the materialized dataset
pub fn hashimoto_full(dataset: &[u8], header: &H256, nonce: u64) -> Result<MixResult> {
    hashimoto(header, nonce, dataset.len() as u64, |index| {
        node_at(dataset, index as usize).ok_or(Error::DatasetCorruption {
            index: index as u64,
            reason: "row outside the mapped dataset",
        })
    })
}

/// PoW digest implied by a claimed mix digest, without touching the dataset
pub fn quick_hash(header: &H256, nonce: u64, mix_digest: &H256) -> H256 {
    final_digest(&expand_seed(header, nonce), mix_digest)
}

fn expand_seed(header: &H256, nonce: u64) -> [u8; HASH_BYTES] {
    let mut input = [0u8; 40];
    input[..32].copy_from_slice(header);
    input[32..].copy_from_slice(&nonce.to_le_bytes());
    keccak512(&input)
}

fn final_digest(seed: &[u8; HASH_BYTES], mix_digest: &H256) -> H256 {
    let mut input = [0u8; HASH_BYTES + 32];
    input[..HASH_BYTES].copy_from_slice(seed);
    input[HASH_BYTES..].copy_from_slice(mix_digest);
    keccak256(&input)
}
