//! vecash revision 23 parameters
//!
//! Every value here is consensus-critical. Changing any of them changes every
//! seed, cache, dataset and digest the engine produces.

/// Algorithm revision, also stamped into persisted artifact headers
pub const REVISION: u32 = 23;

/// Dataset size at genesis in bytes (2^30)
pub const DATASET_BYTES_INIT: u64 = 1 << 30;

/// Dataset growth per epoch in bytes (2^23)
pub const DATASET_BYTES_GROWTH: u64 = 1 << 23;

/// Cache size at genesis in bytes (2^24)
pub const CACHE_BYTES_INIT: u64 = 1 << 24;

/// Cache growth per epoch in bytes (2^17)
pub const CACHE_BYTES_GROWTH: u64 = 1 << 17;

/// Blocks per epoch
pub const EPOCH_LENGTH: u64 = 30_000;

/// Last epoch whose dataset row index still fits in a `u32`.
///
/// Size functions clamp later epochs to this one.
pub const MAX_EPOCH: u64 = 32_640;

/// Width of the mix buffer and of one dataset page in bytes
pub const MIX_BYTES: usize = 128;

/// Width of one cache/dataset row (a Keccak-512 digest) in bytes
pub const HASH_BYTES: usize = 64;

/// Bytes per word
pub const WORD_BYTES: usize = 4;

/// Words per row
pub const NODE_WORDS: usize = HASH_BYTES / WORD_BYTES;

/// Words in the mix buffer
pub const MIX_WORDS: usize = MIX_BYTES / WORD_BYTES;

/// Rows per dataset page
pub const MIX_NODES: usize = MIX_WORDS / NODE_WORDS;

/// Cache parents folded into each dataset item
pub const DATASET_PARENTS: u32 = 256;

/// Scrambling passes over the cache
pub const CACHE_ROUNDS: usize = 3;

/// Dataset page accesses per hashimoto call
pub const ACCESSES: u32 = 64;

/// 32-byte hash (seed, header hash, digests)
pub type H256 = [u8; 32];
