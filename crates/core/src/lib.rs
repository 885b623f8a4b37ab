//! # vecash core algorithm
//!
//! Memory-hard proof-of-work in the Ethash family (revision 23). Verifying a
//! hash needs only a small cache; mining efficiently needs the full
//! gigabyte-scale dataset that the cache expands into.
//!
//! ## Pipeline
//!
//! ```text
//! epoch ── seed_hash ──► seed ── make_cache ──► cache ── build_dataset ──► dataset
//!   │                                             │                          │
//!   └─ cache_size / full_size                     └── hashimoto_light        └── hashimoto_full
//! ```
//!
//! - [`seed_hash`]: Keccak-256 chain from 32 zero bytes, one link per epoch
//! - [`cache_size`] / [`full_size`]: linear growth, walked down to a prime row count
//! - [`make_cache`]: sequential Keccak-512 chain plus 3 relinking passes
//! - [`calc_dataset_item`]: 256 FNV-mixed cache parents per row
//! - [`hashimoto`]: 64 page accesses folded into `(mix_digest, pow_digest)`
//!
//! ## Example
//!
//! ```rust
//! use vecash_core::{CacheView, hashimoto_light, make_cache, seed_hash};
//!
//! // Reduced sizes; real epochs use cache_size(epoch) and full_size(epoch).
//! let cache = make_cache(1024, &seed_hash(0)).unwrap();
//! let view = CacheView::new(&cache).unwrap();
//! let result = hashimoto_light(&view, 32 * 1024, &[0u8; 32], 0).unwrap();
//! assert_eq!(result.mix_digest.len(), 32);
//! ```
//!
//! ## no_std Support
//!
//! The algorithm only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! vecash-core = { version = "0.23", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod cache;
mod dataset;
mod error;
mod hashimoto;
mod params;
mod primitives;
mod seed;
mod sizes;

pub use cache::{fill_cache, make_cache};
pub use dataset::{
    BuildControl, CacheView, build_dataset, build_dataset_range, calc_dataset_item, dataset_rows,
};
pub use error::{Error, Result};
pub use hashimoto::{MixResult, hashimoto, hashimoto_full, hashimoto_light, quick_hash};
pub use params::*;
pub use primitives::{FNV_PRIME, Node, fnv, keccak256, keccak512, node_from_bytes, node_to_bytes};
pub use seed::{
    GENESIS_SEED, epoch_of_block, find_epoch, seed_hash, seed_hash_for_block, seed_hash_from,
};
pub use sizes::{cache_size, full_size, is_prime};
