//! Dataset items and full dataset generation
//!
//! `calc_dataset_item` is the only definition of a dataset row. A
//! materialized dataset is nothing more than every item written in index
//! order, so light and full mode always agree.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cache::cache_rows;
use crate::error::{Error, Result};
use crate::params::{DATASET_PARENTS, HASH_BYTES, MIX_BYTES, NODE_WORDS};
use crate::primitives::{Node, fnv, keccak512_node, node_from_bytes, node_to_bytes};

/// Rows handed to one worker before it re-checks cancellation and reports progress
const CHUNK_ROWS: usize = 4096;

/// Validated read-only view over cache bytes
#[derive(Clone, Copy, Debug)]
pub struct CacheView<'a> {
    bytes: &'a [u8],
    rows: u32,
}

impl<'a> CacheView<'a> {
    /// Wrap `bytes`, which must be a non-empty multiple of 64 bytes
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        let rows = cache_rows(bytes.len())? as u32;
        Ok(Self { bytes, rows })
    }

    /// Number of cache rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Raw cache bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline(always)]
    fn node(&self, index: u32) -> Node {
        let at = index as usize * HASH_BYTES;
        node_from_bytes(&self.bytes[at..at + HASH_BYTES])
    }

    /// Dataset item `index` recomputed from the cache
    pub fn item(&self, index: u32) -> Node {
        let rows = self.rows;
        let mut mix = self.node(index % rows);
        mix[0] ^= index;
        let mut mix = keccak512_node(&mix);

        for parent in 0..DATASET_PARENTS {
            let parent_index = fnv(index ^ parent, mix[parent as usize % NODE_WORDS]) % rows;
            let parent_node = self.node(parent_index);
            for (word, parent_word) in mix.iter_mut().zip(parent_node.iter()) {
                *word = fnv(*word, *parent_word);
            }
        }

        keccak512_node(&mix)
    }
}

/// Dataset item `index` for the cache stored in `cache`
pub fn calc_dataset_item(cache: &[u8], index: u32) -> Result<Node> {
    Ok(CacheView::new(cache)?.item(index))
}

/// Cancellation and progress hooks for long dataset builds
#[derive(Clone, Copy, Default)]
pub struct BuildControl<'a> {
    cancel: Option<&'a AtomicBool>,
    progress: Option<&'a (dyn Fn(u32) + Sync)>,
}

impl<'a> BuildControl<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort with [`Error::Cancelled`] once `flag` is set
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Receive completion percentages (0..=100), each at most once
    pub fn with_progress(mut self, progress: &'a (dyn Fn(u32) + Sync)) -> Self {
        self.progress = Some(progress);
        self
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Shared progress counter for one build
struct Progress<'c, 'a> {
    control: &'c BuildControl<'a>,
    done: AtomicU64,
    reported: AtomicU32,
    total: u64,
}

impl<'c, 'a> Progress<'c, 'a> {
    fn new(control: &'c BuildControl<'a>, total: u64) -> Self {
        Self {
            control,
            done: AtomicU64::new(0),
            reported: AtomicU32::new(0),
            total,
        }
    }

    fn advance(&self, rows: u64) {
        let Some(progress) = self.control.progress else {
            return;
        };
        let done = self.done.fetch_add(rows, Ordering::Relaxed) + rows;
        let percent = (done * 100 / self.total.max(1)) as u32;
        if self.reported.fetch_max(percent, Ordering::Relaxed) < percent {
            progress(percent);
        }
    }
}

/// Number of rows in a dataset of `full_size` bytes, validating the size
pub fn dataset_rows(full_size: u64) -> Result<u32> {
    if full_size == 0 || full_size % MIX_BYTES as u64 != 0 {
        return Err(Error::InvalidInput(
            "dataset size must be a non-zero multiple of 128 bytes",
        ));
    }
    u32::try_from(full_size / HASH_BYTES as u64)
        .map_err(|_| Error::InvalidInput("dataset has more rows than a u32 can index"))
}

/// Materialize the whole dataset into `dataset`, whose length is the full size
pub fn build_dataset(
    cache: &CacheView<'_>,
    dataset: &mut [u8],
    control: &BuildControl<'_>,
) -> Result<()> {
    dataset_rows(dataset.len() as u64)?;
    build_dataset_range(cache, 0, dataset, control)
}

/// Fill `out` with the contiguous items starting at `first_item`.
///
/// Ranges are independent, so a build can be split across threads or
/// processes and the pieces concatenated.
pub fn build_dataset_range(
    cache: &CacheView<'_>,
    first_item: u32,
    out: &mut [u8],
    control: &BuildControl<'_>,
) -> Result<()> {
    if out.len() % HASH_BYTES != 0 {
        return Err(Error::InvalidInput("output must be a multiple of 64 bytes"));
    }
    let rows = (out.len() / HASH_BYTES) as u64;
    if first_item as u64 + rows > u32::MAX as u64 + 1 {
        return Err(Error::InvalidInput("item range exceeds u32 indices"));
    }

    let progress = Progress::new(control, rows);
    let fill_chunk = |(chunk_index, chunk): (usize, &mut [u8])| -> Result<()> {
        let base = first_item as usize + chunk_index * CHUNK_ROWS;
        for (offset, row) in chunk.chunks_exact_mut(HASH_BYTES).enumerate() {
            if control.is_cancelled() {
                return Err(Error::Cancelled);
            }
            row.copy_from_slice(&node_to_bytes(&cache.item((base + offset) as u32)));
        }
        progress.advance((chunk.len() / HASH_BYTES) as u64);
        Ok(())
    };

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(CHUNK_ROWS * HASH_BYTES)
            .enumerate()
            .try_for_each(fill_chunk)
    }

    #[cfg(not(feature = "parallel"))]
    {
        out.chunks_mut(CHUNK_ROWS * HASH_BYTES)
            .enumerate()
            .try_for_each(fill_chunk)
    }
}
