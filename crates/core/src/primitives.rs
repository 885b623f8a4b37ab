//! Hash primitives and the row codec
//!
//! All multi-byte words are little-endian so that caches, datasets and
//! digests are byte-identical on every host.

use sha3::{Digest, Keccak256, Keccak512};

use crate::params::{H256, HASH_BYTES, NODE_WORDS, WORD_BYTES};

/// FNV-1 style multiplier used by the non-cryptographic mixing step
pub const FNV_PRIME: u32 = 0x0100_0193;

/// One cache/dataset row as 16 little-endian words
pub type Node = [u32; NODE_WORDS];

/// FNV combine: `(a * FNV_PRIME) ^ b` in 32-bit arithmetic
#[inline(always)]
pub fn fnv(a: u32, b: u32) -> u32 {
    a.wrapping_mul(FNV_PRIME) ^ b
}

/// Keccak-256 (original padding, not FIPS-202 SHA3-256)
#[inline]
pub fn keccak256(data: &[u8]) -> H256 {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Keccak-512 (original padding)
#[inline]
pub fn keccak512(data: &[u8]) -> [u8; HASH_BYTES] {
    let digest = Keccak512::digest(data);
    let mut out = [0u8; HASH_BYTES];
    out.copy_from_slice(&digest);
    out
}

/// Keccak-512 of a row, returning a row
#[inline]
pub fn keccak512_node(node: &Node) -> Node {
    node_from_bytes(&keccak512(&node_to_bytes(node)))
}

/// Decode a 64-byte row. `bytes` must hold at least `HASH_BYTES` bytes.
#[inline(always)]
pub fn node_from_bytes(bytes: &[u8]) -> Node {
    core::array::from_fn(|w| {
        let at = w * WORD_BYTES;
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    })
}

/// Encode a row as 64 little-endian bytes
#[inline(always)]
pub fn node_to_bytes(node: &Node) -> [u8; HASH_BYTES] {
    let mut out = [0u8; HASH_BYTES];
    for (chunk, word) in out.chunks_exact_mut(WORD_BYTES).zip(node.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Row `index` of a row-aligned buffer, or `None` past the end
#[inline(always)]
pub fn node_at(buffer: &[u8], index: usize) -> Option<Node> {
    let start = index.checked_mul(HASH_BYTES)?;
    let end = start.checked_add(HASH_BYTES)?;
    buffer.get(start..end).map(node_from_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_vector() {
        // Keccak-256("") differs from SHA3-256("") because of the padding byte
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak512_empty_vector() {
        assert_eq!(
            hex::encode(keccak512(b"")),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
             c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
    }

    #[test]
    fn test_fnv_wraps() {
        assert_eq!(fnv(0, 7), 7);
        assert_eq!(fnv(1, 0), FNV_PRIME);
        assert_eq!(fnv(u32::MAX, 0), u32::MAX.wrapping_mul(FNV_PRIME));
    }

    #[test]
    fn test_node_codec_is_little_endian() {
        let mut bytes = [0u8; HASH_BYTES];
        bytes[0] = 0x01;
        bytes[4] = 0x00;
        bytes[5] = 0x02;
        let node = node_from_bytes(&bytes);
        assert_eq!(node[0], 1);
        assert_eq!(node[1], 0x0200);
        assert_eq!(node_to_bytes(&node), bytes);
    }

    #[test]
    fn test_node_at_bounds() {
        let buffer = [0xABu8; HASH_BYTES * 2];
        assert!(node_at(&buffer, 1).is_some());
        assert!(node_at(&buffer, 2).is_none());
        assert!(node_at(&buffer[..HASH_BYTES + 3], 1).is_none());
    }
}
