use std::collections::BTreeMap;

use crate::chunk::{Chunk, ChunkConfig, ChunkPos};

/// Split one world-space axis into chunk and local parts.
///
/// Euclidean division keeps the local coordinate in `[0, size)` for negative
/// world coordinates too, so `chunk * size + local == world` always holds.
#[inline]
pub fn split_axis(world: i32, size: usize) -> (i32, usize) {
    let size = size as i32;
    (world.div_euclid(size), world.rem_euclid(size) as usize)
}

/// In-memory chunk arena keyed by chunk coordinate.
/// Uses BTreeMap for deterministic iteration order.
///
/// Chunks are allocated on first write via [`ChunkStorage::ensure_chunk`];
/// reads of a missing chunk never allocate. There is no eviction — chunks
/// live for the session.
pub struct ChunkStorage {
    cfg: ChunkConfig,
    chunks: BTreeMap<ChunkPos, Chunk>,
}

impl ChunkStorage {
    /// Create an empty storage for chunks of the given dimensions.
    pub fn new(cfg: ChunkConfig) -> Self {
        Self {
            cfg,
            chunks: BTreeMap::new(),
        }
    }

    /// Dimensions shared by every chunk in this storage.
    pub fn chunk_config(&self) -> ChunkConfig {
        self.cfg
    }

    /// Number of resident chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true when no chunks have been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Obtain mutable access to a chunk, creating it if necessary.
    pub fn ensure_chunk(&mut self, pos: ChunkPos) -> &mut Chunk {
        let cfg = self.cfg;
        self.chunks.entry(pos).or_insert_with(|| Chunk::new(cfg))
    }

    /// Attempt to fetch a chunk immutably without allocating it.
    pub fn get(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Fetch a chunk mutably (without creating it).
    pub fn get_mut(&mut self, pos: ChunkPos) -> Option<&mut Chunk> {
        self.chunks.get_mut(&pos)
    }

    /// Iterate over currently resident chunk positions in sorted order.
    pub fn iter_positions(&self) -> impl Iterator<Item = ChunkPos> + '_ {
        self.chunks.keys().copied()
    }
}
