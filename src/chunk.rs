use std::fmt;

use serde::{Deserialize, Serialize};

/// Block identifier stored per voxel.
pub type BlockId = u8;

/// Reserved block IDs used by world population and interaction.
pub mod blocks {
    use super::BlockId;

    /// Reserved ID for empty space.
    pub const AIR: BlockId = 0;
    /// Surface block of populated columns.
    pub const GRASS: BlockId = 1;
    /// Subsurface layer under grass; also what `place_block` places.
    pub const DIRT: BlockId = 2;
    /// Everything below the dirt layer.
    pub const STONE: BlockId = 3;
}

/// Chunk dimensions in voxels. Chunks span the full world height, so there
/// is no vertical chunk coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Chunk width (X axis).
    pub size_x: usize,
    /// Chunk height (Y axis) — also the world height.
    pub size_y: usize,
    /// Chunk depth (Z axis).
    pub size_z: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size_x: 16,
            size_y: 96,
            size_z: 16,
        }
    }
}

impl ChunkConfig {
    /// Total voxel count per chunk.
    pub fn volume(&self) -> usize {
        self.size_x * self.size_y * self.size_z
    }
}

/// Chunk coordinate (X, Z) in chunk space.
/// Implements Ord for deterministic iteration in BTreeMap (sorts by x, then z).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkPos {
    /// Chunk X coordinate.
    pub x: i32,
    /// Chunk Z coordinate.
    pub z: i32,
}

impl ChunkPos {
    /// Build a chunk coordinate.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Dense block buffer for one chunk.
///
/// Owned exclusively by the chunk storage under its coordinate key; all
/// mutation goes through world-space `set_block`.
pub struct Chunk {
    cfg: ChunkConfig,
    blocks: Vec<BlockId>,
}

impl Chunk {
    /// Allocate a fresh chunk filled with air.
    pub fn new(cfg: ChunkConfig) -> Self {
        Self {
            cfg,
            blocks: vec![blocks::AIR; cfg.volume()],
        }
    }

    fn index(&self, lx: usize, ly: usize, lz: usize) -> usize {
        debug_assert!(lx < self.cfg.size_x);
        debug_assert!(ly < self.cfg.size_y);
        debug_assert!(lz < self.cfg.size_z);
        (ly * self.cfg.size_z + lz) * self.cfg.size_x + lx
    }

    /// Fetch a block copy at a chunk-local coordinate.
    pub fn get_local(&self, lx: usize, ly: usize, lz: usize) -> BlockId {
        self.blocks[self.index(lx, ly, lz)]
    }

    /// Overwrite the block at a chunk-local coordinate.
    pub fn set_local(&mut self, lx: usize, ly: usize, lz: usize, id: BlockId) {
        let idx = self.index(lx, ly, lz);
        self.blocks[idx] = id;
    }
}
