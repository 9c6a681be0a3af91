//! World-space voxel access: population from terrain, block queries, column
//! scans, interaction, and the raycast entry point.

use glam::{DVec3, IVec3};
use tracing::{debug, instrument};

use crate::chunk::{blocks, BlockId, ChunkConfig, ChunkPos};
use crate::raycast::{self, RayHit};
use crate::storage::{split_axis, ChunkStorage};
use crate::terrain::Terrain;

/// Default dirt thickness below the grass surface.
pub const DEFAULT_DIRT_DEPTH: usize = 4;
/// Default lowest populated layer.
pub const DEFAULT_BASE_LEVEL: usize = 0;

/// Sparse chunked voxel world with a fixed horizontal extent.
///
/// All queries take world-space coordinates. Reads outside the world or in a
/// not-yet-allocated chunk return [`blocks::AIR`]; writes outside the world
/// are silent no-ops. Chunks allocate lazily on first in-bounds write.
pub struct VoxelWorld {
    cfg: ChunkConfig,
    storage: ChunkStorage,
    world_width: usize,
    world_depth: usize,
}

impl VoxelWorld {
    /// Create an empty world of the given horizontal extent.
    pub fn new(cfg: ChunkConfig, world_width: usize, world_depth: usize) -> Self {
        Self {
            cfg,
            storage: ChunkStorage::new(cfg),
            world_width,
            world_depth,
        }
    }

    /// Populate a world from a generated height field.
    ///
    /// Every column is fully solid from `base_level` up to its surface:
    /// grass on top, `dirt_depth` layers of dirt beneath it, stone below
    /// that. Surfaces above the chunk height are clamped.
    #[instrument(skip(terrain, cfg), fields(width = terrain.width(), depth = terrain.depth()))]
    pub fn from_terrain(
        terrain: &Terrain,
        cfg: ChunkConfig,
        dirt_depth: usize,
        base_level: usize,
    ) -> Self {
        debug!("populating world from terrain");
        let mut world = Self::new(cfg, terrain.width(), terrain.depth());
        let max_y = cfg.size_y - 1;

        for z in 0..terrain.depth() {
            for x in 0..terrain.width() {
                let h = terrain.height(x, z) as usize;
                let top = h.min(max_y).max(base_level);
                for y in base_level..=top {
                    let id = if y == top {
                        blocks::GRASS
                    } else if y + dirt_depth >= top {
                        blocks::DIRT
                    } else {
                        blocks::STONE
                    };
                    world.set_block(x as i32, y as i32, z as i32, id);
                }
            }
        }

        debug!(chunks = world.storage.len(), "world population complete");
        world
    }

    /// Dimensions shared by every chunk.
    pub fn chunk_config(&self) -> ChunkConfig {
        self.cfg
    }

    /// Horizontal extent (X axis) in voxels.
    pub fn width(&self) -> usize {
        self.world_width
    }

    /// Horizontal extent (Z axis) in voxels.
    pub fn depth(&self) -> usize {
        self.world_depth
    }

    /// Number of chunks allocated so far.
    pub fn chunk_count(&self) -> usize {
        self.storage.len()
    }

    fn in_bounds_xz(&self, x: i32, z: i32) -> bool {
        x >= 0 && (x as usize) < self.world_width && z >= 0 && (z as usize) < self.world_depth
    }

    fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        self.in_bounds_xz(x, z) && y >= 0 && (y as usize) < self.cfg.size_y
    }

    /// Block at a world-space coordinate.
    ///
    /// Out-of-bounds coordinates and unallocated chunks read as air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_bounds(x, y, z) {
            return blocks::AIR;
        }
        let (cx, lx) = split_axis(x, self.cfg.size_x);
        let (cz, lz) = split_axis(z, self.cfg.size_z);
        match self.storage.get(ChunkPos::new(cx, cz)) {
            Some(chunk) => chunk.get_local(lx, y as usize, lz),
            None => blocks::AIR,
        }
    }

    /// Set the block at a world-space coordinate.
    ///
    /// Out-of-bounds writes are silently ignored; in-bounds writes allocate
    /// the containing chunk on demand.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let (cx, lx) = split_axis(x, self.cfg.size_x);
        let (cz, lz) = split_axis(z, self.cfg.size_z);
        self.storage
            .ensure_chunk(ChunkPos::new(cx, cz))
            .set_local(lx, y as usize, lz, id);
    }

    /// Highest non-air Y in the column at `(x, z)`, or -1 when the column is
    /// out of bounds or empty.
    pub fn top_solid_y(&self, x: i32, z: i32) -> i32 {
        if !self.in_bounds_xz(x, z) {
            return -1;
        }
        for y in (0..self.cfg.size_y as i32).rev() {
            if self.get_block(x, y, z) != blocks::AIR {
                return y;
            }
        }
        -1
    }

    /// Cast a ray through the world and return the first solid voxel hit.
    ///
    /// See [`raycast::raycast`] for the traversal contract; voxels outside
    /// the world read as air and never stop the ray.
    pub fn raycast(
        &self,
        origin: DVec3,
        direction: DVec3,
        max_distance: f64,
        step_limit: u32,
    ) -> Option<RayHit> {
        raycast::raycast(origin, direction, max_distance, step_limit, |pos: IVec3| {
            self.get_block(pos.x, pos.y, pos.z)
        })
    }

    /// Remove the block a raycast hit.
    pub fn break_block(&mut self, hit: &RayHit) {
        self.set_block(hit.pos.x, hit.pos.y, hit.pos.z, blocks::AIR);
    }

    /// Place a dirt block against the face a raycast hit.
    ///
    /// The target voxel is the hit voxel offset by the hit normal; nothing
    /// happens if it is already occupied.
    pub fn place_block(&mut self, hit: &RayHit) {
        let target = hit.pos + hit.normal;
        if self.get_block(target.x, target.y, target.z) == blocks::AIR {
            self.set_block(target.x, target.y, target.z, blocks::DIRT);
        }
    }

    /// Flat copy of every voxel, indexed `(y * depth + z) * width + x`.
    ///
    /// Read-only bulk export for one-shot upload to a renderer.
    pub fn snapshot_dense(&self) -> Vec<BlockId> {
        let mut out = Vec::with_capacity(self.cfg.size_y * self.world_depth * self.world_width);
        for y in 0..self.cfg.size_y {
            for z in 0..self.world_depth {
                for x in 0..self.world_width {
                    out.push(self.get_block(x as i32, y as i32, z as i32));
                }
            }
        }
        out
    }
}
