//! Property tests for coordinate mapping, block round trips, and raycast
//! robustness over arbitrary inputs.

use glam::DVec3;
use proptest::prelude::*;
use voxelfield::{blocks, generate_terrain, split_axis, ChunkConfig, TerrainConfig, VoxelWorld};

fn small_chunks() -> ChunkConfig {
    ChunkConfig {
        size_x: 4,
        size_y: 16,
        size_z: 4,
    }
}

proptest! {
    /// Property: axis splitting keeps locals in range and reassembles exactly
    #[test]
    fn split_axis_round_trips(
        world in -100_000i32..100_000,
        size in 1usize..64,
    ) {
        let (chunk, local) = split_axis(world, size);
        prop_assert!(local < size);
        prop_assert_eq!(chunk * size as i32 + local as i32, world);
    }

    /// Property: any in-bounds write reads back, for the full ID range
    #[test]
    fn set_get_round_trips(
        x in 0i32..32,
        y in 0i32..16,
        z in 0i32..32,
        id in any::<u8>(),
    ) {
        let mut world = VoxelWorld::new(small_chunks(), 32, 32);
        world.set_block(x, y, z, id);
        prop_assert_eq!(world.get_block(x, y, z), id);
    }

    /// Property: out-of-bounds writes never stick, out-of-bounds reads are air
    #[test]
    fn out_of_bounds_is_sentinel(
        x in -64i32..96,
        y in -32i32..48,
        z in -64i32..96,
    ) {
        let mut world = VoxelWorld::new(small_chunks(), 32, 32);
        let in_bounds = (0..32).contains(&x) && (0..16).contains(&y) && (0..32).contains(&z);
        world.set_block(x, y, z, blocks::STONE);
        if in_bounds {
            prop_assert_eq!(world.get_block(x, y, z), blocks::STONE);
        } else {
            prop_assert_eq!(world.get_block(x, y, z), blocks::AIR);
            prop_assert_eq!(world.chunk_count(), 0);
        }
    }

    /// Property: generated heights never leave [0, max_height]
    #[test]
    fn terrain_heights_bounded(
        seed in any::<i64>(),
        width in 2usize..24,
        depth in 2usize..24,
        max_height in 1u32..64,
    ) {
        let config = TerrainConfig {
            width,
            depth,
            seed,
            max_height,
            octaves: 3,
            ..Default::default()
        };
        let terrain = generate_terrain(&config).expect("config is valid");
        for &h in terrain.heights() {
            prop_assert!(h <= max_height);
        }
    }

    /// Property: identical configs generate byte-identical grids
    #[test]
    fn terrain_generation_is_deterministic(
        seed in any::<i64>(),
        width in 2usize..16,
        depth in 2usize..16,
    ) {
        let config = TerrainConfig {
            width,
            depth,
            seed,
            max_height: 32,
            octaves: 4,
            ..Default::default()
        };
        let a = generate_terrain(&config).expect("config is valid");
        let b = generate_terrain(&config).expect("config is valid");
        prop_assert_eq!(a.heights(), b.heights());
    }

    /// Property: arbitrary finite rays terminate and honor max_distance
    #[test]
    fn raycast_terminates_within_budget(
        ox in -50.0f64..50.0,
        oy in -20.0f64..40.0,
        oz in -50.0f64..50.0,
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        dz in -1.0f64..1.0,
    ) {
        let config = TerrainConfig {
            width: 16,
            depth: 16,
            seed: 7,
            max_height: 8,
            octaves: 2,
            ..Default::default()
        };
        let terrain = generate_terrain(&config).expect("config is valid");
        let world = VoxelWorld::from_terrain(&terrain, small_chunks(), 4, 0);

        if let Some(hit) = world.raycast(
            DVec3::new(ox, oy, oz),
            DVec3::new(dx, dy, dz),
            30.0,
            512,
        ) {
            prop_assert!(hit.distance <= 30.0);
            prop_assert_ne!(hit.block_id, blocks::AIR);
        }
    }
}
