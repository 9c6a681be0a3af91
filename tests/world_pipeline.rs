//! End-to-end pipeline: terrain synthesis, world population, raycast
//! interaction, and dense export.

use glam::{DVec3, IVec3};
use voxelfield::{blocks, generate_terrain, ChunkConfig, TerrainConfig, VoxelWorld};

fn test_config() -> TerrainConfig {
    TerrainConfig {
        width: 32,
        depth: 32,
        seed: 42,
        max_height: 12,
        octaves: 4,
        ..Default::default()
    }
}

fn test_chunks() -> ChunkConfig {
    ChunkConfig {
        size_x: 8,
        size_y: 32,
        size_z: 8,
    }
}

#[test]
fn populated_columns_match_the_height_field() {
    let terrain = generate_terrain(&test_config()).unwrap();
    let world = VoxelWorld::from_terrain(&terrain, test_chunks(), 4, 0);

    for z in 0..32 {
        for x in 0..32 {
            let h = terrain.height(x, z) as i32;
            assert_eq!(world.top_solid_y(x as i32, z as i32), h);
            assert_eq!(world.get_block(x as i32, h, z as i32), blocks::GRASS);
        }
    }
}

#[test]
fn dig_and_build_cycle() {
    let terrain = generate_terrain(&test_config()).unwrap();
    let mut world = VoxelWorld::from_terrain(&terrain, test_chunks(), 4, 0);

    let h = terrain.height(16, 16) as i32;

    // Look straight down at the center column from above the world.
    let down = DVec3::new(0.0, -1.0, 0.0);
    let eye = DVec3::new(16.5, 40.0, 16.5);

    let hit = world.raycast(eye, down, 64.0, 4096).expect("surface hit");
    assert_eq!(hit.pos, IVec3::new(16, h, 16));
    assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    assert_eq!(hit.block_id, blocks::GRASS);

    // Build on top of the surface.
    world.place_block(&hit);
    assert_eq!(world.get_block(16, h + 1, 16), blocks::DIRT);
    assert_eq!(world.top_solid_y(16, 16), h + 1);

    // Dig the placed block back out.
    let hit = world.raycast(eye, down, 64.0, 4096).expect("placed block hit");
    assert_eq!(hit.pos, IVec3::new(16, h + 1, 16));
    assert_eq!(hit.block_id, blocks::DIRT);
    world.break_block(&hit);
    assert_eq!(world.top_solid_y(16, 16), h);
}

#[test]
fn snapshot_matches_block_queries() {
    let terrain = generate_terrain(&test_config()).unwrap();
    let world = VoxelWorld::from_terrain(&terrain, test_chunks(), 4, 0);

    let snapshot = world.snapshot_dense();
    assert_eq!(snapshot.len(), 32 * 32 * 32);

    for y in 0..32usize {
        for z in (0..32usize).step_by(7) {
            for x in (0..32usize).step_by(5) {
                assert_eq!(
                    snapshot[(y * 32 + z) * 32 + x],
                    world.get_block(x as i32, y as i32, z as i32),
                    "snapshot mismatch at ({x}, {y}, {z})"
                );
            }
        }
    }
}

#[test]
fn identical_configs_build_identical_worlds() {
    let terrain_a = generate_terrain(&test_config()).unwrap();
    let terrain_b = generate_terrain(&test_config()).unwrap();
    let world_a = VoxelWorld::from_terrain(&terrain_a, test_chunks(), 4, 0);
    let world_b = VoxelWorld::from_terrain(&terrain_b, test_chunks(), 4, 0);
    assert_eq!(world_a.snapshot_dense(), world_b.snapshot_dense());
}
