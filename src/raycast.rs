//! Voxel raycasting using DDA (Digital Differential Analyzer) grid traversal.

use glam::{DVec3, IVec3};

use crate::chunk::{blocks, BlockId};

/// Result of a raycast against the voxel world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The voxel that was hit (block coordinates).
    pub pos: IVec3,
    /// Unit normal of the face the ray entered through, pointing back toward
    /// the origin. `IVec3::ZERO` when the ray starts inside a solid voxel.
    pub normal: IVec3,
    /// Block found at the hit voxel.
    pub block_id: BlockId,
    /// Distance from the origin along the normalized ray.
    pub distance: f64,
}

/// Distance along the ray until `s` first crosses a grid boundary in the
/// direction of component `ds`. Infinite when the component is zero.
fn intbound(s: f64, ds: f64) -> f64 {
    if ds == 0.0 {
        f64::INFINITY
    } else if ds > 0.0 {
        ((s + 1.0).floor() - s) / ds
    } else {
        (s - s.floor()) / -ds
    }
}

#[inline]
fn step_sign(d: f64) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Walk the voxel grid from `origin` along `direction` until a non-air block
/// is found, `max_distance` is exceeded, or `step_limit` voxels were visited.
///
/// The direction is normalized internally; a zero-length direction yields no
/// hit. `block_at` is consulted for every visited voxel and is expected to
/// report [`blocks::AIR`] outside the world, so rays pass through unloaded
/// space instead of stopping at a boundary. `step_limit` guarantees
/// termination for any floating-point input.
pub fn raycast<F>(
    origin: DVec3,
    direction: DVec3,
    max_distance: f64,
    step_limit: u32,
    mut block_at: F,
) -> Option<RayHit>
where
    F: FnMut(IVec3) -> BlockId,
{
    let mag = direction.length();
    if mag <= 1e-9 {
        return None;
    }
    let dir = direction / mag;

    // Voxel containing the origin.
    let mut voxel = IVec3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );

    // Direction to step in each axis (-1, 0, or 1).
    let step = IVec3::new(step_sign(dir.x), step_sign(dir.y), step_sign(dir.z));

    // Distance along the ray to the next boundary crossing per axis.
    let mut t_max = DVec3::new(
        intbound(origin.x, dir.x),
        intbound(origin.y, dir.y),
        intbound(origin.z, dir.z),
    );

    // Distance between consecutive boundary crossings per axis.
    let t_delta = DVec3::new(
        if dir.x == 0.0 {
            f64::INFINITY
        } else {
            (1.0 / dir.x).abs()
        },
        if dir.y == 0.0 {
            f64::INFINITY
        } else {
            (1.0 / dir.y).abs()
        },
        if dir.z == 0.0 {
            f64::INFINITY
        } else {
            (1.0 / dir.z).abs()
        },
    );

    let mut normal = IVec3::ZERO;
    let mut t = 0.0;

    for _ in 0..step_limit {
        if t > max_distance {
            return None;
        }

        let block_id = block_at(voxel);
        if block_id != blocks::AIR {
            return Some(RayHit {
                pos: voxel,
                normal,
                block_id,
                distance: t,
            });
        }

        // Advance the axis with the nearest pending boundary. The priority
        // on exact ties is fixed (x before z, then y before z) so diagonal
        // rays take a reproducible path.
        if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                voxel.x += step.x;
                t = t_max.x;
                t_max.x += t_delta.x;
                normal = IVec3::new(-step.x, 0, 0);
            } else {
                voxel.z += step.z;
                t = t_max.z;
                t_max.z += t_delta.z;
                normal = IVec3::new(0, 0, -step.z);
            }
        } else if t_max.y < t_max.z {
            voxel.y += step.y;
            t = t_max.y;
            t_max.y += t_delta.y;
            normal = IVec3::new(0, -step.y, 0);
        } else {
            voxel.z += step.z;
            t = t_max.z;
            t_max.z += t_delta.z;
            normal = IVec3::new(0, 0, -step.z);
        }
    }

    None
}
