//! Deterministic voxel world core.
//!
//! Generates a block world from a fractal value-noise height field, stores it
//! in lazily allocated chunks, and answers ray-based block queries for
//! interaction (breaking and placing). Rendering, input, and the command-line
//! entry point live in embedding crates; this crate has no I/O and no
//! internal threading.

mod chunk;
mod noise;
mod raycast;
mod storage;
mod terrain;
mod world;

pub use chunk::*;
pub use raycast::*;
pub use storage::*;
pub use terrain::*;
pub use world::*;
