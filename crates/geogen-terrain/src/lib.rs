//! Terrain displacement sources sampled by patch geometry construction.

mod heightmap;

pub use heightmap::{Heightmap, HeightmapError, SampledHeightmap};
