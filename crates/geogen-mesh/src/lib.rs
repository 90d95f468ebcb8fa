//! Patch meshing: the shared triangle index pattern and per-patch vertex, normal and uv buffers with seam skirts.

pub mod index_pattern;
pub mod patch_mesh;

pub use index_pattern::{IndexPattern, SKIRT_CORNER_SLOTS};
pub use patch_mesh::{PatchMesh, SurfaceParams, grid_vertex_count, vertex_count};
