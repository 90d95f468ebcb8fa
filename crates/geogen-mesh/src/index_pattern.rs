//! Fixed triangulation of a patch grid and its four skirt stripes.
//!
//! The pattern depends only on the grid resolution, so a single instance is
//! built per planet and shared by every patch at every depth.
//!
//! Vertex layout it indexes (see [`crate::PatchMesh`]):
//! - `(r + 1)²` grid vertices, row-major
//! - four skirt runs of `r + 1` vertices each, in the order top, right,
//!   bottom, left, each run walking the edge the same direction as the
//!   matching stripe below

/// Trailing index slots reserved for skirt corner duplicates. They are left zeroed.
pub const SKIRT_CORNER_SLOTS: usize = 4;

/// Triangle indices for one patch resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexPattern {
    resolution: u32,
    indices: Vec<u32>,
}

impl IndexPattern {
    /// Build the pattern for a grid of `resolution × resolution` cells.
    pub fn new(resolution: u32) -> Self {
        let r = resolution as usize;
        let r1 = r + 1;
        let r12 = r1 * r1;

        let mut indices = Vec::with_capacity(Self::index_count(resolution));

        // Two triangles per grid cell.
        let row = r1 as u32;
        for y in 0..r {
            for x in 0..r {
                let i = (y * r1 + x) as u32;
                indices.extend_from_slice(&[i, i + row + 1, i + row, i, i + 1, i + row + 1]);
            }
        }

        // Edge runs as (start, step): top, right, bottom, left.
        let edges: [(i64, i64); 4] = [
            (0, 1),
            (r as i64, r1 as i64),
            (r12 as i64 - 1, -1),
            ((r1 * r) as i64, -(r1 as i64)),
        ];

        for (stripe_index, (start, step)) in edges.into_iter().enumerate() {
            let mut stripe = Vec::with_capacity(2 * r1);
            stripe.extend((0..r1 as i64).map(|x| (start + step * x) as u32));
            stripe.extend((0..r1).map(|x| (r12 + stripe_index * r1 + x) as u32));

            for i in 0..r {
                indices.extend_from_slice(&[
                    stripe[i],
                    stripe[i + r1],
                    stripe[i + r1 + 1],
                    stripe[i],
                    stripe[i + r1 + 1],
                    stripe[i + 1],
                ]);
            }
        }

        indices.resize(indices.len() + SKIRT_CORNER_SLOTS, 0);

        Self {
            resolution,
            indices,
        }
    }

    /// Total index entries for `resolution`: `6·r·(r + 4)` stitched entries plus the corner slots.
    pub fn index_count(resolution: u32) -> usize {
        let r = resolution as usize;
        6 * r * (r + 4) + SKIRT_CORNER_SLOTS
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The full index buffer, including the trailing corner slots.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Only the entries that form complete triangles.
    pub fn stitched(&self) -> &[u32] {
        &self.indices[..self.indices.len() - SKIRT_CORNER_SLOTS]
    }

    /// Complete triangles: grid cells first, then the four skirt stripes.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.stitched().chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// The index buffer as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
