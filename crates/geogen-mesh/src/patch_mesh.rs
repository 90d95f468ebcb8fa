//! Vertex, normal and uv buffers for one patch of a cube face.
//!
//! A patch covers a rectangle of face-parametric space (`vert_box`) and an
//! independent rectangle of texture space (`uv_box`). Its `(r + 1)²` grid is
//! projected onto the sphere and displaced by the face heightmap, then four
//! skirt rings are appended: copies of the border vertices pulled towards the
//! planet center so that a coarser neighbour's edge never reveals a crack.

use geogen_cubesphere::FaceBasis;
use geogen_math::Rect2;
use geogen_terrain::Heightmap;
use glam::{DVec2, DVec3};

/// Surface parameters shared by every patch of a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    /// Base sphere radius.
    pub radius: f64,
    /// Multiplier applied to raw heightmap samples.
    pub height: f64,
    /// Grid cells per patch edge.
    pub resolution: u32,
}

impl SurfaceParams {
    /// Mean of the undisplaced and fully displaced radius.
    pub fn average_radius(&self) -> f64 {
        self.radius + self.height * 0.5
    }
}

/// Number of grid vertices of a patch: `(r + 1)²`.
pub fn grid_vertex_count(resolution: u32) -> usize {
    let r1 = resolution as usize + 1;
    r1 * r1
}

/// Total vertices of a patch: the grid plus four skirt rings, `r² + 6r + 5`.
pub fn vertex_count(resolution: u32) -> usize {
    let r = resolution as usize;
    r * r + 2 * r + 1 + r * 4 + 4
}

/// Immutable geometry of one patch.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchMesh {
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
}

impl PatchMesh {
    /// Build the grid and skirt geometry for one patch.
    pub fn build(
        basis: &FaceBasis,
        vert_box: Rect2,
        uv_box: Rect2,
        params: SurfaceParams,
        heightmap: &Heightmap,
    ) -> Self {
        let res = f64::from(params.resolution);
        let res_divisor = 1.0 / res;
        let vert_step = vert_box.size() * (res_divisor * 0.5);

        let calc_rel =
            |rect: &Rect2, x: f64, y: f64| rect.lerp_point(x * res_divisor, y * res_divisor);
        let surface = |uv: DVec2| params.radius + heightmap.sample(uv) * params.height;

        let mut builder = MeshBuilder::with_capacity(vertex_count(params.resolution));

        for y in 0..=params.resolution {
            for x in 0..=params.resolution {
                let (x, y) = (f64::from(x), f64::from(y));
                let uv = calc_rel(&uv_box, x, y);
                let norm = basis.project(calc_rel(&vert_box, x, y));
                builder.push(uv, norm, norm * surface(uv));
            }
        }

        // Skirts keep the border normal and the border height but store the uv
        // one cell inward; the radius shrinks by half a cell on the edge's axis.
        let steps = || (0..=params.resolution).map(f64::from);

        for x in steps() {
            let norm = basis.offset_normal(calc_rel(&vert_box, x, 0.0).x, vert_box.min.y);
            let edge_uv = calc_rel(&uv_box, x, 0.0);
            let vert = norm * surface(edge_uv) * (1.0 - vert_step.y);
            builder.push(calc_rel(&uv_box, x, 1.0), norm, vert);
        }

        for y in steps() {
            let norm = basis.offset_normal(vert_box.max.x, calc_rel(&vert_box, 0.0, y).y);
            let edge_uv = calc_rel(&uv_box, res, y);
            let vert = norm * surface(edge_uv) * (1.0 - vert_step.x);
            builder.push(calc_rel(&uv_box, res - 1.0, y), norm, vert);
        }

        for x in steps().rev() {
            let norm = basis.offset_normal(calc_rel(&vert_box, x, 0.0).x, vert_box.max.y);
            let edge_uv = calc_rel(&uv_box, x, res);
            let vert = norm * surface(edge_uv) * (1.0 - vert_step.y);
            builder.push(calc_rel(&uv_box, x, res - 1.0), norm, vert);
        }

        for y in steps().rev() {
            let norm = basis.offset_normal(vert_box.min.x, calc_rel(&vert_box, 0.0, y).y);
            let edge_uv = calc_rel(&uv_box, 0.0, y);
            let vert = norm * surface(edge_uv) * (1.0 - vert_step.x);
            builder.push(calc_rel(&uv_box, 1.0, y), norm, vert);
        }

        builder.finish()
    }

    /// Number of vertices written; always [`vertex_count`] of the resolution.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Vertex positions as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }
}

/// Appends vertices to the three parallel buffers.
struct MeshBuilder {
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
}

impl MeshBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
            uvs: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, uv: DVec2, normal: DVec3, vertex: DVec3) {
        self.uvs.push(uv.as_vec2().to_array());
        self.normals.push(normal.as_vec3().to_array());
        self.vertices.push(vertex.as_vec3().to_array());
    }

    fn finish(self) -> PatchMesh {
        PatchMesh {
            vertices: self.vertices,
            normals: self.normals,
            uvs: self.uvs,
        }
    }
}
