//! Six face quadtrees sharing one index pattern and one geometry sink.
//!
//! [`FaceGenerator`] owns the sink it was constructed with. Every root patch is
//! registered during [`FaceGenerator::new`], and children registered later by
//! [`FaceGenerator::update`] go through the same sink.

use std::sync::Arc;

use geogen_cubesphere::CubeFace;
use geogen_lod::{FaceContext, GeometrySink, Patch};
use geogen_mesh::{IndexPattern, SurfaceParams, vertex_count};
use geogen_terrain::Heightmap;
use tracing::info;

/// Planet parameters for a [`FaceGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct FaceGeneratorConfig {
    /// Base sphere radius.
    pub radius: f64,
    /// World-space displacement per heightmap byte unit.
    pub height: f64,
    /// Split distance per depth. The tree is at most `thresholds.len()` levels deep.
    pub thresholds: Vec<f64>,
    /// Grid cells per patch side.
    pub resolution: u32,
    /// One heightmap per face, in [`CubeFace::ALL`] order.
    pub heightmaps: [Arc<Heightmap>; 6],
}

impl Default for FaceGeneratorConfig {
    fn default() -> Self {
        Self {
            radius: 500.0,
            height: 100.0 / 255.0,
            thresholds: vec![1300.0, 900.0, 700.0, 400.0, 200.0],
            resolution: 16,
            heightmaps: std::array::from_fn(|_| Arc::new(Heightmap::Flat)),
        }
    }
}

/// Snapshot of the patch trees, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Patches built so far, across all faces.
    pub built_patches: usize,
    /// Patches whose own mesh is shown.
    pub visible_patches: usize,
    /// Patches currently represented by their children.
    pub detailed_patches: usize,
    /// Faces hidden by the far-hemisphere test.
    pub offsite_faces: usize,
    /// Deepest level built on any face.
    pub max_built_depth: usize,
}

/// Adaptive level-of-detail mesh for a whole cube-sphere planet.
pub struct FaceGenerator<S: GeometrySink> {
    sink: S,
    indices: Arc<IndexPattern>,
    roots: [Patch<S::Handle>; 6],
}

impl<S: GeometrySink> FaceGenerator<S> {
    /// Build the six root patches and register them with `sink`.
    pub fn new(config: FaceGeneratorConfig, mut sink: S) -> Self {
        let FaceGeneratorConfig {
            radius,
            height,
            thresholds,
            resolution,
            heightmaps,
        } = config;

        let indices = Arc::new(IndexPattern::new(resolution));
        let thresholds: Arc<[f64]> = thresholds.into();
        let surface = SurfaceParams {
            radius,
            height,
            resolution,
        };

        let roots = std::array::from_fn(|i| {
            let context = FaceContext::new(
                CubeFace::ALL[i],
                surface,
                Arc::clone(&thresholds),
                Arc::clone(&heightmaps[i]),
                Arc::clone(&indices),
            );
            Patch::root(Arc::new(context), &mut sink)
        });

        info!(
            "FaceGenerator initialized: radius {}, {} levels, {} vertices per patch, {} indices",
            radius,
            thresholds.len(),
            vertex_count(resolution),
            indices.indices().len()
        );

        Self {
            sink,
            indices,
            roots,
        }
    }

    /// Advance all six faces by one tick.
    pub fn update(&mut self) {
        for root in &mut self.roots {
            root.update(&mut self.sink);
        }
    }

    /// Root patches in [`CubeFace::ALL`] order.
    pub fn roots(&self) -> &[Patch<S::Handle>; 6] {
        &self.roots
    }

    pub fn root(&self, face: CubeFace) -> &Patch<S::Handle> {
        &self.roots[face.index()]
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Index buffer shared by every patch.
    pub fn index_pattern(&self) -> &Arc<IndexPattern> {
        &self.indices
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for root in &self.roots {
            if root.is_offsite() {
                stats.offsite_faces += 1;
            }
            root.visit(&mut |patch| {
                stats.built_patches += 1;
                stats.visible_patches += usize::from(patch.is_visible());
                stats.detailed_patches += usize::from(patch.is_detailed());
                stats.max_built_depth = stats.max_built_depth.max(patch.depth());
            });
        }
        stats
    }
}
