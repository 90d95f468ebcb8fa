//! Recursive LOD patch: one node of a cube face's quadtree.
//!
//! Each patch builds its mesh once, when it is created, and registers it with
//! the renderer. On every update it either stays the visible representation of
//! its region or hands that role to four children covering its quadrants. The
//! children are built the first time they are needed and then kept for the
//! lifetime of the tree: collapsing a subtree only hides it.
//!
//! Per update, in order:
//! 1. no threshold left at this depth: nothing to decide
//! 2. whole-face patches hide themselves and their subtree while the viewer is
//!    on the far hemisphere
//! 3. the distance from the viewer to the patch's near edge is compared to the
//!    depth's threshold through a [`HysteresisBand`]

use std::sync::Arc;

use geogen_cubesphere::{CubeFace, FaceBasis};
use geogen_math::Rect2;
use geogen_mesh::{IndexPattern, PatchMesh, SurfaceParams};
use geogen_terrain::Heightmap;
use glam::DVec3;
use tracing::{debug, trace};

use crate::horizon::{hemisphere_alignment, is_far_hemisphere, spans_full_face};
use crate::hysteresis::{HysteresisBand, LodAction};
use crate::sink::{GeometrySink, PatchGeometry, PatchHandle};

/// Everything the patches of one face share.
#[derive(Clone, Debug)]
pub struct FaceContext {
    pub face: CubeFace,
    pub basis: FaceBasis,
    pub surface: SurfaceParams,
    /// One split distance per depth; the tree never grows deeper than its length.
    pub thresholds: Arc<[f64]>,
    pub heightmap: Arc<Heightmap>,
    pub indices: Arc<IndexPattern>,
}

impl FaceContext {
    pub fn new(
        face: CubeFace,
        surface: SurfaceParams,
        thresholds: Arc<[f64]>,
        heightmap: Arc<Heightmap>,
        indices: Arc<IndexPattern>,
    ) -> Self {
        Self {
            face,
            basis: face.basis(),
            surface,
            thresholds,
            heightmap,
            indices,
        }
    }
}

/// A node of the per-face patch quadtree.
pub struct Patch<H> {
    context: Arc<FaceContext>,
    vert_box: Rect2,
    uv_box: Rect2,
    depth: usize,
    mesh: PatchMesh,
    center: DVec3,
    side_step: f64,
    handle: H,
    children: Option<Box<[Patch<H>; 4]>>,
    visible: bool,
    is_detailed: bool,
    is_offsite: bool,
}

impl<H: PatchHandle> Patch<H> {
    /// Create the root patch covering the whole face.
    pub fn root<S>(context: Arc<FaceContext>, sink: &mut S) -> Self
    where
        S: GeometrySink<Handle = H>,
    {
        Self::new(context, Rect2::FACE, Rect2::UNIT, 0, sink)
    }

    /// Build the patch geometry and register it with `sink`.
    pub fn new<S>(
        context: Arc<FaceContext>,
        vert_box: Rect2,
        uv_box: Rect2,
        depth: usize,
        sink: &mut S,
    ) -> Self
    where
        S: GeometrySink<Handle = H>,
    {
        let basis = &context.basis;
        let mesh = PatchMesh::build(basis, vert_box, uv_box, context.surface, &context.heightmap);

        let avg_radius = context.surface.average_radius();
        let center = basis.project(vert_box.center()) * avg_radius;
        let vert_min = basis.offset_normal(vert_box.min.x, vert_box.min.y) * avg_radius;
        let vert_max = basis.offset_normal(vert_box.max.x, vert_box.min.y) * avg_radius;
        let side_step = (vert_max - vert_min).length() * 0.5;

        let handle = sink.register(&PatchGeometry {
            face: context.face,
            depth,
            indices: &context.indices,
            mesh: &mesh,
            center,
        });
        trace!(face = ?context.face, depth, ?center, side_step, "patch registered");

        Self {
            context,
            vert_box,
            uv_box,
            depth,
            mesh,
            center,
            side_step,
            handle,
            children: None,
            visible: true,
            is_detailed: false,
            is_offsite: false,
        }
    }

    /// Advance this patch and its detailed descendants by one tick.
    ///
    /// `sink` receives the geometry of any children built during the tick.
    pub fn update<S>(&mut self, sink: &mut S)
    where
        S: GeometrySink<Handle = H>,
    {
        let Some(threshold) = self.threshold() else {
            return;
        };

        let chunk_pos = self.handle.chunk_position();
        let camera_pos = self.handle.camera_position();
        let planet_pos = self.handle.planet_center();

        if spans_full_face(&self.vert_box) {
            let far = is_far_hemisphere(hemisphere_alignment(chunk_pos, camera_pos, planet_pos));

            if far && !self.is_offsite {
                debug!(face = ?self.face(), "face moved to the far hemisphere");
                self.set_own_visible(false);
                self.is_offsite = true;
                self.is_detailed = false;
                self.hide_children();
                return;
            }

            if self.is_offsite {
                if far {
                    return;
                }
                debug!(face = ?self.face(), "face back on the near hemisphere");
                self.set_own_visible(true);
                self.is_offsite = false;
            }
        }

        let distance = (chunk_pos - camera_pos).length() - self.side_step;

        match HysteresisBand::new(threshold).decide(self.is_detailed, distance) {
            LodAction::Split => {
                debug!(face = ?self.face(), depth = self.depth, distance, threshold, "split");
                self.set_own_visible(false);
                self.is_detailed = true;
                if self.children.is_none() {
                    self.children = Some(Box::new(self.build_children(sink)));
                }
                if let Some(children) = self.children.as_deref_mut() {
                    for child in children.iter_mut() {
                        child.set_visible(true);
                        child.update(sink);
                    }
                }
            }
            LodAction::Merge => {
                debug!(face = ?self.face(), depth = self.depth, distance, threshold, "merge");
                self.set_own_visible(true);
                self.is_detailed = false;
                if let Some(children) = self.children.as_deref_mut() {
                    for child in children.iter_mut() {
                        child.update(sink);
                        child.set_visible(false);
                    }
                }
            }
            LodAction::Keep => {
                if self.is_detailed
                    && let Some(children) = self.children.as_deref_mut()
                {
                    for child in children.iter_mut() {
                        child.update(sink);
                    }
                }
            }
        }
    }

    fn build_children<S>(&self, sink: &mut S) -> [Patch<H>; 4]
    where
        S: GeometrySink<Handle = H>,
    {
        let verts = self.vert_box.quadrants();
        let uvs = self.uv_box.quadrants();
        std::array::from_fn(|i| {
            Patch::new(
                Arc::clone(&self.context),
                verts[i],
                uvs[i],
                self.depth + 1,
                sink,
            )
        })
    }

    /// Show or hide this patch. Hiding also hides every built descendant.
    fn set_visible(&mut self, visible: bool) {
        self.set_own_visible(visible);
        if !visible {
            self.is_detailed = false;
            self.hide_children();
        }
    }

    fn set_own_visible(&mut self, visible: bool) {
        self.handle.set_visible(visible);
        self.visible = visible;
    }

    fn hide_children(&mut self) {
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                child.set_visible(false);
            }
        }
    }
}

impl<H> Patch<H> {
    pub fn face(&self) -> CubeFace {
        self.context.face
    }

    /// Depth in the face quadtree (0 = root).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Split distance used at this depth, if the tree may grow further here.
    ///
    /// A zero threshold stops subdivision like a missing one.
    pub fn threshold(&self) -> Option<f64> {
        self.context
            .thresholds
            .get(self.depth)
            .copied()
            .filter(|t| *t != 0.0)
    }

    pub fn vert_box(&self) -> Rect2 {
        self.vert_box
    }

    pub fn uv_box(&self) -> Rect2 {
        self.uv_box
    }

    pub fn mesh(&self) -> &PatchMesh {
        &self.mesh
    }

    pub fn indices(&self) -> &Arc<IndexPattern> {
        &self.context.indices
    }

    /// Patch center relative to the planet center, at the average displaced radius.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Half the projected length of the patch's first edge.
    pub fn side_step(&self) -> f64 {
        self.side_step
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Whether this patch's own mesh is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the children are the visible representation.
    pub fn is_detailed(&self) -> bool {
        self.is_detailed
    }

    /// Whether the whole face is hidden because the viewer is on the far side.
    pub fn is_offsite(&self) -> bool {
        self.is_offsite
    }

    /// The four children, once built.
    pub fn children(&self) -> Option<&[Patch<H>; 4]> {
        self.children.as_deref()
    }

    /// Visit this patch and every built descendant, parents before children.
    pub fn visit<F>(&self, f: &mut F)
    where
        F: FnMut(&Patch<H>),
    {
        f(self);
        if let Some(children) = self.children() {
            for child in children {
                child.visit(f);
            }
        }
    }
}
