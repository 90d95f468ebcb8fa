//! The seam between patch trees and whatever renders them.
//!
//! Patches never talk to a renderer directly. Each patch hands its geometry to
//! a [`GeometrySink`] exactly once, at construction, and keeps the returned
//! [`PatchHandle`] for the rest of its life. Every update tick reads the three
//! positions from that handle and pushes visibility changes through it.

use geogen_cubesphere::CubeFace;
use geogen_mesh::{IndexPattern, PatchMesh};
use glam::DVec3;

/// Geometry handed to the renderer when a patch is created.
#[derive(Clone, Copy, Debug)]
pub struct PatchGeometry<'a> {
    /// Face the patch belongs to.
    pub face: CubeFace,
    /// Depth in the face quadtree (0 = root).
    pub depth: usize,
    /// Index buffer shared by every patch of the planet.
    pub indices: &'a IndexPattern,
    /// Vertex, normal and uv buffers of this patch.
    pub mesh: &'a PatchMesh,
    /// Patch center relative to the planet center.
    pub center: DVec3,
}

/// Render-side accessors owned by one patch.
///
/// The position queries are read fresh on every update and must not have side
/// effects. A freshly registered patch is assumed visible.
pub trait PatchHandle {
    /// World position of this patch's center.
    fn chunk_position(&self) -> DVec3;
    /// World position of the viewer.
    fn camera_position(&self) -> DVec3;
    /// World position of the planet center.
    fn planet_center(&self) -> DVec3;
    /// Show or hide this patch's mesh. Repeating the current state is allowed.
    fn set_visible(&mut self, visible: bool);
}

/// Receives patch geometry and hands back the accessor for that patch.
pub trait GeometrySink {
    type Handle: PatchHandle;

    fn register(&mut self, geometry: &PatchGeometry<'_>) -> Self::Handle;
}
