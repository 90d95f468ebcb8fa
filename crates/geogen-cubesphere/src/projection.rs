//! Cube-to-sphere projection by normalizing the offset from a face's local up.
//!
//! A point `(a, b)` in face-parametric space `[-1, 1]²` maps to the unit
//! direction `normalize(local_up + axis_a * a + axis_b * b)`. This is the
//! plain gnomonic cube-sphere: cells near face corners are visibly smaller
//! than cells at face centers, and every vertex, patch center and patch edge
//! length in this workspace is derived from exactly this mapping.

use geogen_math::normalize_or_self;
use glam::{DVec2, DVec3};

/// The fixed basis of one cube face.
///
/// `axis_a` is a component rotation of `local_up` and `axis_b = local_up × axis_a`.
/// For the six axis-aligned face normals this is an orthonormal right-handed
/// basis. For any other `local_up` the axes are generally not perpendicular to
/// `local_up`; the projection still evaluates but no longer covers a cube face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    pub local_up: DVec3,
    pub axis_a: DVec3,
    pub axis_b: DVec3,
}

impl FaceBasis {
    /// Derive the face axes from the face's outward direction.
    #[must_use]
    pub fn from_local_up(local_up: DVec3) -> Self {
        let axis_a = DVec3::new(local_up.y, local_up.z, local_up.x);
        let axis_b = local_up.cross(axis_a);
        Self {
            local_up,
            axis_a,
            axis_b,
        }
    }

    /// Unit sphere direction for face-parametric coordinates `(a, b)`.
    #[inline]
    #[must_use]
    pub fn offset_normal(&self, a: f64, b: f64) -> DVec3 {
        normalize_or_self(self.local_up + self.axis_a * a + self.axis_b * b)
    }

    /// [`Self::offset_normal`] for a point in face-parametric space.
    #[inline]
    #[must_use]
    pub fn project(&self, p: DVec2) -> DVec3 {
        self.offset_normal(p.x, p.y)
    }
}
