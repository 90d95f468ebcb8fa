use glam::DVec2;

use crate::lerp;

/// Axis-aligned 2D box given by two corners.
///
/// Used for a patch's footprint on the cube face (`[-1, 1]²` space) and for its
/// texture footprint (`[0, 1]²` space). Corners are kept exactly as given:
/// an inverted box (`min > max` on some axis) is valid and simply mirrors
/// every interpolation along that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect2 {
    /// The full cube face in face-parametric space.
    pub const FACE: Rect2 = Rect2 {
        min: DVec2::new(-1.0, -1.0),
        max: DVec2::new(1.0, 1.0),
    };

    /// The full texture in uv space.
    pub const UNIT: Rect2 = Rect2 {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    /// Create a box from its two corners.
    #[must_use]
    pub const fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Signed extent along each axis (`max - min`).
    #[must_use]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    #[must_use]
    pub fn half_size(&self) -> DVec2 {
        self.size() * 0.5
    }

    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.min + self.half_size()
    }

    /// Point at relative position `(tx, ty)` inside the box, interpolated per axis.
    #[inline]
    #[must_use]
    pub fn lerp_point(&self, tx: f64, ty: f64) -> DVec2 {
        DVec2::new(
            lerp(self.min.x, self.max.x, tx),
            lerp(self.min.y, self.max.y, ty),
        )
    }

    /// Split into four equal quadrants.
    ///
    /// Ordered \[bottom-left, bottom-right, top-left, top-right\], i.e. the
    /// quadrant at `(0, 0)`, `(1, 0)`, `(0, 1)`, `(1, 1)` in half-size steps.
    #[must_use]
    pub fn quadrants(&self) -> [Rect2; 4] {
        let half = self.half_size();
        let mid = self.min + half;
        [
            Rect2::new(self.min, mid),
            Rect2::new(
                DVec2::new(mid.x, self.min.y),
                DVec2::new(self.max.x, mid.y),
            ),
            Rect2::new(
                DVec2::new(self.min.x, mid.y),
                DVec2::new(mid.x, self.max.y),
            ),
            Rect2::new(mid, self.max),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_box_size_and_center() {
        assert_eq!(Rect2::FACE.size(), DVec2::new(2.0, 2.0));
        assert_eq!(Rect2::FACE.center(), DVec2::ZERO);
        assert_eq!(Rect2::UNIT.center(), DVec2::splat(0.5));
    }

    #[test]
    fn test_lerp_point_corners() {
        let r = Rect2::new(DVec2::new(-1.0, 0.0), DVec2::new(1.0, 4.0));
        assert_eq!(r.lerp_point(0.0, 0.0), r.min);
        assert_eq!(r.lerp_point(1.0, 1.0), r.max);
        assert_eq!(r.lerp_point(0.5, 0.25), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_quadrants_tile_parent() {
        let parent = Rect2::FACE;
        let q = parent.quadrants();
        assert_eq!(q[0], Rect2::new(DVec2::new(-1.0, -1.0), DVec2::ZERO));
        assert_eq!(q[1], Rect2::new(DVec2::new(0.0, -1.0), DVec2::new(1.0, 0.0)));
        assert_eq!(q[2], Rect2::new(DVec2::new(-1.0, 0.0), DVec2::new(0.0, 1.0)));
        assert_eq!(q[3], Rect2::new(DVec2::ZERO, DVec2::ONE));

        let area: f64 = q.iter().map(|r| r.size().x * r.size().y).sum();
        assert!((area - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadrants_of_inverted_box_stay_inverted() {
        let inverted = Rect2::new(DVec2::ONE, DVec2::ZERO);
        for q in inverted.quadrants() {
            assert!(q.size().x < 0.0 && q.size().y < 0.0);
        }
        assert_eq!(inverted.quadrants()[0].min, DVec2::ONE);
    }

    #[test]
    fn test_quadrant_size_is_half() {
        let r = Rect2::new(DVec2::new(0.25, 0.5), DVec2::new(0.75, 1.0));
        for q in r.quadrants() {
            assert!((q.size() - r.half_size()).length() < 1e-15);
        }
    }
}
