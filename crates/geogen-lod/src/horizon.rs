//! Far-hemisphere test for whole-face patches.
//!
//! A face whose center points away from the viewer (relative to the planet
//! center) cannot contribute anything visible, so its entire patch tree is
//! hidden without evaluating distances.

use geogen_math::{Rect2, normalize_or_self};
use glam::DVec3;

/// Tolerance when deciding whether a box spans the full `[-1, 1]` face.
const FULL_FACE_EPSILON: f64 = 1e-9;

/// Cosine of the angle between the chunk and the camera as seen from the planet center.
pub fn hemisphere_alignment(chunk_pos: DVec3, camera_pos: DVec3, planet_pos: DVec3) -> f64 {
    let local_chunk = normalize_or_self(chunk_pos - planet_pos);
    let local_camera = normalize_or_self(camera_pos - planet_pos);
    local_chunk.dot(local_camera)
}

/// True when the camera is on the opposite hemisphere, including the great circle itself.
pub fn is_far_hemisphere(alignment: f64) -> bool {
    alignment <= 0.0
}

/// True for patches covering a whole cube face (the only ones the horizon test applies to).
pub fn spans_full_face(vert_box: &Rect2) -> bool {
    vert_box.size().x.abs() >= Rect2::FACE.size().x - FULL_FACE_EPSILON
}
