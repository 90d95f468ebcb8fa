//! Scalar and vector helpers plus the 2D boxes that describe patch footprints.

mod rect;
mod vector;

pub use rect::Rect2;
pub use vector::{lerp, normalize_or_self};
