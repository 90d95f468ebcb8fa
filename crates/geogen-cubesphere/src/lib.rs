//! Cube-sphere geometry: the six cube faces, their basis vectors, and the cube-to-sphere projection.

mod cube_face;
mod projection;

pub use cube_face::CubeFace;
pub use projection::FaceBasis;
