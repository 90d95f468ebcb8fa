//! The six faces of a cubesphere.

use glam::DVec3;

use crate::FaceBasis;

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction. The discriminant is the face index
/// used to pair a face with its heightmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`CubeFace::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward-pointing unit normal for this face (the face's "local up").
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// Projection basis of this face.
    #[must_use]
    pub fn basis(self) -> FaceBasis {
        FaceBasis::from_local_up(self.normal())
    }
}
