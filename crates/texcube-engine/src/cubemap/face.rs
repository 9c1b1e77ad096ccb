/// Number of faces in a cube map.
pub const CUBE_FACE_COUNT: usize = 6;

/// One face of a cube map.
///
/// The discriminant is both the frame index in the vertical strip (top = 0)
/// and the array layer of the uploaded texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CubeFace {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

impl CubeFace {
    /// All faces in strip/layer order.
    pub const ALL: [CubeFace; CUBE_FACE_COUNT] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal of the face.
    pub fn normal(self) -> [f32; 3] {
        match self {
            CubeFace::PositiveX => [1.0, 0.0, 0.0],
            CubeFace::NegativeX => [-1.0, 0.0, 0.0],
            CubeFace::PositiveY => [0.0, 1.0, 0.0],
            CubeFace::NegativeY => [0.0, -1.0, 0.0],
            CubeFace::PositiveZ => [0.0, 0.0, 1.0],
            CubeFace::NegativeZ => [0.0, 0.0, -1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_strip_order() {
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn opposite_faces_have_opposite_normals() {
        for pair in CubeFace::ALL.chunks(2) {
            let a = pair[0].normal();
            let b = pair[1].normal();
            assert_eq!([a[0] + b[0], a[1] + b[1], a[2] + b[2]], [0.0; 3]);
        }
    }
}
