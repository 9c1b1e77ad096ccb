use bytemuck::{Pod, Zeroable};

use crate::cubemap::{CUBE_FACE_COUNT, CubeFace};

pub const CUBE_VERTEX_COUNT: usize = CUBE_FACE_COUNT * 4;
pub const CUBE_INDEX_COUNT: usize = CUBE_FACE_COUNT * 6;

/// Cube vertex in local (object) space.
///
/// Normals are per face, so each corner appears once per adjacent face.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Direction the vertex stage forwards to the fragment stage as the
    /// cube-map sample coordinate: the untransformed local position.
    #[inline]
    pub fn cubemap_coord(&self) -> [f32; 3] {
        self.position
    }
}

/// Axis-aligned cube centered on the origin.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    pub vertices: [CubeVertex; CUBE_VERTEX_COUNT],
    pub indices: [u16; CUBE_INDEX_COUNT],
}

impl CubeMesh {
    /// Builds a cube with edge length `size`. Front faces wind counter-clockwise.
    pub fn new(size: f32) -> Self {
        let half = size * 0.5;

        let mut vertices = [CubeVertex::zeroed(); CUBE_VERTEX_COUNT];
        let mut indices = [0u16; CUBE_INDEX_COUNT];

        for face in CubeFace::ALL {
            let n = face.normal();
            let (u, v) = face_axes(face);
            let base = face.index() * 4;

            // (-u,-v) (+u,-v) (+u,+v) (-u,+v); u x v = n keeps them CCW from outside.
            let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
            for (k, (su, sv)) in corners.into_iter().enumerate() {
                let p = std::array::from_fn(|i| (n[i] + su * u[i] + sv * v[i]) * half);
                vertices[base + k] = CubeVertex {
                    position: p,
                    normal: n,
                };
            }

            let b = base as u16;
            indices[face.index() * 6..face.index() * 6 + 6]
                .copy_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
        }

        Self { vertices, indices }
    }
}

/// In-face tangent axes `(u, v)` with `u x v` equal to the face normal.
fn face_axes(face: CubeFace) -> ([f32; 3], [f32; 3]) {
    const X: [f32; 3] = [1.0, 0.0, 0.0];
    const Y: [f32; 3] = [0.0, 1.0, 0.0];
    const Z: [f32; 3] = [0.0, 0.0, 1.0];

    match face {
        CubeFace::PositiveX => (Y, Z),
        CubeFace::NegativeX => (Z, Y),
        CubeFace::PositiveY => (Z, X),
        CubeFace::NegativeY => (X, Z),
        CubeFace::PositiveZ => (X, Y),
        CubeFace::NegativeZ => (Y, X),
    }
}
