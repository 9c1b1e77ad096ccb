//! CPU-side mesh data.

mod cube;

pub use cube::{CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT, CubeMesh, CubeVertex};
