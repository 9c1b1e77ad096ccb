//! Cube-map loading.
//!
//! A cube map is authored as a single vertical strip: six square frames stacked
//! top to bottom. The strip is decoded and sliced on the CPU ([`CubeStrip`]),
//! then uploaded once as a 6-layer texture with a cube view ([`CubeTexture`]).
//!
//! Frame order in the strip is the wgpu cube-layer order:
//! +X, -X, +Y, -Y, +Z, -Z.

mod error;
mod face;
mod sample;
mod strip;
mod texture;

pub use error::CubemapError;
pub use face::{CUBE_FACE_COUNT, CubeFace};
pub use sample::select_face;
pub use strip::CubeStrip;
pub use texture::CubeTexture;
