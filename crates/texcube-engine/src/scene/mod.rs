//! Scene state for the textured cube: camera, light, spin and the uniform
//! block derived from them each frame.

mod camera;
mod light;
mod spin;
mod uniforms;

pub use camera::Camera;
pub use light::Light;
pub use spin::Spin;
pub use uniforms::{LightUniform, SceneUniforms};
