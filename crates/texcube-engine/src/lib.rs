//! Texcube engine crate.
//!
//! Loads a cube map from a vertical image strip and renders a spinning cube
//! textured with it. The vertex stage forwards each vertex's local position
//! as the cube-map sample direction for the fragment stage.

pub mod core;
pub mod cubemap;
pub mod device;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
