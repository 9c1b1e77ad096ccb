//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and create
//! them lazily on first use, rebuilding when the surface format or size changes.
//!
//! Convention:
//! - geometry is in local space, right-handed, +Y up
//! - clip depth is `[0, 1]` with `Less` comparison

mod ctx;
mod cube;
mod depth;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
pub use depth::DepthTarget;
