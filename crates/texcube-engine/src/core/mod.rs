//! Contracts between the runtime loop and the application.
//!
//! The runtime owns the window and GPU; the application only sees a
//! per-frame context and returns whether to keep running.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
