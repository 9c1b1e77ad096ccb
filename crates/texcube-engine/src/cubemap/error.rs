use std::path::PathBuf;

/// Failure while loading a cube-map strip.
#[derive(Debug, thiserror::Error)]
pub enum CubemapError {
    #[error("failed to read cube-map strip {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode cube-map strip {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The strip is not `N` wide by `6 * N` tall (or `N` is zero).
    #[error("cube-map strip must be N x 6N pixels with N > 0, got {width}x{height}")]
    AspectRatio { width: u32, height: u32 },
}
