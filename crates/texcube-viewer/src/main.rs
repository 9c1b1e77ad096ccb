use anyhow::{Context, Result};

use texcube_engine::cubemap::CubeStrip;
use texcube_engine::device::GpuInit;
use texcube_engine::logging::{LoggingConfig, init_logging};
use texcube_engine::window::Runtime;

mod app;
mod config;

use app::CubeApp;
use config::ViewerConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();

    // Decode before any window exists: a bad strip exits non-zero with nothing drawn.
    let strip = load_strip(&config)?;

    let app = CubeApp::new(&config, strip);
    Runtime::run(config.runtime(), GpuInit::default(), app)
}

/// Decodes the configured strip; the error names the file.
fn load_strip(config: &ViewerConfig) -> Result<CubeStrip> {
    let strip = CubeStrip::open(&config.strip_path).with_context(|| {
        format!(
            "could not load cube map from {}",
            config.strip_path.display()
        )
    })?;
    log::info!(
        "loaded {} ({}px faces)",
        config.strip_path.display(),
        strip.face_size()
    );
    Ok(strip)
}
