use std::path::PathBuf;

use winit::dpi::LogicalSize;

use texcube_engine::window::RuntimeConfig;

/// Cube-map strip shipped with the viewer.
pub const STRIP_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/VerticalStrip.png");

/// Fixed viewer parameters.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: LogicalSize<f64>,
    pub strip_path: PathBuf,
    /// Edge length of the cube in local units.
    pub cube_size: f32,
    /// Spin rate on each axis, radians per second.
    pub spin_rate: f32,
    pub clear_color: wgpu::Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Textured Cube".to_string(),
            window_size: LogicalSize::new(480.0, 270.0),
            strip_path: PathBuf::from(STRIP_PATH),
            cube_size: 1.0,
            spin_rate: std::f32::consts::FRAC_PI_3,
            clear_color: wgpu::Color {
                r: 0.5,
                g: 0.5,
                b: 0.5,
                a: 1.0,
            },
        }
    }
}

impl ViewerConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.window_size,
            ..RuntimeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texcube_engine::cubemap::{CubeFace, CubeStrip};

    #[test]
    fn bundled_strip_is_a_valid_cube_map() {
        let strip = CubeStrip::open(ViewerConfig::default().strip_path).unwrap();
        assert_eq!(strip.face_size(), 128);
        // Faces are distinct, so face order mistakes show up on screen.
        let centers: Vec<_> = CubeFace::ALL
            .iter()
            .map(|f| strip.sample(f.normal()).unwrap())
            .collect();
        for (i, a) in centers.iter().enumerate() {
            assert!(centers[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn runtime_uses_viewer_window() {
        let cfg = ViewerConfig::default();
        let rt = cfg.runtime();
        assert_eq!(rt.title, cfg.title);
        assert_eq!(rt.initial_size, LogicalSize::new(480.0, 270.0));
    }
}
