use anyhow::Result;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use texcube_engine::core::{App, AppControl, FrameCtx};
use texcube_engine::cubemap::CubeStrip;
use texcube_engine::render::CubeRenderer;
use texcube_engine::scene::{Camera, Light, SceneUniforms, Spin};

use crate::config::ViewerConfig;

/// Spinning cube wearing the loaded cube map.
pub struct CubeApp {
    renderer: CubeRenderer,
    spin: Spin,
    camera: Camera,
    light: Light,
    clear: wgpu::Color,
}

impl CubeApp {
    /// Takes ownership of the decoded strip; it moves into the renderer.
    pub fn new(config: &ViewerConfig, strip: CubeStrip) -> Self {
        Self {
            renderer: CubeRenderer::new(strip, config.cube_size),
            spin: Spin::uniform(config.spin_rate),
            camera: Camera::default(),
            light: Light::default(),
            clear: config.clear_color,
        }
    }
}

impl App for CubeApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        self.spin.advance(ctx.time.dt);

        let model = self.spin.model_matrix();
        let (camera, light) = (&self.camera, &self.light);
        let renderer = &mut self.renderer;

        ctx.render(self.clear, |rctx, target| {
            let uniforms = SceneUniforms::new(model, camera, rctx.aspect(), light);
            renderer.render(rctx, target, &uniforms)
        })
    }
}
