use glam::Vec3;

/// Directional light in view space.
///
/// `direction` points from the surface toward the light. The diffuse term is
/// modulated by the cube-map sample; specular is added on top.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Light {
    /// Headlight: shines from the camera along its view axis.
    fn default() -> Self {
        Self {
            direction: Vec3::Z,
            ambient: Vec3::splat(0.25),
            diffuse: Vec3::splat(0.75),
            specular: Vec3::splat(0.2),
            shininess: 32.0,
        }
    }
}
