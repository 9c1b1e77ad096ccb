use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use super::{Camera, Light};

// Layouts mirror `render/shaders/textured_cube.wgsl` (uniform address space:
// vec3 and mat3 columns are 16-byte aligned).

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub direction: [f32; 3],
    pub shininess: f32,
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub diffuse: [f32; 3],
    pub _pad1: f32,
    pub specular: [f32; 3],
    pub _pad2: f32,
}

impl From<&Light> for LightUniform {
    fn from(light: &Light) -> Self {
        Self {
            direction: light.direction.normalize_or(glam::Vec3::Z).to_array(),
            shininess: light.shininess.max(1.0),
            ambient: light.ambient.to_array(),
            _pad0: 0.0,
            diffuse: light.diffuse.to_array(),
            _pad1: 0.0,
            specular: light.specular.to_array(),
            _pad2: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model_view: [[f32; 4]; 4],
    pub model_view_proj: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 3],
    pub light: LightUniform,
}

impl SceneUniforms {
    pub fn new(model: Mat4, camera: &Camera, aspect: f32, light: &Light) -> Self {
        let model_view = camera.view_matrix() * model;
        let model_view_proj = camera.projection_matrix(aspect) * model_view;

        let normal = Mat3::from_mat4(model_view).inverse().transpose();
        let pad = |c: glam::Vec3| [c.x, c.y, c.z, 0.0];

        Self {
            model_view: model_view.to_cols_array_2d(),
            model_view_proj: model_view_proj.to_cols_array_2d(),
            normal_matrix: [pad(normal.x_axis), pad(normal.y_axis), pad(normal.z_axis)],
            light: LightUniform::from(light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_sizes_follow_wgsl_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 240);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn identity_model_keeps_normals() {
        let u = SceneUniforms::new(Mat4::IDENTITY, &Camera::default(), 1.0, &Light::default());
        // The default camera only translates, so the normal matrix is identity.
        assert_eq!(u.normal_matrix[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(u.normal_matrix[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(u.normal_matrix[2], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn light_direction_is_normalized() {
        let light = Light {
            direction: Vec3::new(0.0, 3.0, 4.0),
            ..Light::default()
        };
        let u = LightUniform::from(&light);
        assert!((Vec3::from_array(u.direction).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_light_direction_falls_back_to_headlight() {
        let light = Light {
            direction: Vec3::ZERO,
            ..Light::default()
        };
        assert_eq!(LightUniform::from(&light).direction, [0.0, 0.0, 1.0]);
    }
}
