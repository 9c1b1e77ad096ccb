use anyhow::Result;

use super::{CUBE_FACE_COUNT, CubeStrip};

/// GPU cube map: a 6-layer texture, a cube view over it and its sampler.
pub struct CubeTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl CubeTexture {
    /// Texel format of the uploaded faces. Strip images are authored in sRGB.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Uploads all six faces of `strip` in a single copy.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, strip: &CubeStrip) -> Result<Self> {
        let size = strip.face_size();
        let max = device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            size <= max,
            "cube-map face size {size} exceeds device limit {max}"
        );

        let extent = wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: CUBE_FACE_COUNT as u32,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("texcube cube texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        // Layers are contiguous in `layer_bytes`, so one copy fills the cube.
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &strip.layer_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size),
                rows_per_image: Some(size),
            },
            extent,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("texcube cube view"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            array_layer_count: Some(CUBE_FACE_COUNT as u32),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("texcube cube sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        log::info!("uploaded cube map: 6 x {size}x{size}");

        Ok(Self {
            texture,
            view,
            sampler,
        })
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Face edge length in texels.
    #[inline]
    pub fn face_size(&self) -> u32 {
        self.texture.width()
    }
}
