use std::path::Path;

use image::{DynamicImage, RgbaImage};

use super::sample::{sample_bilinear, select_face};
use super::{CUBE_FACE_COUNT, CubeFace, CubemapError};

/// Decoded cube map: six square RGBA8 faces of identical size.
#[derive(Debug, Clone)]
pub struct CubeStrip {
    face_size: u32,
    faces: [RgbaImage; CUBE_FACE_COUNT],
}

impl CubeStrip {
    /// Reads and decodes a vertical strip from disk.
    ///
    /// The file format is detected from its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CubemapError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| CubemapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let image = image::load_from_memory(&bytes).map_err(|source| CubemapError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let strip = Self::from_image(image)?;
        log::debug!(
            "decoded cube-map strip {} ({}px faces)",
            path.display(),
            strip.face_size
        );
        Ok(strip)
    }

    /// Slices an already decoded strip into faces, top to bottom.
    pub fn from_image(image: DynamicImage) -> Result<Self, CubemapError> {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();

        if width == 0 || height != width.saturating_mul(CUBE_FACE_COUNT as u32) {
            return Err(CubemapError::AspectRatio { width, height });
        }

        let faces = std::array::from_fn(|i| {
            image::imageops::crop_imm(&rgba, 0, i as u32 * width, width, width).to_image()
        });

        Ok(Self {
            face_size: width,
            faces,
        })
    }

    /// Edge length of every face, in texels.
    #[inline]
    pub fn face_size(&self) -> u32 {
        self.face_size
    }

    #[inline]
    pub fn face(&self, face: CubeFace) -> &RgbaImage {
        &self.faces[face.index()]
    }

    /// All face texels, tightly packed in layer order.
    ///
    /// Row stride is `4 * face_size` bytes and each layer holds `face_size` rows.
    pub fn layer_bytes(&self) -> Vec<u8> {
        let layer_len = self.face_size as usize * self.face_size as usize * 4;
        let mut out = Vec::with_capacity(layer_len * CUBE_FACE_COUNT);
        for face in &self.faces {
            out.extend_from_slice(face.as_raw());
        }
        out
    }

    /// Samples the cube map along `dir` the way the GPU would (bilinear within
    /// the selected face, clamped to its edges).
    ///
    /// Returns `None` for the zero vector or a non-finite direction.
    pub fn sample(&self, dir: [f32; 3]) -> Option<[u8; 4]> {
        let (face, uv) = select_face(dir)?;
        Some(sample_bilinear(self.face(face), uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const YELLOW: [u8; 4] = [255, 255, 0, 255];
    const CYAN: [u8; 4] = [0, 255, 255, 255];
    const MAGENTA: [u8; 4] = [255, 0, 255, 255];

    const STRIP_COLORS: [[u8; 4]; 6] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA];

    fn solid_strip(size: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(size, size * 6, |_, y| Rgba(STRIP_COLORS[(y / size) as usize]));
        DynamicImage::ImageRgba8(img)
    }

    // ── slicing ───────────────────────────────────────────────────────────

    #[test]
    fn slices_six_square_faces_in_order() {
        let strip = CubeStrip::from_image(solid_strip(64)).unwrap();
        assert_eq!(strip.face_size(), 64);

        for (face, color) in CubeFace::ALL.iter().zip(STRIP_COLORS) {
            let img = strip.face(*face);
            assert_eq!(img.dimensions(), (64, 64));
            assert!(img.pixels().all(|p| p.0 == color), "{face:?}");
        }
    }

    #[test]
    fn layer_bytes_are_packed_in_face_order() {
        let strip = CubeStrip::from_image(solid_strip(4)).unwrap();
        let bytes = strip.layer_bytes();
        let layer = 4 * 4 * 4;
        assert_eq!(bytes.len(), layer * 6);

        for (i, color) in STRIP_COLORS.iter().enumerate() {
            assert_eq!(&bytes[i * layer..i * layer + 4], color);
        }
    }

    #[test]
    fn rgb_input_is_expanded_to_opaque_rgba() {
        let rgb = image::RgbImage::from_pixel(2, 12, image::Rgb([10, 20, 30]));
        let strip = CubeStrip::from_image(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(strip.face(CubeFace::NegativeZ).get_pixel(1, 1).0, [10, 20, 30, 255]);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_wrong_aspect_ratio() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(64, 380));
        let err = CubeStrip::from_image(img).unwrap_err();
        assert!(matches!(err, CubemapError::AspectRatio { width: 64, height: 380 }));
    }

    #[test]
    fn rejects_horizontal_strip() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(384, 64));
        assert!(CubeStrip::from_image(img).is_err());
    }

    #[test]
    fn rejects_empty_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert!(matches!(
            CubeStrip::from_image(img),
            Err(CubemapError::AspectRatio { width: 0, height: 0 })
        ));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VerticalStrip.png");

        let err = CubeStrip::open(&path).unwrap_err();
        assert!(matches!(err, CubemapError::Read { .. }));
        assert!(err.to_string().contains("VerticalStrip.png"));

        let cause = std::error::Error::source(&err).unwrap();
        let io = cause.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn garbage_file_reports_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(matches!(CubeStrip::open(&path), Err(CubemapError::Decode { .. })));
    }

    #[test]
    fn opens_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        solid_strip(8).save(&path).unwrap();

        let strip = CubeStrip::open(&path).unwrap();
        assert_eq!(strip.face_size(), 8);
        assert_eq!(strip.face(CubeFace::PositiveY).get_pixel(0, 0).0, BLUE);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn samples_face_assigned_to_direction() {
        let strip = CubeStrip::from_image(solid_strip(64)).unwrap();

        assert_eq!(strip.sample([1.0, 0.0, 0.0]), Some(RED));
        assert_eq!(strip.sample([-1.0, 0.0, 0.0]), Some(GREEN));
        assert_eq!(strip.sample([0.0, 1.0, 0.0]), Some(BLUE));
        assert_eq!(strip.sample([0.0, -1.0, 0.0]), Some(YELLOW));
        assert_eq!(strip.sample([0.0, 0.0, 1.0]), Some(CYAN));
        assert_eq!(strip.sample([0.0, 0.0, -1.0]), Some(MAGENTA));
    }

    #[test]
    fn sampling_ignores_direction_length() {
        let strip = CubeStrip::from_image(solid_strip(16)).unwrap();
        // Unnormalized local-space cube positions, as produced by the vertex stage.
        assert_eq!(strip.sample([0.5, 0.1, -0.2]), strip.sample([1.0, 0.2, -0.4]));
        assert_eq!(strip.sample([0.5, 0.0, 0.0]), Some(RED));
    }

    #[test]
    fn edge_and_corner_directions_stay_on_the_selected_face() {
        // Each face gets a unique color; a sample that bled across a seam
        // would return a blend or a neighbor's color.
        let strip = CubeStrip::from_image(solid_strip(8)).unwrap();

        for sx in [-1.0f32, 0.0, 1.0] {
            for sy in [-1.0f32, 0.0, 1.0] {
                for sz in [-1.0f32, 0.0, 1.0] {
                    let dir = [sx, sy, sz];
                    let Some((face, _)) = select_face(dir) else {
                        assert_eq!(dir, [0.0; 3]);
                        continue;
                    };
                    assert_eq!(strip.sample(dir), Some(STRIP_COLORS[face.index()]), "{dir:?}");
                }
            }
        }
    }

    #[test]
    fn zero_direction_has_no_sample() {
        let strip = CubeStrip::from_image(solid_strip(4)).unwrap();
        assert_eq!(strip.sample([0.0, 0.0, 0.0]), None);
    }
}
