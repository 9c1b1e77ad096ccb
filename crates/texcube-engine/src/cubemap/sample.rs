//! CPU cube addressing, matching how the GPU samples a cube view.
//!
//! The largest-magnitude component of the direction selects the face; the
//! other two components, divided by that magnitude, give the in-face
//! coordinates. `u` runs left to right and `v` top to bottom in the face
//! image, following the wgpu/Vulkan cube table.

use image::RgbaImage;

use super::CubeFace;

/// Maps a direction to the face it hits and the `[u, v]` coordinate inside it.
///
/// Coordinates are in `[0, 1]`. Ties between axes resolve X, then Y, then Z.
/// Returns `None` for the zero vector or a non-finite direction; any other
/// magnitude is irrelevant.
pub fn select_face(dir: [f32; 3]) -> Option<(CubeFace, [f32; 2])> {
    let [x, y, z] = dir;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return None;
    }

    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

    // (face, sc, tc, |ma|)
    let (face, sc, tc, ma) = if ax >= ay && ax >= az {
        if x >= 0.0 {
            (CubeFace::PositiveX, -z, -y, ax)
        } else {
            (CubeFace::NegativeX, z, -y, ax)
        }
    } else if ay >= az {
        if y >= 0.0 {
            (CubeFace::PositiveY, x, z, ay)
        } else {
            (CubeFace::NegativeY, x, -z, ay)
        }
    } else if z >= 0.0 {
        (CubeFace::PositiveZ, x, -y, az)
    } else {
        (CubeFace::NegativeZ, -x, -y, az)
    };

    if ma == 0.0 {
        return None;
    }

    let u = (0.5 * (sc / ma + 1.0)).clamp(0.0, 1.0);
    let v = (0.5 * (tc / ma + 1.0)).clamp(0.0, 1.0);
    Some((face, [u, v]))
}

/// Bilinear lookup inside one face, clamped to its edge texels.
pub(super) fn sample_bilinear(face: &RgbaImage, uv: [f32; 2]) -> [u8; 4] {
    let w = face.width();
    let h = face.height();

    // Texel centers sit at half-integer positions.
    let fx = uv[0] * w as f32 - 0.5;
    let fy = uv[1] * h as f32 - 0.5;

    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;

    let clamp_x = |x: f32| (x.max(0.0) as u32).min(w - 1);
    let clamp_y = |y: f32| (y.max(0.0) as u32).min(h - 1);

    let (xa, xb) = (clamp_x(x0), clamp_x(x0 + 1.0));
    let (ya, yb) = (clamp_y(y0), clamp_y(y0 + 1.0));

    let p00 = face.get_pixel(xa, ya).0;
    let p10 = face.get_pixel(xb, ya).0;
    let p01 = face.get_pixel(xa, yb).0;
    let p11 = face.get_pixel(xb, yb).0;

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = lerp(p00[c] as f32, p10[c] as f32, tx);
        let bottom = lerp(p01[c] as f32, p11[c] as f32, tx);
        out[c] = lerp(top, bottom, ty).round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_directions_select_their_face_center() {
        for face in CubeFace::ALL {
            let (hit, uv) = select_face(face.normal()).unwrap();
            assert_eq!(hit, face);
            assert_eq!(uv, [0.5, 0.5]);
        }
    }

    #[test]
    fn zero_and_nan_directions_are_rejected() {
        assert!(select_face([0.0, 0.0, 0.0]).is_none());
        assert!(select_face([f32::NAN, 1.0, 0.0]).is_none());
        assert!(select_face([f32::INFINITY, 0.0, 0.0]).is_none());
    }

    #[test]
    fn magnitude_does_not_change_addressing() {
        let dirs = [[0.3, -0.2, 0.9], [-1.0, 0.5, 0.25], [0.1, 0.7, -0.4]];
        for d in dirs {
            let scaled = [d[0] * 37.5, d[1] * 37.5, d[2] * 37.5];
            assert_eq!(select_face(d), select_face(scaled));
        }
    }

    #[test]
    fn ties_prefer_x_then_y() {
        assert_eq!(select_face([1.0, 1.0, 1.0]).unwrap().0, CubeFace::PositiveX);
        assert_eq!(select_face([0.0, -1.0, 1.0]).unwrap().0, CubeFace::NegativeY);
    }

    #[test]
    fn corner_directions_stay_inside_unit_square() {
        for sx in [-1.0f32, 1.0] {
            for sy in [-1.0f32, 1.0] {
                for sz in [-1.0f32, 1.0] {
                    let (_, [u, v]) = select_face([sx, sy, sz]).unwrap();
                    assert!((0.0..=1.0).contains(&u), "u = {u}");
                    assert!((0.0..=1.0).contains(&v), "v = {v}");
                }
            }
        }
    }

    #[test]
    fn positive_z_orientation() {
        // Looking down +Z: +X is to the right and +Y is up.
        let (_, [u, v]) = select_face([0.5, 0.5, 1.0]).unwrap();
        assert!(u > 0.5);
        assert!(v < 0.5);
    }

    #[test]
    fn bilinear_clamps_at_edges() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, image::Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 1, image::Rgba([0, 0, 255, 255]));

        assert_eq!(sample_bilinear(&img, [0.0, 0.0]), [0, 0, 0, 255]);
        assert_eq!(sample_bilinear(&img, [1.0, 0.0]), [255, 0, 0, 255]);
        assert_eq!(sample_bilinear(&img, [0.0, 1.0]), [0, 255, 0, 255]);
        assert_eq!(sample_bilinear(&img, [1.0, 1.0]), [0, 0, 255, 255]);
    }

    #[test]
    fn bilinear_blends_between_centers() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([200, 0, 0, 255]));

        assert_eq!(sample_bilinear(&img, [0.5, 0.5]), [100, 0, 0, 255]);
    }
}
