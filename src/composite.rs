//! Compositing of a scaled photo into a border template's interior.

use image::{Rgba, RgbaImage};

use crate::{error::BordureResult, region::InteriorMask};

pub type Rgba8 = [u8; 4];

/// Alpha-over: blend `src` on top of `dst`.
///
/// `out = src*a + dst*(1-a)` per channel, with the alpha channel composed as
/// `a_out = a_src + a_dst*(1-a_src)`.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == u8::MAX {
        return src;
    }

    let sa = u16::from(src[3]);
    let inv = 255u16 - sa;

    let mut out = [0u8; 4];
    out[3] = src[3].saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = mul_div255(u16::from(src[i]), sa).saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Fill the interior mask of a blank canvas with the scaled photo, then layer
/// the border over the whole canvas.
///
/// `scaled` must already have the border's exact dimensions. The result has
/// the border's dimensions; every pixel outside the mask is determined solely
/// by the border, every pixel inside shows photo content filtered by the
/// border's own transparency at that coordinate.
pub fn compose_icon(
    scaled: &RgbaImage,
    border: &RgbaImage,
    mask: &InteriorMask,
) -> BordureResult<RgbaImage> {
    if scaled.dimensions() != border.dimensions() {
        return Err(anyhow::anyhow!(
            "compose expects matching dimensions (scaled {:?}, border {:?})",
            scaled.dimensions(),
            border.dimensions(),
        )
        .into());
    }

    let (width, height) = border.dimensions();
    // Zeroed buffer, i.e. fully transparent.
    let mut canvas = RgbaImage::new(width, height);

    for p in mask.iter() {
        canvas.put_pixel(p.x, p.y, *scaled.get_pixel(p.x, p.y));
    }

    for (x, y, px) in canvas.enumerate_pixels_mut() {
        *px = Rgba(over(px.0, border.get_pixel(x, y).0));
    }

    Ok(canvas)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use crate::region::{Point, compute_interior_mask};

    use super::*;

    #[test]
    fn over_opaque_src_replaces_dst() {
        let dst = [10, 20, 30, 255];
        let src = [200, 0, 0, 255];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_transparent_src_is_noop() {
        let dst = [10, 20, 30, 40];
        let src = [255, 255, 255, 0];
        assert_eq!(over(dst, src), dst);
    }

    #[test]
    fn over_half_alpha_blends() {
        let dst = [255, 255, 255, 255];
        let src = [0, 0, 0, 128];
        let out = over(dst, src);
        assert_eq!(out[3], 255);
        // 0*128/255 + 255*127/255 = 127
        assert_eq!(out[0], 127);
    }

    #[test]
    fn compose_two_by_two_scenario() {
        // Border transparent only at (0,0), opaque black elsewhere.
        let border = RgbaImage::from_fn(2, 2, |x, y| {
            if (x, y) == (0, 0) {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let mask = compute_interior_mask(&border, &[Point::new(0, 0)]);
        assert_eq!(mask.len(), 1);

        let scaled = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let out = compose_icon(&scaled, &border, &mask).unwrap();

        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        for (x, y) in [(1, 0), (0, 1), (1, 1)] {
            assert_eq!(*out.get_pixel(x, y), Rgba([0, 0, 0, 255]));
        }
    }

    #[test]
    fn fully_transparent_border_with_full_mask_passes_photo_through() {
        let border = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let mask = compute_interior_mask(&border, &[Point::new(2, 2)]);
        assert_eq!(mask.len(), 16);

        let scaled = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8 * 10, y as u8 * 10, 7, 255]));
        let out = compose_icon(&scaled, &border, &mask).unwrap();
        assert_eq!(out, scaled);
    }

    #[test]
    fn empty_mask_yields_the_border_itself() {
        let border = RgbaImage::from_pixel(3, 3, Rgba([9, 8, 7, 255]));
        let mask = compute_interior_mask(&border, &[Point::new(1, 1)]);
        assert!(mask.is_empty());

        let scaled = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let out = compose_icon(&scaled, &border, &mask).unwrap();
        assert_eq!(out, border);
    }

    #[test]
    fn output_dimensions_follow_the_border() {
        let border = RgbaImage::from_pixel(5, 9, Rgba([0, 0, 0, 255]));
        let mask = compute_interior_mask(&border, &[Point::new(2, 4)]);
        let scaled = RgbaImage::from_pixel(5, 9, Rgba([1, 1, 1, 255]));
        let out = compose_icon(&scaled, &border, &mask).unwrap();
        assert_eq!(out.dimensions(), (5, 9));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let border = RgbaImage::new(4, 4);
        let scaled = RgbaImage::new(3, 4);
        let mask = compute_interior_mask(&border, &[]);
        assert!(compose_icon(&scaled, &border, &mask).is_err());
    }
}
