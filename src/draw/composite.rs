//! Integer alpha compositing.

use image::{Rgb, RgbImage, RgbaImage};

use crate::types::Colour;

/// Porter-Duff "over": `src` on top of `dst`, straight (non-premultiplied) alpha.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = dst[3] as u32;
    let dst_weight = da * (255 - sa);
    let src_weight = sa * 255;
    let total = src_weight + dst_weight;
    if total == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = src[i] as u32 * src_weight + dst[i] as u32 * dst_weight;
        out[i] = ((c + total / 2) / total) as u8;
    }
    out[3] = ((total + 127) / 255) as u8;
    out
}

/// Flatten onto an opaque background, using alpha as the paste mask.
pub fn flatten(image: &RgbaImage, background: Colour) -> RgbImage {
    let bg = background.to_rgb();
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y).0;
        let a = p[3] as u32;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
        Rgb([mix(p[0], bg[0]), mix(p[1], bg[1]), mix(p[2], bg[2])])
    })
}
