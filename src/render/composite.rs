use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

pub fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
