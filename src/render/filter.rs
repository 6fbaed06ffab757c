use crate::foundation::{
    error::{KeyImageError, KeyImageResult},
    math::clamp_u8,
};

/// 3x3 colour matrix of the CSS `hue-rotate()` filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueRotate {
    m: [[f64; 3]; 3],
}

impl HueRotate {
    pub fn from_degrees(deg: u16) -> Self {
        let theta = (f64::from(deg) * std::f64::consts::PI) / 180.0;
        let (s, c) = (theta.sin(), theta.cos());
        Self {
            m: [
                [
                    0.213 + c * 0.787 - s * 0.213,
                    0.715 - c * 0.715 - s * 0.715,
                    0.072 - c * 0.072 + s * 0.928,
                ],
                [
                    0.213 - c * 0.213 + s * 0.143,
                    0.715 + c * 0.285 + s * 0.140,
                    0.072 - c * 0.072 - s * 0.283,
                ],
                [
                    0.213 - c * 0.213 - s * 0.787,
                    0.715 - c * 0.715 + s * 0.715,
                    0.072 + c * 0.928 + s * 0.072,
                ],
            ],
        }
    }

    /// Rotate one premultiplied pixel. Alpha is untouched and colour stays `<= alpha`.
    pub fn apply(&self, px: [u8; 4]) -> [u8; 4] {
        let a = px[3];
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let rgb = [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])];
        let mut out = [0u8; 4];
        for (i, row) in self.m.iter().enumerate() {
            let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            out[i] = clamp_u8(v).min(a);
        }
        out[3] = a;
        out
    }
}

/// Hue-rotate a premultiplied RGBA8 buffer in place. Whole turns are a no-op.
pub fn hue_rotate_in_place(rgba: &mut [u8], deg: u16) -> KeyImageResult<()> {
    if !rgba.len().is_multiple_of(4) {
        return Err(KeyImageError::render(
            "hue_rotate_in_place expects an rgba8 buffer",
        ));
    }
    if deg % 360 == 0 {
        return Ok(());
    }
    let m = HueRotate::from_degrees(deg);
    for px in rgba.chunks_exact_mut(4) {
        let out = m.apply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/filter.rs"]
mod tests;
