use std::ops::Range;

use crate::{
    foundation::core::{ContainerSize, Seed},
    foundation::math::Fnv1a64,
    generator::params::{ImageParams, generate},
};

/// Stable 64-bit digest of every field's exact bit pattern.
pub fn fingerprint_params(params: &ImageParams) -> u64 {
    let mut h = Fnv1a64::new_default();
    write_params(&mut h, params);
    h.finish()
}

/// Digest of all parameter records for `seeds`, in order.
///
/// Any drift in the generator (constants, branch order, float evaluation
/// order) changes this value.
pub fn fingerprint_sweep(seeds: Range<i64>, container: ContainerSize) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_f64(container.px());
    for s in seeds {
        h.write_u64(s as u64);
        write_params(&mut h, &generate(Seed(s), container));
    }
    h.finish()
}

fn write_params(h: &mut Fnv1a64, p: &ImageParams) {
    h.write_u8(p.frame);
    h.write_u16(p.rotation_deg);
    h.write_f64(p.width);
    h.write_f64(p.height);
    h.write_f64(p.offset_x);
    h.write_f64(p.offset_y);
    h.write_u16(p.hue_deg);
}

#[cfg(test)]
#[path = "../../tests/unit/generator/fingerprint.rs"]
mod tests;
